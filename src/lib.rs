
pub mod service {
    pub mod config_service;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod run;
}

pub mod models {
    pub mod job;
}

pub mod utils {
    pub mod convert;
    pub mod ffmpeg;
    pub mod file;
    pub mod utils;
}
