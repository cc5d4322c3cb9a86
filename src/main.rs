mod service {
    pub(crate) mod config_service;
}

mod config {
    pub(crate) mod config;
    pub(crate) mod ports;
}

mod action {
    pub(crate) mod run;
}

mod models {
    pub(crate) mod job;
}

mod utils {
    pub(crate) mod convert;
    pub(crate) mod ffmpeg;
    pub(crate) mod file;
    pub(crate) mod utils;
}

use std::io;

fn main() -> io::Result<()> {
    crate::action::run::run()?;
    Ok(())
}
