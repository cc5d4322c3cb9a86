use std::io;
use std::path::PathBuf;

use crate::config::config::{
    BITRATE, CRF, FFMPEG_PROGRAM, FILTER_CHAIN, PIXEL_FORMAT, VIDEO_CODEC,
};
use crate::config::ports::{BatchConfig, ConfigPort};

// 配置服務，負責透過 Port 取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<BatchConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器：除了根目錄以外，所有參數皆為固定值
pub struct DefaultConfigAdapter {
    root: PathBuf,
}

impl DefaultConfigAdapter {
    pub fn new(root: PathBuf) -> Self {
        DefaultConfigAdapter { root }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<BatchConfig> {
        Ok(BatchConfig {
            root: self.root.clone(),
            ffmpeg_program: FFMPEG_PROGRAM.to_string(),
            filter_chain: FILTER_CHAIN.to_string(),
            video_codec: VIDEO_CODEC.to_string(),
            bitrate: BITRATE.to_string(),
            crf: CRF.to_string(),
            pixel_format: PIXEL_FORMAT.to_string(),
            no_progress: false,
        })
    }
}
