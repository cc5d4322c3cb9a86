use std::io;
use std::path::PathBuf;

use crate::models::job::BatchSummary;

// 批次轉換配置結構體，封裝所有固定參數
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub root: PathBuf,
    pub ffmpeg_program: String,
    pub filter_chain: String,
    pub video_codec: String,
    pub bitrate: String,
    pub crf: String,
    pub pixel_format: String,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<BatchConfig>;
}

// 批次轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: BatchConfig) -> io::Result<BatchSummary>;
}
