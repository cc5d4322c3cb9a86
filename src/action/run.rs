use std::io;
use std::path::Path;

use log::{info, warn};

use crate::config::config::DEFAULT_ROOT;
use crate::config::ports::{ConfigPort, ConversionPort};
use crate::models::job::BatchSummary;
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::utils::convert::ConversionAdapter;
use crate::utils::ffmpeg::register_ffmpeg_path;
use crate::utils::utils::setup_logging;

// 預設進入點：固定根目錄，不接受任何命令列參數
pub fn run() -> io::Result<()> {
    setup_logging()?;
    register_ffmpeg_path();
    let summary = run_with_root(Path::new(DEFAULT_ROOT))?;
    if !summary.is_empty() {
        println!(
            "轉換完成！成功 {} 個，失敗 {} 個",
            summary.converted(),
            summary.failed()
        );
    }
    Ok(())
}

// 根目錄不存在視為正常情況：記錄後直接結束，不算錯誤
pub fn run_with_root(root: &Path) -> io::Result<BatchSummary> {
    if !root.is_dir() {
        warn!("目錄不存在：{}", root.display());
        println!("目錄不存在：{}", root.display());
        return Ok(BatchSummary::default());
    }

    let config_port: Box<dyn ConfigPort> =
        Box::new(DefaultConfigAdapter::new(root.to_path_buf()));
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;

    info!("開始批次轉換，根目錄：{}", config.root.display());
    let conversion_port: Box<dyn ConversionPort> = Box::new(ConversionAdapter);
    let summary = conversion_port.execute(config)?;

    // 單檔失敗不影響整體結束碼，只在彙總中呈現
    if summary.failed() > 0 {
        warn!("共 {} 個檔案轉換失敗", summary.failed());
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let summary = run_with_root(&missing).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn empty_root_processes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run_with_root(dir.path()).unwrap();
        assert!(summary.is_empty());
    }
}
