use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::config::config::{INPUT_EXTENSION, OUTPUT_EXTENSION};

// 遞迴收集根目錄下所有 .mp4 檔案；走訪順序不保證穩定
pub fn collect_videos(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("走訪目錄時發生錯誤，略過：{}", e);
                continue;
            }
        };
        if entry.file_type().is_file()
            && entry.path().extension() == Some(OsStr::new(INPUT_EXTENSION))
        {
            files.push(entry.path().to_path_buf());
        }
    }
    files
}

// 輸出路徑：同目錄、同檔名，僅替換副檔名
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}
