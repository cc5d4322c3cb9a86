use std::io;

use indicatif::{ProgressBar, ProgressStyle};

// 日誌層級由 RUST_LOG 環境變數決定（預設 info）；重複初始化時直接忽略
pub fn setup_logging() -> io::Result<()> {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap()
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager { pb, no_progress }
    }

    pub fn set_message(&self, msg: String) {
        if self.no_progress {
            return;
        }
        self.pb.set_message(msg);
    }

    pub fn inc(&self, delta: u64) {
        if self.no_progress {
            return;
        }
        self.pb.inc(delta);
    }

    pub fn finish_with_message(&self, msg: String) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(msg);
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}
