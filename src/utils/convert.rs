use std::io;

use log::{error, info, warn};

use crate::config::config::INPUT_EXTENSION;
use crate::config::ports::{BatchConfig, ConversionPort};
use crate::models::job::{BatchSummary, ConversionJob, JobOutcome, JobReport};
use crate::utils::ffmpeg::{build_ffmpeg_args, run_ffmpeg};
use crate::utils::file::collect_videos;
use crate::utils::utils::create_progress_bar;

// 批次轉換適配器：逐檔同步執行，單檔失敗不會中斷整批
pub struct ConversionAdapter;

impl ConversionPort for ConversionAdapter {
    fn execute(&self, config: BatchConfig) -> io::Result<BatchSummary> {
        let files = collect_videos(&config.root);
        if files.is_empty() {
            warn!(
                "在 {} 中找不到任何 .{} 檔案",
                config.root.display(),
                INPUT_EXTENSION
            );
            println!(
                "在 {} 中找不到任何 .{} 檔案",
                config.root.display(),
                INPUT_EXTENSION
            );
            return Ok(BatchSummary::default());
        }

        let total = files.len();
        info!("找到 {} 個影片待轉換", total);
        println!("找到 {} 個影片待轉換...", total);

        let pb = create_progress_bar(total as u64, config.no_progress);
        let mut summary = BatchSummary::default();
        for (i, input) in files.into_iter().enumerate() {
            let job = ConversionJob::new(input);
            pb.set_message(format!("轉換 {}/{}：{}", i + 1, total, job.input_name()));
            let outcome = convert_one(&config, &job);
            match &outcome {
                JobOutcome::Converted => {
                    info!("[OK] 已輸出：{}", job.output.display());
                }
                JobOutcome::ToolFailed { stderr } => {
                    error!("[ERROR] 轉換 {} 失敗", job.input_name());
                    error!("{}", stderr.trim_end());
                }
                JobOutcome::LaunchFailed { error } => {
                    error!("[EXCEPTION] 無法啟動 {}：{}", config.ffmpeg_program, error);
                }
            }
            summary.reports.push(JobReport { job, outcome });
            pb.inc(1);
        }
        pb.finish_with_message(format!(
            "轉換完成：成功 {} 個，失敗 {} 個",
            summary.converted(),
            summary.failed()
        ));
        Ok(summary)
    }
}

// 單檔的錯誤邊界：任何失敗都化為 JobOutcome，不往外拋
pub fn convert_one(config: &BatchConfig, job: &ConversionJob) -> JobOutcome {
    let args = build_ffmpeg_args(config, job);
    match run_ffmpeg(&config.ffmpeg_program, &args) {
        Ok(output) if output.status.success() => JobOutcome::Converted,
        Ok(output) => JobOutcome::ToolFailed {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => JobOutcome::LaunchFailed {
            error: e.to_string(),
        },
    }
}
