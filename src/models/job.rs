use std::path::PathBuf;

use crate::utils::file::derive_output_path;

// 單一轉換工作：輸入檔與推導出的輸出檔配對，僅存活於一次執行期間
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: PathBuf) -> Self {
        let output = derive_output_path(&input);
        ConversionJob { input, output }
    }

    pub fn input_name(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

// 單一工作的結果：成功、工具回傳非零、或行程無法啟動
#[derive(Debug)]
pub enum JobOutcome {
    Converted,
    ToolFailed { stderr: String },
    LaunchFailed { error: String },
}

impl JobOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, JobOutcome::Converted)
    }
}

#[derive(Debug)]
pub struct JobReport {
    pub job: ConversionJob,
    pub outcome: JobOutcome,
}

// 整批執行的彙總，僅供記錄，不會被持久化
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<JobReport>,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_converted())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.converted()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn job_derives_sibling_webm_output() {
        let job = ConversionJob::new(PathBuf::from("public/assets/b/c.mp4"));
        assert_eq!(job.output, Path::new("public/assets/b/c.webm"));
        assert_eq!(job.input_name(), "c.mp4");
    }

    #[test]
    fn summary_counts_converted_and_failed() {
        let mut summary = BatchSummary::default();
        summary.reports.push(JobReport {
            job: ConversionJob::new(PathBuf::from("a.mp4")),
            outcome: JobOutcome::Converted,
        });
        summary.reports.push(JobReport {
            job: ConversionJob::new(PathBuf::from("b.mp4")),
            outcome: JobOutcome::ToolFailed {
                stderr: "invalid file".to_string(),
            },
        });
        summary.reports.push(JobReport {
            job: ConversionJob::new(PathBuf::from("c.mp4")),
            outcome: JobOutcome::LaunchFailed {
                error: "not found".to_string(),
            },
        });
        assert_eq!(summary.converted(), 1);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.is_empty());
    }
}
