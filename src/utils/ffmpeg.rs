use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Once;

use log::{info, warn};

use crate::config::ports::BatchConfig;
use crate::models::job::ConversionJob;

static REGISTER_FFMPEG: Once = Once::new();

// 啟動時至多執行一次：找得到內建的 FFmpeg 目錄就把它加進 PATH，
// 找不到時僅記錄，假設系統 PATH 已能解析 ffmpeg
pub fn register_ffmpeg_path() {
    REGISTER_FFMPEG.call_once(|| match locate_bundled_ffmpeg() {
        Some(dir) => {
            let mut paths: Vec<PathBuf> = vec![dir.clone()];
            if let Some(current) = env::var_os("PATH") {
                paths.extend(env::split_paths(&current));
            }
            match env::join_paths(paths) {
                Ok(joined) => {
                    env::set_var("PATH", &joined);
                    info!("已將內建 FFmpeg 目錄加入 PATH：{}", dir.display());
                }
                Err(e) => {
                    warn!("無法更新 PATH：{}", e);
                }
            }
        }
        None => {
            info!("未找到內建 FFmpeg，假設 ffmpeg 已在系統 PATH 中");
        }
    });
}

// 先看 FFMPEG_DIR 環境變數，再看慣例的 tools/ffmpeg/bin 目錄
fn locate_bundled_ffmpeg() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("FFMPEG_DIR") {
        let dir = PathBuf::from(dir);
        if dir.is_dir() {
            return Some(dir);
        }
    }
    let local = PathBuf::from("tools/ffmpeg/bin");
    if local.is_dir() {
        Some(local)
    } else {
        None
    }
}

// 固定參數組：覆寫旗標、去背濾鏡鏈、VP9、CRF、帶 alpha 的像素格式
pub fn build_ffmpeg_args(config: &BatchConfig, job: &ConversionJob) -> Vec<OsString> {
    vec![
        OsString::from("-y"),
        OsString::from("-i"),
        job.input.clone().into_os_string(),
        OsString::from("-vf"),
        OsString::from(&config.filter_chain),
        OsString::from("-c:v"),
        OsString::from(&config.video_codec),
        OsString::from("-b:v"),
        OsString::from(&config.bitrate),
        OsString::from("-crf"),
        OsString::from(&config.crf),
        OsString::from("-pix_fmt"),
        OsString::from(&config.pixel_format),
        job.output.clone().into_os_string(),
    ]
}

// 同步執行並擷取輸出（不即時串流），失敗時由呼叫端決定是否顯示 stderr
pub fn run_ffmpeg(program: &str, args: &[OsString]) -> io::Result<Output> {
    Command::new(program).args(args).output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::{
        BITRATE, CRF, FFMPEG_PROGRAM, FILTER_CHAIN, PIXEL_FORMAT, VIDEO_CODEC,
    };
    use std::path::PathBuf;

    fn fixed_config() -> BatchConfig {
        BatchConfig {
            root: PathBuf::from("public/assets"),
            ffmpeg_program: FFMPEG_PROGRAM.to_string(),
            filter_chain: FILTER_CHAIN.to_string(),
            video_codec: VIDEO_CODEC.to_string(),
            bitrate: BITRATE.to_string(),
            crf: CRF.to_string(),
            pixel_format: PIXEL_FORMAT.to_string(),
            no_progress: true,
        }
    }

    #[test]
    fn argument_vector_is_exactly_the_fixed_set() {
        let job = ConversionJob::new(PathBuf::from("public/assets/clip.mp4"));
        let args = build_ffmpeg_args(&fixed_config(), &job);
        let expected: Vec<OsString> = [
            "-y",
            "-i",
            "public/assets/clip.mp4",
            "-vf",
            "colorkey=white:0.2:0.1,format=rgba",
            "-c:v",
            "libvpx-vp9",
            "-b:v",
            "0",
            "-crf",
            "30",
            "-pix_fmt",
            "yuva420p",
            "public/assets/clip.webm",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn path_registration_runs_at_most_once() {
        // 重複呼叫不應 panic，也不應重複修改 PATH
        register_ffmpeg_path();
        register_ffmpeg_path();
    }
}
