// 預設輸入根目錄（相對於目前工作目錄）
pub const DEFAULT_ROOT: &str = "public/assets";

// 輸入與輸出副檔名（大小寫敏感）
pub const INPUT_EXTENSION: &str = "mp4";
pub const OUTPUT_EXTENSION: &str = "webm";

// 去背濾鏡鏈：以白色為 key（相似度 0.2、柔邊 0.1），再轉成帶 alpha 的像素格式
pub const FILTER_CHAIN: &str = "colorkey=white:0.2:0.1,format=rgba";

// WebM 透明影片需要 VP9；位元率設 0，品質交由 CRF 驅動
pub const VIDEO_CODEC: &str = "libvpx-vp9";
pub const BITRATE: &str = "0";
pub const CRF: &str = "30";

// 輸出必須用帶 alpha 的 4:2:0 平面格式，透明度才能在編碼後留存
pub const PIXEL_FORMAT: &str = "yuva420p";

// 外部轉檔工具名稱
pub const FFMPEG_PROGRAM: &str = "ffmpeg";
