use std::time::Duration;

/// 排版对象
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatMode {
    /// 正文排版（调用思源的 autoSpace 接口）
    Body,
    /// 标题排版（本地优化标题后调用 renameDoc 接口）
    Title,
}

impl std::str::FromStr for FormatMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "body" => Ok(FormatMode::Body),
            "title" => Ok(FormatMode::Title),
            _ => Err(()),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 思源内核 API 地址（一般都是这个地址）
    pub base_url: String,
    /// 思源 API Token（获取方法：思源设置 -> 关于 -> API Token）
    pub auth_token: String,
    /// 日志文件夹名称
    pub log_dir: String,
    /// 每批并发处理的 autoSpace 请求数量
    pub batch_size: usize,
    /// 标题模式下每发送多少次请求后休息
    pub request_batch_size: usize,
    /// 暂停时间（秒）
    pub pause_secs: u64,
    /// 排版对象：body（正文）或 title（标题）
    pub format_mode: FormatMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:6806".to_string(),
            auth_token: String::new(),
            log_dir: "logs".to_string(),
            batch_size: 300,
            request_batch_size: 1000,
            pause_secs: 60,
            format_mode: FormatMode::Body,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("SIYUAN_BASE_URL").unwrap_or(default.base_url),
            auth_token: std::env::var("SIYUAN_TOKEN").unwrap_or(default.auth_token),
            log_dir: std::env::var("LOG_DIR").unwrap_or(default.log_dir),
            batch_size: std::env::var("BATCH_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.batch_size),
            request_batch_size: std::env::var("REQUEST_BATCH_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_batch_size),
            pause_secs: std::env::var("PAUSE_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.pause_secs),
            format_mode: std::env::var("FORMAT_MODE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.format_mode),
        }
    }

    /// 批间暂停时长
    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }
}
