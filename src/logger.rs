//! 日志工具模块
//!
//! 每次运行生成一个按启动时刻命名的日志文件，同时镜像输出到控制台

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志文件形如 `logs/app_log_20240101_120000.log`。返回的 guard 需要在
/// 程序存活期间持有，否则文件缓冲不会刷盘。
pub fn init(log_dir: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).with_context(|| format!("无法创建日志目录: {}", log_dir))?;

    let file_name = format!("app_log_{}.log", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let file_appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    info!("日志文件路径: {}", Path::new(log_dir).join(file_name).display());

    Ok(guard)
}
