//! 日志初始化
//!
//! 同时输出到控制台和日志目录下的文本日志文件，
//! 级别通过 RUST_LOG 环境变量控制（默认 info）

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// 日志文件名（追加写入，不做轮转）
const LOG_FILE_NAME: &str = "scraper.log";

/// 初始化全局日志
///
/// # 参数
/// - `log_dir`: 日志目录，不存在时自动创建
pub fn init(log_dir: &str) -> Result<()> {
    fs::create_dir_all(log_dir).with_context(|| format!("无法创建日志目录: {}", log_dir))?;

    let log_path = Path::new(log_dir).join(LOG_FILE_NAME);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("无法打开日志文件: {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = tracing_subscriber::fmt::layer().with_target(false);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("初始化日志失败: {}", e))?;

    Ok(())
}
