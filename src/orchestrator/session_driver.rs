//! 单次抓取会话驱动 - 编排层
//!
//! ## 职责
//!
//! 本模块负责一次抓取的浏览器会话生命周期。
//!
//! ## 核心功能
//!
//! 1. **会话独占**：每次抓取启动一个全新的浏览器，用完即关
//! 2. **流程委托**：表单步骤全部委托给 workflow::ScrapeFlow
//! 3. **故障善后**：任何一步出错都尽力留一张诊断截图
//! 4. **资源兜底**：无论成败，冷却后必定关闭浏览器

use anyhow::Result;
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::PageDriver;
use crate::models::{ScrapeRequest, ScrapeResult};
use crate::workflow::{ScrapeCtx, ScrapeFlow};

/// 执行一次完整的抓取会话
///
/// # 参数
/// - `request`: 抓取请求
/// - `ctx`: 抓取上下文（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回抓取结果；只有浏览器都没能启动时才返回 Err
pub async fn run_scrape(
    request: &ScrapeRequest,
    ctx: &ScrapeCtx,
    config: &Config,
) -> Result<ScrapeResult> {
    log_scrape_start(ctx);

    let (mut browser, page) = browser::launch_browser(&config.base_url, config.headless).await?;
    let driver = PageDriver::new(page);
    let flow = ScrapeFlow::new(config);

    // 流程中的任何错误都在这里收口：记日志、留诊断截图、报失败
    let result = match flow.run(&driver, request, ctx).await {
        Ok(files) => ScrapeResult::Saved(files),
        Err(e) => {
            error!(
                "[抓取 {}/{}] ❌ 抓取失败: {}",
                ctx.scrape_index, ctx.total_scrapes, e
            );
            let diagnostic_screenshot = flow.capture_diagnostics(&driver).await;
            ScrapeResult::Failed {
                diagnostic_screenshot,
            }
        }
    };

    // 冷却后关闭浏览器，所有退出路径都会走到这里
    info!(
        "保持浏览器 {} 秒后关闭...",
        config.browser_cooldown_secs
    );
    sleep(Duration::from_secs(config.browser_cooldown_secs)).await;
    if let Err(e) = browser.close().await {
        warn!("⚠️ 关闭浏览器失败: {}", e);
    }
    let _ = browser.wait().await;
    info!("浏览器已关闭");

    log_scrape_result(ctx, &result);
    Ok(result)
}

// ========== 日志辅助函数 ==========

fn log_scrape_start(ctx: &ScrapeCtx) {
    info!("{}", "=".repeat(60));
    info!("[抓取 {}/{}] 开始", ctx.scrape_index, ctx.total_scrapes);
    info!("  法院区域: {}", ctx.complex_name);
    info!("  法庭编号: {}", ctx.court_number);
    info!("  日期: {}", ctx.date.format("%d/%m/%Y"));
    info!("  案件类型: {}", ctx.case_type);
    info!("{}", "=".repeat(60));
}

fn log_scrape_result(ctx: &ScrapeCtx, result: &ScrapeResult) {
    match result {
        ScrapeResult::Saved(files) => {
            info!(
                "[抓取 {}/{}] ✅ 成功: {}",
                ctx.scrape_index,
                ctx.total_scrapes,
                files.pdf_path.display()
            );
        }
        ScrapeResult::Failed {
            diagnostic_screenshot,
        } => match diagnostic_screenshot {
            Some(path) => info!(
                "[抓取 {}/{}] ❌ 失败，诊断截图: {}",
                ctx.scrape_index,
                ctx.total_scrapes,
                path.display()
            ),
            None => info!(
                "[抓取 {}/{}] ❌ 失败，无诊断截图",
                ctx.scrape_index, ctx.total_scrapes
            ),
        },
    }
}
