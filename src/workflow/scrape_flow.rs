//! 抓取流程 - 流程层
//!
//! 核心职责：定义"一次抓取"的完整表单流程
//!
//! 流程顺序：
//! 1. 定位表单（iframe / 主页面）
//! 2. 勾选按区域查询 → 选区域 → 等法庭下拉框 → 前缀匹配法庭
//! 3. 日历控件设置日期 → 选案件类型
//! 4. 验证码人工关卡 → 提交 → 等结果渲染
//! 5. 结果页存 PDF + 截图

use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::PageDriver;
use crate::models::{ScrapeFiles, ScrapeRequest};
use crate::services::{
    match_court_option, CaptchaGate, DatePicker, FormFiller, FormLocator, PageCapture,
};
use crate::workflow::scrape_ctx::ScrapeCtx;

/// 抓取流程
///
/// - 编排单次抓取的完整步骤
/// - 不持有任何资源（page）
/// - 只依赖业务能力（services）
pub struct ScrapeFlow {
    form_locator: FormLocator,
    captcha_gate: CaptchaGate,
    page_capture: PageCapture,
    dropdown_wait_secs: u64,
    result_settle: Duration,
}

impl ScrapeFlow {
    /// 创建新的抓取流程
    pub fn new(config: &Config) -> Self {
        Self {
            form_locator: FormLocator::new(config.iframe_wait_secs),
            captcha_gate: CaptchaGate::new(),
            page_capture: PageCapture::new(config.output_dir.clone()),
            dropdown_wait_secs: config.dropdown_wait_secs,
            result_settle: Duration::from_secs(config.result_settle_secs),
        }
    }

    /// 执行一次抓取的表单流程
    ///
    /// 任何一步出错都中止本次抓取，由上层决定善后
    pub async fn run(
        &self,
        driver: &PageDriver,
        request: &ScrapeRequest,
        ctx: &ScrapeCtx,
    ) -> Result<ScrapeFiles> {
        info!(
            "[抓取 {}/{}] 目标: {}",
            ctx.scrape_index, ctx.total_scrapes, ctx
        );

        // ========== 第 1 步: 定位表单 ==========
        let target = self.form_locator.locate(driver).await?;
        let filler = FormFiller::new(target, self.dropdown_wait_secs);
        let date_picker = DatePicker::new(target);

        // ========== 第 2 步: 区域与法庭 ==========
        filler.select_complex_search(driver).await?;
        filler.select_complex(driver, &request.complex).await?;
        filler.wait_for_court_options(driver).await?;

        let options = filler.court_options(driver).await?;
        let matched = match_court_option(&options, &request.court_number)
            .ok_or_else(|| AppError::court_not_found(&request.court_number, options.len()))?
            .clone();
        info!(
            "[抓取 {}/{}] ✓ 匹配到法庭: {}",
            ctx.scrape_index, ctx.total_scrapes, matched.label
        );
        filler.select_court(driver, &matched).await?;

        // ========== 第 3 步: 日期与案件类型 ==========
        date_picker.set_date(driver, request.date).await?;
        filler.select_case_type(driver, request.case_type).await?;

        // ========== 第 4 步: 验证码与提交 ==========
        self.captcha_gate.wait_for_operator().await?;
        filler.submit(driver).await?;

        info!(
            "[抓取 {}/{}] 等待结果渲染 ({} 秒)...",
            ctx.scrape_index,
            ctx.total_scrapes,
            self.result_settle.as_secs()
        );
        sleep(self.result_settle).await;

        // ========== 第 5 步: 留存结果 ==========
        let stem = PageCapture::build_file_stem(&matched.label, request.case_type, request.date);
        let files = self.page_capture.save_results(driver, &stem).await?;

        info!(
            "[抓取 {}/{}] ✅ 结果已保存: {}",
            ctx.scrape_index,
            ctx.total_scrapes,
            files.pdf_path.display()
        );
        Ok(files)
    }

    /// 出错时尽力保存诊断截图
    pub async fn capture_diagnostics(&self, driver: &PageDriver) -> Option<std::path::PathBuf> {
        self.page_capture.save_error_screenshot(driver).await
    }
}
