//! 页面驱动 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露能力：
//! - 执行 JS（取值 / 操作 DOM）
//! - 派发受信任的 CDP 按键事件（日期控件导航）
//! - 导出 PDF / 整页截图
//!
//! 不认识表单、法庭、抓取流程

use std::path::Path;

use anyhow::Result;
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchKeyEventParams, DispatchKeyEventType,
};
use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, PrintToPdfParams};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

/// 页面驱动
pub struct PageDriver {
    page: Page,
}

impl PageDriver {
    /// 创建新的页面驱动
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// 派发一次受信任的按键（keydown → char → keyup）
    ///
    /// 合成的 KeyboardEvent 驱动不了日期控件，必须走 CDP Input 通道。
    /// 事件发往当前获得焦点的元素，调用前需先让目标控件获得焦点。
    pub async fn press_key(&self, key: &str) -> Result<()> {
        debug!("派发按键: {}", key);

        // 按键名到键码的映射，只覆盖本程序用到的导航键
        let (code, text, virtual_key_code) = match key {
            "Enter" => ("Enter", Some("\r"), 13),
            "Tab" => ("Tab", Some("\t"), 9),
            "Escape" => ("Escape", None, 27),
            "ArrowUp" => ("ArrowUp", None, 38),
            "ArrowDown" => ("ArrowDown", None, 40),
            "ArrowLeft" => ("ArrowLeft", None, 37),
            "ArrowRight" => ("ArrowRight", None, 39),
            _ => anyhow::bail!("不支持的按键: {}", key),
        };

        let down = DispatchKeyEventParams::builder()
            .r#type(DispatchKeyEventType::KeyDown)
            .key(key.to_string())
            .code(code.to_string())
            .windows_virtual_key_code(virtual_key_code)
            .native_virtual_key_code(virtual_key_code)
            .build()
            .map_err(|e| anyhow::anyhow!("构建按键事件失败: {}", e))?;
        self.page.execute(down).await?;

        // 产生文本的按键需要补一个 char 事件
        if let Some(text_str) = text {
            let ch = DispatchKeyEventParams::builder()
                .r#type(DispatchKeyEventType::Char)
                .key(key.to_string())
                .code(code.to_string())
                .text(text_str.to_string())
                .build()
                .map_err(|e| anyhow::anyhow!("构建按键事件失败: {}", e))?;
            self.page.execute(ch).await?;
        }

        let up = DispatchKeyEventParams::builder()
            .r#type(DispatchKeyEventType::KeyUp)
            .key(key.to_string())
            .code(code.to_string())
            .windows_virtual_key_code(virtual_key_code)
            .native_virtual_key_code(virtual_key_code)
            .build()
            .map_err(|e| anyhow::anyhow!("构建按键事件失败: {}", e))?;
        self.page.execute(up).await?;

        Ok(())
    }

    /// 连续派发同一按键 n 次
    pub async fn press_key_times(&self, key: &str, times: u64) -> Result<()> {
        for _ in 0..times {
            self.press_key(key).await?;
        }
        Ok(())
    }

    /// 将当前页面保存为 PDF（A4、打印背景、约 20px 页边距）
    pub async fn save_pdf(&self, path: impl AsRef<Path>) -> Result<()> {
        let params = PrintToPdfParams {
            print_background: Some(true),
            paper_width: Some(8.27),   // A4 英寸
            paper_height: Some(11.69), // A4 英寸
            margin_top: Some(0.2),
            margin_bottom: Some(0.2),
            margin_left: Some(0.2),
            margin_right: Some(0.2),
            ..Default::default()
        };
        self.page.save_pdf(params, path).await?;
        Ok(())
    }

    /// 整页截图（PNG）
    pub async fn save_screenshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();
        self.page.save_screenshot(params, path).await?;
        Ok(())
    }
}
