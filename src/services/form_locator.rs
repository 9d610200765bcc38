//! 表单定位服务 - 业务能力层
//!
//! 排期表表单有时直接渲染在页面上，有时嵌在 iframe 里。
//! 本服务在限定时间内探测表单所在的 document，超时则回退主页面。

use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::infrastructure::PageDriver;
use crate::services::selectors::FORM_ID;

/// 探测轮询间隔
const PROBE_INTERVAL: Duration = Duration::from_millis(500);

/// 表单所在位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// 表单直接在主页面上
    MainPage,
    /// 表单在同源 iframe 中
    Iframe,
}

impl FormTarget {
    /// 生成求值到表单所在 document 的 JS 表达式
    ///
    /// 所有表单操作脚本在自己的 IIFE 里用它绑定 `doc`
    /// （表达式而不是顶层 const，同一脚本可以重复求值）。
    /// 跨域 iframe 的 contentDocument 访问会抛异常，
    /// 用 try/catch 当作不存在处理。
    pub fn doc_expr(&self) -> String {
        match self {
            FormTarget::MainPage => "document".to_string(),
            FormTarget::Iframe => format!(
                r#"(() => {{
                    for (const f of document.querySelectorAll('iframe')) {{
                        try {{
                            const d = f.contentDocument;
                            if (d && d.getElementById({form_id})) return d;
                        }} catch (e) {{}}
                    }}
                    return document;
                }})()"#,
                form_id = serde_json::json!(FORM_ID)
            ),
        }
    }
}

/// 表单定位服务
///
/// 职责：
/// - 在限定时间内找出表单所在的 document
/// - 超时回退主页面（降级路径，后续操作大概率失败并由上层记录）
/// - 不填写任何控件
pub struct FormLocator {
    timeout: Duration,
}

impl FormLocator {
    /// 创建新的表单定位服务
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// 定位表单
    pub async fn locate(&self, driver: &PageDriver) -> Result<FormTarget> {
        let probe = format!(
            r#"(() => {{
                for (const f of document.querySelectorAll('iframe')) {{
                    try {{
                        const d = f.contentDocument;
                        if (d && d.getElementById({form_id})) return 'iframe';
                    }} catch (e) {{}}
                }}
                return document.getElementById({form_id}) ? 'main' : 'none';
            }})()"#,
            form_id = serde_json::json!(FORM_ID)
        );

        let mut waited = Duration::ZERO;
        loop {
            let found: String = driver.eval_as(probe.clone()).await?;
            match found.as_str() {
                "iframe" => {
                    info!("✓ 在 iframe 中找到查询表单");
                    return Ok(FormTarget::Iframe);
                }
                "main" => {
                    info!("✓ 在主页面上找到查询表单");
                    return Ok(FormTarget::MainPage);
                }
                _ => debug!("表单尚未出现，已等待 {:?}", waited),
            }

            if waited >= self.timeout {
                warn!(
                    "⚠️ {} 秒内未找到表单 (id: {})，回退为主页面模式",
                    self.timeout.as_secs(),
                    FORM_ID
                );
                return Ok(FormTarget::MainPage);
            }

            sleep(PROBE_INTERVAL).await;
            waited += PROBE_INTERVAL;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_page_doc_expr() {
        assert_eq!(FormTarget::MainPage.doc_expr(), "document");
    }

    #[test]
    fn test_iframe_doc_expr_mentions_form_id() {
        let expr = FormTarget::Iframe.doc_expr();
        assert!(expr.contains("frm_causelist"));
        assert!(expr.contains("contentDocument"));
    }
}
