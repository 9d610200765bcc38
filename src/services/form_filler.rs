//! 表单填写服务 - 业务能力层
//!
//! 只负责单次抓取中各个控件的填写，不关心流程顺序。
//! 所有 DOM 操作通过绑定 `doc` 的 JS 片段完成，
//! 字符串一律经 serde_json 转义后嵌入脚本。

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::error::{AppError, FormError};
use crate::infrastructure::PageDriver;
use crate::models::{CaseType, CourtComplex};
use crate::services::form_locator::FormTarget;
use crate::services::selectors::{
    CIVIL_RADIO_ID, COMPLEX_RADIO_ID, COMPLEX_SELECT_ID, COURT_SELECT_ID, CRIMINAL_RADIO_ID,
    SUBMIT_BUTTON_ID,
};

/// 下拉框轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// 法庭下拉框中的一个选项
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourtOption {
    /// option 的 value（提交用的内部代码）
    pub value: String,
    /// option 的显示标签，如 "1 Ms. Vani Gopal Sharma - District and Sessions Judge"
    pub label: String,
}

/// 法庭下拉框的当前状态
#[derive(Debug, Deserialize)]
struct SelectState {
    exists: bool,
    disabled: bool,
    count: usize,
}

/// 按前缀匹配法庭编号
///
/// 取 DOM 顺序中第一个标签以 `"<编号> "` 开头的选项。
/// 尾部空格是必须的，否则 "1" 会命中 "10" 开头的标签。
pub fn match_court_option<'a>(
    options: &'a [CourtOption],
    court_number: &str,
) -> Option<&'a CourtOption> {
    let prefix = format!("{} ", court_number.trim());
    options.iter().find(|o| o.label.trim().starts_with(&prefix))
}

/// 表单填写服务
pub struct FormFiller {
    doc_expr: String,
    dropdown_timeout: Duration,
}

impl FormFiller {
    /// 创建新的表单填写服务
    pub fn new(target: FormTarget, dropdown_wait_secs: u64) -> Self {
        Self {
            doc_expr: target.doc_expr(),
            dropdown_timeout: Duration::from_secs(dropdown_wait_secs),
        }
    }

    /// 勾选"按法院区域查询"单选框
    pub async fn select_complex_search(&self, driver: &PageDriver) -> Result<()> {
        info!("勾选按区域查询...");
        self.click_control(driver, COMPLEX_RADIO_ID).await
    }

    /// 选择法院区域
    ///
    /// 区域选项的 value 是预先配置的多值代码串，直接赋值后派发 change
    /// 事件，触发站点加载对应的法庭编号列表
    pub async fn select_complex(&self, driver: &PageDriver, complex: &CourtComplex) -> Result<()> {
        info!("选择法院区域: {} ({})", complex.name, complex.code);
        self.select_value(driver, COMPLEX_SELECT_ID, &complex.code)
            .await
    }

    /// 等待法庭下拉框加载完成
    ///
    /// 条件等待而不是盲等：启用且选项数大于 1 才算就绪
    pub async fn wait_for_court_options(&self, driver: &PageDriver) -> Result<()> {
        debug!("等待法庭下拉框加载...");

        let js = format!(
            r#"(() => {{
                const doc = {doc};
                const sel = doc.getElementById({id});
                if (!sel) return {{ exists: false, disabled: true, count: 0 }};
                return {{ exists: true, disabled: sel.disabled, count: sel.options.length }};
            }})()"#,
            doc = self.doc_expr,
            id = serde_json::json!(COURT_SELECT_ID),
        );

        let mut waited = Duration::ZERO;
        loop {
            let state: SelectState = driver.eval_as(js.clone()).await?;
            if state.exists && !state.disabled && state.count > 1 {
                info!("✓ 法庭下拉框已加载，共 {} 个选项", state.count);
                return Ok(());
            }

            if waited >= self.dropdown_timeout {
                return Err(AppError::Form(FormError::OptionsTimeout {
                    select_id: COURT_SELECT_ID.to_string(),
                    waited_secs: self.dropdown_timeout.as_secs(),
                })
                .into());
            }

            sleep(POLL_INTERVAL).await;
            waited += POLL_INTERVAL;
        }
    }

    /// 读取法庭下拉框的全部选项
    pub async fn court_options(&self, driver: &PageDriver) -> Result<Vec<CourtOption>> {
        let js = format!(
            r#"(() => {{
                const doc = {doc};
                const sel = doc.getElementById({id});
                if (!sel) return null;
                return Array.from(sel.options).map(o => ({{
                    value: o.value,
                    label: (o.textContent || '').trim(),
                }}));
            }})()"#,
            doc = self.doc_expr,
            id = serde_json::json!(COURT_SELECT_ID),
        );

        let options: Option<Vec<CourtOption>> = driver.eval_as(js).await?;
        options.ok_or_else(|| {
            AppError::Form(FormError::ControlNotFound {
                control_id: COURT_SELECT_ID.to_string(),
            })
            .into()
        })
    }

    /// 选中某个法庭选项
    pub async fn select_court(&self, driver: &PageDriver, option: &CourtOption) -> Result<()> {
        info!("选择法庭: {}", option.label);
        self.select_value(driver, COURT_SELECT_ID, &option.value)
            .await
    }

    /// 选择案件类型单选框
    pub async fn select_case_type(&self, driver: &PageDriver, case_type: CaseType) -> Result<()> {
        info!("选择案件类型: {}", case_type);
        let radio_id = match case_type {
            CaseType::Civil => CIVIL_RADIO_ID,
            CaseType::Criminal => CRIMINAL_RADIO_ID,
        };
        self.click_control(driver, radio_id).await
    }

    /// 点击查询按钮提交表单
    pub async fn submit(&self, driver: &PageDriver) -> Result<()> {
        info!("📤 提交查询表单...");
        self.click_control(driver, SUBMIT_BUTTON_ID).await
    }

    // ========== JS 操作原语 ==========

    /// 点击指定 id 的控件
    async fn click_control(&self, driver: &PageDriver, control_id: &str) -> Result<()> {
        let js = format!(
            r#"(() => {{
                const doc = {doc};
                const el = doc.getElementById({id});
                if (!el) return false;
                el.click();
                return true;
            }})()"#,
            doc = self.doc_expr,
            id = serde_json::json!(control_id),
        );

        let clicked: bool = driver.eval_as(js).await?;
        if clicked {
            Ok(())
        } else {
            Err(AppError::Form(FormError::ControlNotFound {
                control_id: control_id.to_string(),
            })
            .into())
        }
    }

    /// 给下拉框赋值并派发 change 事件
    async fn select_value(&self, driver: &PageDriver, select_id: &str, value: &str) -> Result<()> {
        let js = format!(
            r#"(() => {{
                const doc = {doc};
                const sel = doc.getElementById({id});
                if (!sel) return 'no-control';
                sel.value = {value};
                if (sel.value !== {value}) return 'no-option';
                sel.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return 'ok';
            }})()"#,
            doc = self.doc_expr,
            id = serde_json::json!(select_id),
            value = serde_json::json!(value),
        );

        let outcome: String = driver.eval_as(js).await?;
        match outcome.as_str() {
            "ok" => Ok(()),
            "no-option" => Err(AppError::Form(FormError::OptionNotFound {
                select_id: select_id.to_string(),
                value: value.to_string(),
            })
            .into()),
            _ => Err(AppError::Form(FormError::ControlNotFound {
                control_id: select_id.to_string(),
            })
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 创建测试用的选项列表
    fn sample_options() -> Vec<CourtOption> {
        vec![
            CourtOption {
                value: "".to_string(),
                label: "Select Court".to_string(),
            },
            CourtOption {
                value: "CRT10".to_string(),
                label: "10 Sh. Ramesh Chander - Civil Judge".to_string(),
            },
            CourtOption {
                value: "CRT01".to_string(),
                label: "1 Ms. Vani Gopal Sharma - District and Sessions Judge".to_string(),
            },
            CourtOption {
                value: "CRT01B".to_string(),
                label: "1 Duplicate Entry".to_string(),
            },
        ]
    }

    #[test]
    fn test_match_requires_trailing_space() {
        let options = sample_options();
        // "1" 不能命中 "10 ..." 开头的标签
        let matched = match_court_option(&options, "1").unwrap();
        assert_eq!(matched.value, "CRT01");
    }

    #[test]
    fn test_match_takes_first_in_dom_order() {
        let options = sample_options();
        let matched = match_court_option(&options, "10").unwrap();
        assert_eq!(matched.value, "CRT10");
    }

    #[test]
    fn test_match_trims_input_and_label() {
        let options = vec![CourtOption {
            value: "CRT02".to_string(),
            label: "  2 Dr. Gagan Geet Kaur - Additional District Judge".to_string(),
        }];
        assert!(match_court_option(&options, " 2 ").is_some());
    }

    #[test]
    fn test_no_match_returns_none() {
        let options = sample_options();
        assert!(match_court_option(&options, "99").is_none());
    }

    #[test]
    fn test_empty_options() {
        assert!(match_court_option(&[], "1").is_none());
    }
}
