//! 日期控件服务 - 业务能力层
//!
//! 日历控件不接受直接输入，只能用方向键导航：
//! 打开时焦点落在今天，每按一次左/右方向键移动一天，回车确认。
//!
//! 这是一个尽力而为的启发式：假设控件总是以今天为起点、
//! 每次按键恰好移动一天，跨月跨周的特殊行为未经站点验证。

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::error::{AppError, FormError};
use crate::infrastructure::PageDriver;
use crate::services::form_locator::FormTarget;
use crate::services::selectors::DATE_INPUT_ID;

/// 等待日历弹层打开的时间
const DIALOG_OPEN_DELAY: Duration = Duration::from_millis(500);

/// 计算从今天到目标日期的有符号天数差
///
/// 正数向后翻，负数向前翻，零不翻
pub fn day_delta(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// 日期控件服务
pub struct DatePicker {
    doc_expr: String,
}

impl DatePicker {
    /// 创建新的日期控件服务
    pub fn new(target: FormTarget) -> Self {
        Self {
            doc_expr: target.doc_expr(),
        }
    }

    /// 把日期控件设置到目标日期（以本机今天为起点）
    pub async fn set_date(&self, driver: &PageDriver, target: NaiveDate) -> Result<()> {
        let today = Local::now().date_naive();
        self.set_date_from(driver, today, target).await
    }

    /// 以指定起点设置日期
    pub async fn set_date_from(
        &self,
        driver: &PageDriver,
        today: NaiveDate,
        target: NaiveDate,
    ) -> Result<()> {
        let delta = day_delta(today, target);
        info!(
            "设置日期: {} (距今 {} 天)",
            target.format("%d/%m/%Y"),
            delta
        );

        // 让日期输入框获得焦点并点击，弹出日历
        let js = format!(
            r#"(() => {{
                const doc = {doc};
                const el = doc.getElementById({id});
                if (!el) return false;
                el.scrollIntoView();
                el.focus();
                el.click();
                return true;
            }})()"#,
            doc = self.doc_expr,
            id = serde_json::json!(DATE_INPUT_ID),
        );

        let opened: bool = driver.eval_as(js).await?;
        if !opened {
            return Err(AppError::Form(FormError::ControlNotFound {
                control_id: DATE_INPUT_ID.to_string(),
            })
            .into());
        }
        sleep(DIALOG_OPEN_DELAY).await;

        // 有符号天数差 → 方向键次数
        if delta > 0 {
            debug!("向后翻 {} 天", delta);
            driver.press_key_times("ArrowRight", delta as u64).await?;
        } else if delta < 0 {
            debug!("向前翻 {} 天", -delta);
            driver.press_key_times("ArrowLeft", (-delta) as u64).await?;
        }

        // 回车确认选中
        driver.press_key("Enter").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_delta_forward() {
        // 今天 10/03/2025，目标 15/03/2025 → 向后 5 天
        assert_eq!(day_delta(date(2025, 3, 10), date(2025, 3, 15)), 5);
    }

    #[test]
    fn test_delta_backward() {
        assert_eq!(day_delta(date(2025, 3, 10), date(2025, 3, 7)), -3);
    }

    #[test]
    fn test_delta_today() {
        assert_eq!(day_delta(date(2025, 3, 10), date(2025, 3, 10)), 0);
    }

    #[test]
    fn test_delta_across_month_boundary() {
        assert_eq!(day_delta(date(2025, 3, 30), date(2025, 4, 2)), 3);
    }

    #[test]
    fn test_delta_across_year_boundary() {
        assert_eq!(day_delta(date(2024, 12, 30), date(2025, 1, 2)), 3);
    }
}
