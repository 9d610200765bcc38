//! 批量抓取运行器 - 编排层
//!
//! ## 职责
//!
//! 对法庭编号 × 案件类型的笛卡尔积逐一执行单次抓取。
//!
//! ## 设计特点
//!
//! - **严格串行**：同一时刻只存在一个浏览器会话，
//!   上一次会话完全关闭后才开始下一次
//! - **永不提前中止**：单次失败只计数，批量继续跑完
//! - **固定间隔**：两次抓取之间留一段间隔

use anyhow::Result;
use chrono::NaiveDate;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use crate::config::Config;
use crate::models::{CaseType, CourtComplex, ScrapeRequest};
use crate::orchestrator::session_driver;
use crate::workflow::ScrapeCtx;

/// 批量统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub successful: usize,
    pub total: usize,
}

/// 展开批量计划
///
/// 外层法庭编号、内层案件类型的笛卡尔积，保持输入顺序
pub fn build_plan(
    court_numbers: &[String],
    case_types: &[CaseType],
) -> Vec<(String, CaseType)> {
    let mut plan = Vec::with_capacity(court_numbers.len() * case_types.len());
    for court_number in court_numbers {
        for case_type in case_types {
            plan.push((court_number.clone(), *case_type));
        }
    }
    plan
}

/// 批量执行抓取
///
/// # 返回
/// 返回成功/总数统计
pub async fn run_batch(
    complex: &CourtComplex,
    court_numbers: &[String],
    date: NaiveDate,
    case_types: &[CaseType],
    config: &Config,
) -> Result<BatchStats> {
    let plan = build_plan(court_numbers, case_types);
    let mut stats = BatchStats {
        successful: 0,
        total: plan.len(),
    };

    log_batch_start(stats.total);

    for (idx, (court_number, case_type)) in plan.iter().enumerate() {
        let scrape_index = idx + 1;

        let request = ScrapeRequest {
            complex: complex.clone(),
            court_number: court_number.clone(),
            date,
            case_type: *case_type,
        };
        let ctx = ScrapeCtx::new(
            scrape_index,
            stats.total,
            complex.name.clone(),
            court_number.clone(),
            date,
            *case_type,
        );

        match session_driver::run_scrape(&request, &ctx, config).await {
            Ok(result) => {
                if result.is_success() {
                    stats.successful += 1;
                }
            }
            Err(e) => {
                error!(
                    "[抓取 {}/{}] ❌ 会话执行失败: {}",
                    scrape_index, stats.total, e
                );
            }
        }

        if scrape_index < stats.total {
            info!(
                "下一次抓取 {} 秒后开始...",
                config.inter_scrape_delay_secs
            );
            sleep(Duration::from_secs(config.inter_scrape_delay_secs)).await;
        }
    }

    log_batch_complete(&stats);
    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_batch_start(total: usize) {
    info!("{}", "=".repeat(60));
    info!("📦 批量抓取模式");
    info!("📄 总抓取次数: {}", total);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(stats: &BatchStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 批量抓取完成");
    info!("✅ 成功: {}/{}", stats.successful, stats.total);
    info!("❌ 失败: {}", stats.total - stats.successful);
    info!("{}", "=".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_order_and_size() {
        let plan = build_plan(
            &numbers(&["1", "2"]),
            &[CaseType::Civil, CaseType::Criminal],
        );
        assert_eq!(plan.len(), 4);
        assert_eq!(
            plan,
            vec![
                ("1".to_string(), CaseType::Civil),
                ("1".to_string(), CaseType::Criminal),
                ("2".to_string(), CaseType::Civil),
                ("2".to_string(), CaseType::Criminal),
            ]
        );
    }

    #[test]
    fn test_plan_single_case_type() {
        let plan = build_plan(&numbers(&["3", "1", "2"]), &[CaseType::Criminal]);
        assert_eq!(plan.len(), 3);
        // 保持输入顺序，不排序
        assert_eq!(plan[0].0, "3");
        assert_eq!(plan[2].0, "2");
    }

    #[test]
    fn test_plan_empty_inputs() {
        assert!(build_plan(&[], &[CaseType::Civil]).is_empty());
        assert!(build_plan(&numbers(&["1"]), &[]).is_empty());
    }
}
