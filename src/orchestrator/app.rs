//! 交互式前端 - 编排层
//!
//! ## 职责
//!
//! 收集操作员输入（模式、法庭编号、案件类型、日期），
//! 然后调用单次会话驱动或批量运行器。
//!
//! 所有输入都有默认值或兜底分支，批量模式必须显式输入 yes 确认。

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, ConfigError};
use crate::models::{resolve_complexes, CaseType, CourtComplex, ScrapeRequest};
use crate::orchestrator::{batch_runner, session_driver};
use crate::workflow::ScrapeCtx;

/// 应用主结构
pub struct App {
    config: Config,
    complexes: Vec<CourtComplex>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 准备输出目录（日志目录由 logger 负责）
        std::fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("无法创建输出目录: {}", config.output_dir))?;

        // 解析区域映射（内置表或 TOML 覆盖文件）
        let complexes = resolve_complexes(&config.complexes_file).await?;
        info!("已加载 {} 个法院区域", complexes.len());

        Ok(Self { config, complexes })
    }

    /// 运行交互式主流程
    pub async fn run(&self) -> Result<()> {
        print_banner();

        println!("\n  模式:");
        println!("    1. 单次抓取");
        println!("    2. 批量抓取（多个法庭）");
        println!("    3. 退出");
        let choice = prompt("\n  请选择 (1-3): ").await?;

        match choice.as_str() {
            "1" => self.run_single().await?,
            "2" => self.run_batch_mode().await?,
            "3" => {
                println!("\n  再见!");
                return Ok(());
            }
            other => {
                warn!("无效的选择: {}", other);
                return Ok(());
            }
        }

        println!("\n{}", "=".repeat(70));
        println!("  全部完成");
        println!("  PDF 输出目录: {}/", self.config.output_dir);
        println!("  日志目录: {}/", self.config.log_dir);
        println!("{}\n", "=".repeat(70));
        Ok(())
    }

    /// 单次抓取模式
    async fn run_single(&self) -> Result<()> {
        println!("\n{}", "=".repeat(70));
        println!("  单次抓取模式");
        println!("{}", "=".repeat(70));

        let court_number = prompt("\n  法庭编号 (如 1): ").await?;
        anyhow::ensure!(!court_number.is_empty(), "法庭编号不能为空");

        println!("\n  案件类型:");
        println!("    1. Civil");
        println!("    2. Criminal");
        let case_choice = prompt("  请选择 (1 或 2): ").await?;
        let case_type = if case_choice == "1" {
            CaseType::Civil
        } else {
            CaseType::Criminal
        };

        let date = prompt_date().await?;
        let complex = self.default_complex()?;

        let request = ScrapeRequest {
            complex: complex.clone(),
            court_number: court_number.clone(),
            date,
            case_type,
        };
        let ctx = ScrapeCtx::new(1, 1, complex.name.clone(), court_number, date, case_type);

        info!("开始抓取...");
        session_driver::run_scrape(&request, &ctx, &self.config).await?;
        Ok(())
    }

    /// 批量抓取模式
    async fn run_batch_mode(&self) -> Result<()> {
        println!("\n{}", "=".repeat(70));
        println!("  批量抓取模式");
        println!("{}", "=".repeat(70));

        let numbers_input = prompt("\n  法庭编号 (逗号分隔，如 1,2,3): ").await?;
        let court_numbers: Vec<String> = numbers_input
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        anyhow::ensure!(!court_numbers.is_empty(), "至少需要一个法庭编号");

        println!("\n  案件类型:");
        println!("    1. 仅 Civil");
        println!("    2. 仅 Criminal");
        println!("    3. 两种都要");
        let case_choice = prompt("  请选择 (1-3): ").await?;
        let case_types: Vec<CaseType> = match case_choice.as_str() {
            "1" => vec![CaseType::Civil],
            "2" => vec![CaseType::Criminal],
            _ => CaseType::all().to_vec(),
        };

        let date = prompt_date().await?;

        let total = court_numbers.len() * case_types.len();
        println!("\n  将生成 {} 份 PDF", total);

        let confirm = prompt("\n  继续? (yes/no): ").await?;
        if confirm.to_lowercase() != "yes" {
            println!("\n  已取消。");
            return Ok(());
        }

        let complex = self.default_complex()?;
        batch_runner::run_batch(complex, &court_numbers, date, &case_types, &self.config)
            .await?;
        Ok(())
    }

    /// 查找配置的默认法院区域
    fn default_complex(&self) -> Result<&CourtComplex> {
        crate::models::find_complex(&self.complexes, &self.config.default_complex).ok_or_else(
            || {
                AppError::Config(ConfigError::ComplexNotFound {
                    name: self.config.default_complex.clone(),
                })
                .into()
            },
        )
    }
}

// ========== 交互辅助函数 ==========

/// 打印启动横幅
fn print_banner() {
    println!("\n{}", "=".repeat(70));
    println!("  法院排期表抓取工具");
    println!("  Gurugram District Courts - Cause List / Daily Board");
    println!("{}", "=".repeat(70));
    println!("\n  工作方式:");
    println!("  1. 程序打开浏览器并自动填写查询表单");
    println!("  2. 操作员在浏览器里完成验证码，回终端按回车");
    println!("  3. 程序提交查询并把结果页存为 PDF + 截图");
    println!("{}", "=".repeat(70));
}

/// 读取一行输入（去掉首尾空白）
async fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    reader.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

/// 读取日期输入，空输入取今天
async fn prompt_date() -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    println!("\n  今天: {}", today.format("%d/%m/%Y"));
    let input = prompt("  日期 (dd/mm/yyyy，直接回车取今天): ").await?;

    if input.is_empty() {
        return Ok(today);
    }

    parse_date(&input)
}

/// 解析 dd/mm/yyyy 格式的日期
fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y").map_err(|_| {
        AppError::Config(ConfigError::InvalidDate {
            input: input.to_string(),
        })
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("15/03/2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("2025-03-15").is_err());
        assert!(parse_date("32/01/2025").is_err());
        assert!(parse_date("abc").is_err());
    }
}
