//! # Cause List Scraper
//!
//! 古尔冈地方法院排期表（Cause List / Daily Board）自动抓取工具：
//! 驱动浏览器打开门户页面，自动填写查询表单，验证码环节交给人工，
//! 提交后把结果页存为 PDF 和整页截图。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageDriver` - 唯一的 page owner，提供 eval / 按键 / PDF / 截图能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次抓取
//! - `FormLocator` - 表单定位（iframe / 主页面）
//! - `FormFiller` - 表单控件填写与法庭前缀匹配
//! - `DatePicker` - 日历控件方向键导航
//! - `CaptchaGate` - 人工验证码挂起点
//! - `PageCapture` - 结果页留存
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次抓取"的完整流程
//! - `ScrapeCtx` - 上下文封装（第几次抓取 + 目标参数）
//! - `ScrapeFlow` - 流程编排（定位 → 填表 → 验证码 → 提交 → 留存）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/session_driver` - 单次会话驱动，管理浏览器生命周期
//! - `orchestrator/batch_runner` - 批量运行器，严格串行的笛卡尔积调度
//! - `orchestrator/app` - 交互式前端
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::launch_browser;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::PageDriver;
pub use models::{CaseType, CourtComplex, ScrapeFiles, ScrapeRequest, ScrapeResult};
pub use orchestrator::{run_batch, run_scrape, App, BatchStats};
pub use workflow::{ScrapeCtx, ScrapeFlow};
