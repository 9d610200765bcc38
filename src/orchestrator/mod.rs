//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期、批量调度和操作员交互。
//!
//! ## 模块划分
//!
//! ### `app` - 交互式前端
//! - 收集操作员输入（模式 / 法庭编号 / 案件类型 / 日期）
//! - 准备输出目录、解析区域映射
//! - 分发到单次或批量入口
//!
//! ### `session_driver` - 单次会话驱动
//! - 每次抓取独占一个浏览器会话
//! - 委托 workflow::ScrapeFlow 执行表单流程
//! - 失败时留诊断截图，无论成败必关浏览器
//!
//! ### `batch_runner` - 批量运行器
//! - 展开法庭编号 × 案件类型的笛卡尔积
//! - 严格串行执行，单次失败不中止批量
//! - 汇总成功/总数统计
//!
//! ## 层次关系
//!
//! ```text
//! app (操作员输入)
//!     ↓
//! batch_runner (展开 Vec<(编号, 类型)>)
//!     ↓
//! session_driver (一次会话：启动浏览器 → 流程 → 关闭)
//!     ↓
//! workflow::ScrapeFlow (一次抓取的表单步骤)
//!     ↓
//! services (能力层：定位 / 填表 / 日期 / 验证码 / 留存)
//!     ↓
//! infrastructure (基础设施：PageDriver)
//! ```

pub mod app;
pub mod batch_runner;
pub mod session_driver;

// 重新导出主要类型
pub use app::App;
pub use batch_runner::{build_plan, run_batch, BatchStats};
pub use session_driver::run_scrape;
