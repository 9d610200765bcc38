//! 抓取请求与结果
//!
//! 一次抓取的输入参数和产物路径，不含任何跨请求状态

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::models::case_type::CaseType;
use crate::models::complex::CourtComplex;

/// 单次抓取请求
///
/// 由操作员输入或批量迭代生成，创建后不再修改，消费一次即丢弃
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    /// 法院区域
    pub complex: CourtComplex,
    /// 法庭编号（与下拉选项标签的前缀匹配）
    pub court_number: String,
    /// 排期日期
    pub date: NaiveDate,
    /// 案件类型
    pub case_type: CaseType,
}

/// 抓取成功时产出的文件
#[derive(Debug, Clone)]
pub struct ScrapeFiles {
    pub pdf_path: PathBuf,
    pub screenshot_path: PathBuf,
}

/// 单次抓取结果
#[derive(Debug, Clone)]
pub enum ScrapeResult {
    /// 成功，结果页已存为 PDF + 截图
    Saved(ScrapeFiles),
    /// 失败，可能留有诊断截图
    Failed {
        diagnostic_screenshot: Option<PathBuf>,
    },
}

impl ScrapeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeResult::Saved(_))
    }
}
