//! 抓取上下文
//!
//! 封装"我正在跑第几次抓取、目标是什么"这一信息，只用于日志显示

use std::fmt::Display;

use chrono::NaiveDate;

use crate::models::CaseType;

/// 抓取上下文
#[derive(Debug, Clone)]
pub struct ScrapeCtx {
    /// 本次抓取的序号（从1开始）
    pub scrape_index: usize,

    /// 总抓取次数（单次模式为1）
    pub total_scrapes: usize,

    /// 法院区域名称
    pub complex_name: String,

    /// 法庭编号
    pub court_number: String,

    /// 排期日期
    pub date: NaiveDate,

    /// 案件类型
    pub case_type: CaseType,
}

impl ScrapeCtx {
    /// 创建新的抓取上下文
    pub fn new(
        scrape_index: usize,
        total_scrapes: usize,
        complex_name: String,
        court_number: String,
        date: NaiveDate,
        case_type: CaseType,
    ) -> Self {
        Self {
            scrape_index,
            total_scrapes,
            complex_name,
            court_number,
            date,
            case_type,
        }
    }
}

impl Display for ScrapeCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[区域#{} 法庭#{} 日期#{} 类型#{}]",
            self.complex_name,
            self.court_number,
            self.date.format("%d/%m/%Y"),
            self.case_type
        )
    }
}
