//! 结果页留存服务 - 业务能力层
//!
//! 只负责"把当前页面存下来"：结果 PDF、整页截图、
//! 出错时的诊断截图。文件名由净化后的法庭标签拼出。

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::infrastructure::PageDriver;
use crate::models::{CaseType, ScrapeFiles};
use crate::utils::sanitize_filename;

/// 结果页留存服务
pub struct PageCapture {
    output_dir: PathBuf,
}

impl PageCapture {
    /// 创建新的留存服务
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 由法庭标签、案件类型和日期拼出文件名主干
    ///
    /// 例: `CauseList_Court1_Ms_Vani_Gopal_Sharma_-_District_and_Sessions_Judge_Civil_15-03-2025`
    pub fn build_file_stem(court_label: &str, case_type: CaseType, date: NaiveDate) -> String {
        format!(
            "CauseList_Court{}_{}_{}",
            sanitize_filename(court_label),
            case_type.name(),
            date.format("%d-%m-%Y"),
        )
    }

    /// 把结果页存为 PDF + 整页截图
    pub async fn save_results(&self, driver: &PageDriver, stem: &str) -> Result<ScrapeFiles> {
        let pdf_path = self.output_dir.join(format!("{}.pdf", stem));
        let screenshot_path = self.output_dir.join(format!("{}.png", stem));

        info!("保存结果 PDF: {}", pdf_path.display());
        driver.save_pdf(&pdf_path).await?;

        info!("保存整页截图: {}", screenshot_path.display());
        driver.save_screenshot(&screenshot_path).await?;

        Ok(ScrapeFiles {
            pdf_path,
            screenshot_path,
        })
    }

    /// 尽力保存一张诊断截图
    ///
    /// 失败时只记一条警告，不向上传播，诊断动作不能掩盖原始错误
    pub async fn save_error_screenshot(&self, driver: &PageDriver) -> Option<PathBuf> {
        let path = self.output_dir.join(format!(
            "error_{}.png",
            Local::now().format("%Y%m%d_%H%M%S")
        ));

        match driver.save_screenshot(&path).await {
            Ok(()) => {
                info!("诊断截图已保存: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("⚠️ 诊断截图保存失败: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_file_stem() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let stem = PageCapture::build_file_stem("1 District Judge", CaseType::Civil, date);
        assert_eq!(stem, "CauseList_Court1_District_Judge_Civil_15-03-2025");
    }

    #[test]
    fn test_build_file_stem_strips_unsafe_chars() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let stem = PageCapture::build_file_stem(
            "1 Ms. Vani Gopal Sharma - District and Sessions Judge",
            CaseType::Criminal,
            date,
        );
        assert!(stem.contains("Court1_Ms_Vani_Gopal_Sharma"));
        assert!(stem.contains("Criminal"));
        assert!(stem.contains("15-03-2025"));
        assert!(stem
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }
}
