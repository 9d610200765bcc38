use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;

use crate::models::complex::{builtin_complexes, CourtComplex};

/// 区域映射文件的顶层结构
#[derive(Debug, Deserialize)]
struct ComplexesFile {
    complexes: Vec<CourtComplex>,
}

/// 从 TOML 文件加载区域映射
///
/// 文件格式：
/// ```toml
/// [[complexes]]
/// name = "District Court, Gurugram"
/// code = "HRGR01,HRGR02,HRGR03"
/// ```
pub async fn load_complexes_from_toml(path: &Path) -> Result<Vec<CourtComplex>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取区域映射文件: {}", path.display()))?;

    let file: ComplexesFile = toml::from_str(&content)
        .with_context(|| format!("无法解析区域映射文件: {}", path.display()))?;

    anyhow::ensure!(
        !file.complexes.is_empty(),
        "区域映射文件为空: {}",
        path.display()
    );

    Ok(file.complexes)
}

/// 解析区域映射：文件存在时用文件，否则用内置映射
pub async fn resolve_complexes(path: &str) -> Result<Vec<CourtComplex>> {
    let file_path = Path::new(path);
    if file_path.exists() {
        tracing::info!("从 {} 加载区域映射", path);
        load_complexes_from_toml(file_path).await
    } else {
        Ok(builtin_complexes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complexes_toml() {
        let content = r#"
[[complexes]]
name = "District Court, Gurugram"
code = "HRGR01,HRGR02,HRGR03"

[[complexes]]
name = "Judicial Complex, Sohna"
code = "HRGRA0,HRGRA1"
"#;
        let file: ComplexesFile = toml::from_str(content).unwrap();
        assert_eq!(file.complexes.len(), 2);
        assert_eq!(file.complexes[0].name, "District Court, Gurugram");
        assert_eq!(file.complexes[1].code, "HRGRA0,HRGRA1");
    }
}
