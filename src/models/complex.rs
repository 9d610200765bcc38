//! 法院区域
//!
//! 门户的区域下拉框把一个区域映射为若干内部法院代码，
//! 选项的 value 是逗号拼接的多值代码串（对程序来说是不透明字符串）

use serde::Deserialize;

/// 法院区域
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourtComplex {
    /// 下拉框中显示的区域名称
    pub name: String,
    /// 站点内部代码串，如 "HRGR01,HRGR02,HRGR03"
    pub code: String,
}

impl CourtComplex {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// 内置的区域映射
pub fn builtin_complexes() -> Vec<CourtComplex> {
    vec![
        CourtComplex::new("District Court, Gurugram", "HRGR01,HRGR02,HRGR03"),
        CourtComplex::new("Judicial Complex, Sohna", "HRGRA0,HRGRA1"),
        CourtComplex::new("Judicial Complex, Pataudi", "HRGRB0,HRGRB1"),
    ]
}

/// 按名称查找区域（精确匹配）
pub fn find_complex<'a>(complexes: &'a [CourtComplex], name: &str) -> Option<&'a CourtComplex> {
    complexes.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mapping() {
        let complexes = builtin_complexes();
        assert_eq!(complexes.len(), 3);

        let gurugram = find_complex(&complexes, "District Court, Gurugram").unwrap();
        assert_eq!(gurugram.code, "HRGR01,HRGR02,HRGR03");

        let sohna = find_complex(&complexes, "Judicial Complex, Sohna").unwrap();
        assert_eq!(sohna.code, "HRGRA0,HRGRA1");
    }

    #[test]
    fn test_find_complex_unknown() {
        let complexes = builtin_complexes();
        assert!(find_complex(&complexes, "District Court, Faridabad").is_none());
    }
}
