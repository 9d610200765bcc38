/// 案件类型枚举
///
/// 门户上只有民事 / 刑事两个固定单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CaseType {
    /// 民事
    Civil,
    /// 刑事
    Criminal,
}

impl CaseType {
    /// 获取门户上显示的名称
    pub fn name(self) -> &'static str {
        match self {
            CaseType::Civil => "Civil",
            CaseType::Criminal => "Criminal",
        }
    }

    /// 从字符串解析案件类型（忽略大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "civil" => Some(CaseType::Civil),
            "criminal" => Some(CaseType::Criminal),
            _ => None,
        }
    }

    /// 全部案件类型，批量模式"两种都要"时按此顺序
    pub fn all() -> [CaseType; 2] {
        [CaseType::Civil, CaseType::Criminal]
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(CaseType::from_str("Civil"), Some(CaseType::Civil));
        assert_eq!(CaseType::from_str("CIVIL"), Some(CaseType::Civil));
        assert_eq!(CaseType::from_str("criminal"), Some(CaseType::Criminal));
        assert_eq!(CaseType::from_str(" Criminal "), Some(CaseType::Criminal));
        assert_eq!(CaseType::from_str("civil appeal"), None);
        assert_eq!(CaseType::from_str(""), None);
    }

    #[test]
    fn test_all_order() {
        assert_eq!(CaseType::all(), [CaseType::Civil, CaseType::Criminal]);
    }
}
