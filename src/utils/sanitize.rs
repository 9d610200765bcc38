//! 文件名净化
//!
//! 输出文件名由法庭下拉选项的显示标签拼出来，
//! 标签里有空格、点号和法官姓名，日期里有斜杠，都不能进文件名

use std::sync::OnceLock;

use regex::Regex;

/// 匹配所有不允许出现在文件名中的字符
fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap())
}

/// 净化文件名片段
///
/// 规则：`/` 换成 `-`（保留日期的分段感），空白换成 `_`，
/// 其余非 `[A-Za-z0-9_-]` 字符一律剔除。结果再净化一次不会变化。
pub fn sanitize_filename(input: &str) -> String {
    let dashed = input.trim().replace('/', "-");
    let underscored: String = dashed
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    unsafe_chars().replace_all(&underscored, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_slashes_become_dashes() {
        assert_eq!(sanitize_filename("15/03/2025"), "15-03-2025");
    }

    #[test]
    fn test_court_label() {
        assert_eq!(
            sanitize_filename("1 Ms. Vani Gopal Sharma - District and Sessions Judge"),
            "1_Ms_Vani_Gopal_Sharma_-_District_and_Sessions_Judge"
        );
    }

    #[test]
    fn test_only_safe_chars_remain() {
        let out = sanitize_filename("a?b*c:d|e\"f<g>h\\i,j.k");
        assert!(out.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        assert_eq!(out, "abcdefghijk");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "15/03/2025",
            "1 Ms. Vani Gopal Sharma - District and Sessions Judge",
            "  CauseList Court1  ",
            "a?b*c",
        ];
        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "输入: {}", input);
        }
    }
}
