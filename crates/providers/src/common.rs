//! 供应商共享的文本处理

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// 文本规范化：去除首尾空白，连续空白合并为单个空格
pub(crate) fn normalize_for_embedding(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_for_embedding() {
        assert_eq!(normalize_for_embedding("  hello \n\t world  "), "hello world");
        assert_eq!(normalize_for_embedding("single"), "single");
        assert_eq!(normalize_for_embedding("   "), "");
    }
}
