//! 文本规范化
//!
//! 1. NFKC 归一化 + 小写 + 去首尾空白
//! 2. 删除填充词
//! 3. 缩写/口语展开
//! 4. 空白折叠
//!
//! 整个流程重复执行直到结果不再变化，保证幂等

use unicode_normalization::UnicodeNormalization;

use crate::sign::rules::RuleSet;

/// 文本规范化器
pub struct TextNormalizer {
    rules: &'static RuleSet,
    /// 是否启用填充词删除与缩写展开
    expand: bool,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::global(),
            expand: true,
        }
    }

    /// 仅做大小写与空白处理，不应用改写规则
    pub fn without_rules() -> Self {
        Self {
            rules: RuleSet::global(),
            expand: false,
        }
    }

    pub fn rules_enabled(&self) -> bool {
        self.expand
    }

    /// 规范化文本
    ///
    /// 纯函数，不可失败，可能返回空串
    pub fn normalize(&self, text: &str) -> String {
        let mut current = self.normalize_once(text);

        // 首轮之后每轮有改动时文本严格变短，必然收敛
        loop {
            let next = self.normalize_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn normalize_once(&self, text: &str) -> String {
        let folded: String = text.nfkc().collect();
        let lowered = folded.to_lowercase();
        let trimmed = lowered.trim();

        if self.expand {
            collapse_whitespace(&self.rules.apply(trimmed))
        } else {
            collapse_whitespace(trimmed)
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// 空白折叠：多个连续空白 -> 单个空格，并去除首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_whitespace = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_whitespace {
                result.push(' ');
                prev_whitespace = true;
            }
        } else {
            result.push(ch);
            prev_whitespace = false;
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> String {
        TextNormalizer::default().normalize(text)
    }

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Hello World  "), "hello world");
    }

    #[test]
    fn test_filler_removal() {
        let result = normalize("um hello uh there");
        assert_eq!(result, "hello there");
        assert!(!result.split(' ').any(|t| t == "um" || t == "uh"));
    }

    #[test]
    fn test_contraction_expansion() {
        assert_eq!(normalize("i'm sorry"), "i sorry");
        assert_eq!(normalize("I don't want to go"), "i no want go");
        assert_eq!(normalize("We're gonna eat"), "we go eat");
        assert_eq!(normalize("you have to wait"), "you need wait");
        assert_eq!(normalize("it cannot stop"), "it no stop");
    }

    #[test]
    fn test_empty_and_filler_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("um uh"), "");
        assert_eq!(normalize("so, well"), ",");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Hello   THERE",
            "um, so like I'm gonna go home",
            "you you know know",
            "do well not",
            "i i am am",
            "HELLO! water?? bye...",
            "  \t\n ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {:?}", s);
        }
    }

    #[test]
    fn test_exposed_matches_are_rewritten() {
        // 删除内层 "you know" 后外层重新组成 "you know"
        assert_eq!(normalize("you you know know"), "");
        // 删除 "well" 后 "do not" 相邻
        assert_eq!(normalize("do well not"), "no");
    }

    #[test]
    fn test_deeply_nested_fillers_converge() {
        let nested = format!("{}{}", "you ".repeat(10), "know ".repeat(10));
        let once = normalize(&nested);
        assert_eq!(once, "");
        assert_eq!(normalize(&once), once);

        let mixed = format!("{}water{}", "do well ".repeat(12), " not".repeat(12));
        let once = normalize(&mixed);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_ascii_word_boundary() {
        // 非 ASCII 字母不算词字符，与分词器一致
        assert_eq!(normalize("ñso"), "ñ");
        assert_eq!(normalize("éi am"), "éi");
    }

    #[test]
    fn test_fullwidth_folding() {
        assert_eq!(normalize("\u{ff28}\u{ff25}\u{ff2c}\u{ff2c}\u{ff2f}"), "hello");
    }

    #[test]
    fn test_without_rules() {
        let normalizer = TextNormalizer::without_rules();
        assert!(!normalizer.rules_enabled());
        assert_eq!(normalizer.normalize("Um  I'm   here"), "um i'm here");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace(" a \t b\n\nc "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }
}
