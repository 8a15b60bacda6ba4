//! 文本改写规则
//!
//! 填充词删除 + 口语缩写展开，按固定顺序逐条应用

use regex::{NoExpand, Regex};

/// 填充词（整词/整短语删除）
pub const FILLER_WORDS: &[&str] = &["um", "uh", "like", "you know", "well", "so"];

/// 缩写/口语展开表（顺序即应用顺序）
pub const CONTRACTION_RULES: &[(&[&str], &str)] = &[
    (&["i'm", "i am"], "i"),
    (&["you're", "you are"], "you"),
    (&["we're", "we are"], "we"),
    (&["they're", "they are"], "they"),
    (&["it's", "it is"], "it"),
    (&["don't", "do not"], "no"),
    (&["won't", "will not"], "no"),
    (&["can't", "cannot"], "no"),
    (&["gonna", "going to"], "go"),
    (&["wanna", "want to"], "want"),
    (&["gotta", "got to", "have to"], "need"),
];

/// 单条改写规则：整词匹配任一候选，替换为固定文本
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    /// 由候选词构造规则
    ///
    /// 候选词按字面匹配（已转义），大小写不敏感，两端要求 ASCII 词边界
    /// （与分词器的词字符定义 `[A-Za-z0-9_]` 一致）
    pub fn new(alternatives: &[&str], replacement: &'static str) -> Self {
        let alternation = alternatives
            .iter()
            .map(|alt| regex::escape(alt))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", alternation))
            .expect("rewrite rule patterns are built from escaped literals");

        Self {
            pattern,
            replacement,
        }
    }

    /// 应用规则
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(self.replacement))
            .into_owned()
    }

    /// 是否命中
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }
}

/// 有序规则集
///
/// 第一条为填充词删除，其后为缩写展开
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        let mut rules = Vec::with_capacity(CONTRACTION_RULES.len() + 1);
        rules.push(RewriteRule::new(FILLER_WORDS, ""));
        rules.extend(
            CONTRACTION_RULES
                .iter()
                .map(|&(alternatives, replacement)| RewriteRule::new(alternatives, replacement)),
        );

        Self { rules }
    }

    /// 获取全局默认规则集（预编译，只读）
    pub fn global() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    /// 按顺序依次应用所有规则
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_RULES: RuleSet = RuleSet::new();
}
