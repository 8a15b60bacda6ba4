//! Sign - 文本到手语指令层
//!
//! 将语音转写或手动输入的文本转换为有序的 ASL 手势描述序列。
//!
//! ## 处理流程
//! 1. Unicode 归一化 + 小写 + 空白折叠
//! 2. 删除填充词、展开口语缩写（有序改写规则）
//! 3. 按空白分词，去除词内标点
//! 4. 词典精确匹配，未收录词回退为指拼

mod dictionary;
mod normalizer;
mod resolver;
mod rules;
mod tokenizer;
mod types;

pub use dictionary::{available_words, SignDictionary};
pub use normalizer::TextNormalizer;
pub use resolver::SignResolver;
pub use rules::{RewriteRule, RuleSet};
pub use tokenizer::{CharClass, Token, Tokenizer};
pub use types::{SignDescriptor, SignEntry, SignSequence, TranslationResult};

/// 规范化文本（默认规则）
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

/// 文本 → 手势序列（默认规则）
pub fn resolve(text: &str) -> SignSequence {
    SignResolver::default().resolve(text)
}
