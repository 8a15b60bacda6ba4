//! 手语类型定义

use serde::{Deserialize, Serialize};

/// 指拼（fingerspelling）描述前缀
pub const FINGERSPELL_PREFIX: &str = "Fingerspell each letter: ";
/// 指拼手形
pub const FINGERSPELL_HAND_SHAPE: &str = "Various handshapes for each letter";
/// 指拼动作
pub const FINGERSPELL_MOVEMENT: &str = "Form each letter shape in sequence";
/// 指拼位置
pub const FINGERSPELL_LOCATION: &str = "In front of body, chest level";
/// 指拼图标
pub const FINGERSPELL_EMOJI: &str = "✋";
/// 指拼练习提示
pub const FINGERSPELL_VISUAL_CUE: &str = "Spell out each letter with hand shapes";

/// 词典条目（不含词本身，键即词）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignEntry {
    /// 手势说明
    pub description: &'static str,
    /// 手形
    pub hand_shape: &'static str,
    /// 动作
    pub movement: &'static str,
    /// 位置（相对身体）
    pub location: &'static str,
    /// 助记图标
    pub emoji: &'static str,
    /// 自练提示
    pub visual_cue: &'static str,
}

/// 单个手势的完整描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDescriptor {
    /// 产生此描述的规范化词
    pub word: String,
    pub description: String,
    pub hand_shape: String,
    pub movement: String,
    pub location: String,
    pub emoji: String,
    pub visual_cue: String,
}

impl SignDescriptor {
    /// 由词典条目构造
    pub fn from_entry(word: &str, entry: &SignEntry) -> Self {
        Self {
            word: word.to_string(),
            description: entry.description.to_string(),
            hand_shape: entry.hand_shape.to_string(),
            movement: entry.movement.to_string(),
            location: entry.location.to_string(),
            emoji: entry.emoji.to_string(),
            visual_cue: entry.visual_cue.to_string(),
        }
    }

    /// 未收录词的指拼描述
    ///
    /// 字母以 `-` 连接并转大写，如 `xyz` → `X-Y-Z`
    pub fn fingerspelled(word: &str) -> Self {
        let letters: Vec<String> = word.chars().map(|c| c.to_string()).collect();
        Self {
            word: word.to_string(),
            description: format!("{}{}", FINGERSPELL_PREFIX, letters.join("-").to_uppercase()),
            hand_shape: FINGERSPELL_HAND_SHAPE.to_string(),
            movement: FINGERSPELL_MOVEMENT.to_string(),
            location: FINGERSPELL_LOCATION.to_string(),
            emoji: FINGERSPELL_EMOJI.to_string(),
            visual_cue: FINGERSPELL_VISUAL_CUE.to_string(),
        }
    }

    /// 是否为指拼回退结果
    pub fn is_fingerspelled(&self) -> bool {
        self.description.starts_with(FINGERSPELL_PREFIX)
            && self.hand_shape == FINGERSPELL_HAND_SHAPE
    }
}

/// 手势序列（保持原文词序）
pub type SignSequence = Vec<SignDescriptor>;

/// 翻译结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// 原始文本（未规范化，用于并排显示）
    pub original: String,
    /// 规范化后的文本
    pub normalized: String,
    /// 手势序列
    pub signs: SignSequence,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl TranslationResult {
    /// 创建空结果
    pub fn empty(original: String, elapsed_us: u64) -> Self {
        Self {
            original,
            normalized: String::new(),
            signs: Vec::new(),
            elapsed_us,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// 指拼回退的手势数量
    pub fn fingerspelled_count(&self) -> usize {
        self.signs.iter().filter(|s| s.is_fingerspelled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerspelled_description() {
        let sign = SignDescriptor::fingerspelled("xyz");
        assert_eq!(sign.word, "xyz");
        assert_eq!(sign.description, "Fingerspell each letter: X-Y-Z");
        assert_eq!(sign.emoji, "✋");
        assert!(sign.is_fingerspelled());
    }

    #[test]
    fn test_fingerspelled_single_letter() {
        let sign = SignDescriptor::fingerspelled("q");
        assert_eq!(sign.description, "Fingerspell each letter: Q");
    }

    #[test]
    fn test_serialize_camel_case() {
        let sign = SignDescriptor::fingerspelled("ab");
        let json = serde_json::to_value(&sign).unwrap();
        assert_eq!(json["handShape"], FINGERSPELL_HAND_SHAPE);
        assert_eq!(json["visualCue"], FINGERSPELL_VISUAL_CUE);
        assert!(json.get("hand_shape").is_none());
    }

    #[test]
    fn test_empty_result() {
        let result = TranslationResult::empty("um".to_string(), 0);
        assert!(result.is_empty());
        assert_eq!(result.fingerspelled_count(), 0);
        assert_eq!(result.original, "um");
    }
}
