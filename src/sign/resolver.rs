//! 手语解析主引擎
//!
//! 组合规范化、分词、词典查询与指拼回退

use std::time::Instant;

use crate::sign::dictionary::SignDictionary;
use crate::sign::normalizer::TextNormalizer;
use crate::sign::tokenizer::Tokenizer;
use crate::sign::types::{SignDescriptor, SignSequence, TranslationResult};

/// 手语解析器（无状态，可跨线程共享）
pub struct SignResolver {
    normalizer: TextNormalizer,
    dictionary: &'static SignDictionary,
}

impl SignResolver {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self {
            normalizer,
            dictionary: SignDictionary::global(),
        }
    }

    /// 文本 → 手势序列
    ///
    /// 保持原文词序，不做 ASL 语法重排。空输入返回空序列
    pub fn resolve(&self, text: &str) -> SignSequence {
        let normalized = self.normalizer.normalize(text);
        self.resolve_normalized(&normalized)
    }

    /// 文本 → 翻译结果（附原文、规范化文本与耗时）
    pub fn translate(&self, text: &str) -> TranslationResult {
        let start = Instant::now();

        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            tracing::info!("输入规范化后为空，无手势输出");
            return TranslationResult::empty(text.to_string(), start.elapsed().as_micros() as u64);
        }
        tracing::debug!("规范化文本: {:?}", normalized);

        let signs = self.resolve_normalized(&normalized);
        let elapsed_us = start.elapsed().as_micros() as u64;

        let result = TranslationResult {
            original: text.to_string(),
            normalized,
            signs,
            elapsed_us,
        };
        tracing::info!(
            "翻译完成: {} 个手势（指拼 {} 个），耗时 {}us",
            result.signs.len(),
            result.fingerspelled_count(),
            result.elapsed_us
        );

        result
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    fn resolve_normalized(&self, normalized: &str) -> SignSequence {
        Tokenizer::tokenize(normalized)
            .into_iter()
            .map(|token| self.resolve_word(&token.text))
            .collect()
    }

    /// 单词查询，未收录时回退为指拼
    fn resolve_word(&self, word: &str) -> SignDescriptor {
        match self.dictionary.lookup(word) {
            Some(sign) => sign,
            None => {
                tracing::debug!("词典未收录，使用指拼: {}", word);
                SignDescriptor::fingerspelled(word)
            }
        }
    }
}

impl Default for SignResolver {
    fn default() -> Self {
        Self::new(TextNormalizer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::dictionary::available_words;

    fn words(signs: &[SignDescriptor]) -> Vec<&str> {
        signs.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_resolve_order_preserved() {
        let resolver = SignResolver::default();
        let signs = resolver.resolve("hello water bye");
        assert_eq!(words(&signs), vec!["hello", "water", "bye"]);
        assert!(signs.iter().all(|s| !s.is_fingerspelled()));
    }

    #[test]
    fn test_resolve_fallback() {
        let resolver = SignResolver::default();
        let signs = resolver.resolve("xyz");
        assert_eq!(signs.len(), 1);
        assert_eq!(signs[0].word, "xyz");
        assert_eq!(signs[0].description, "Fingerspell each letter: X-Y-Z");
        assert_eq!(signs[0].emoji, "✋");
        assert_eq!(signs[0].hand_shape, "Various handshapes for each letter");
        assert_eq!(signs[0].movement, "Form each letter shape in sequence");
        assert_eq!(signs[0].location, "In front of body, chest level");
        assert_eq!(signs[0].visual_cue, "Spell out each letter with hand shapes");
    }

    #[test]
    fn test_resolve_empty() {
        let resolver = SignResolver::default();
        assert!(resolver.resolve("").is_empty());
        assert!(resolver.resolve("um uh").is_empty());
        assert!(resolver.resolve("   ").is_empty());
        assert!(resolver.resolve("?! ...").is_empty());
    }

    #[test]
    fn test_filler_after_non_ascii_letter_removed() {
        let resolver = SignResolver::default();
        assert!(resolver.resolve("ñso").is_empty());
        assert_eq!(words(&resolver.resolve("ñso water")), vec!["water"]);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let resolver = SignResolver::default();
        assert_eq!(resolver.resolve("HELLO!"), resolver.resolve("hello"));
    }

    #[test]
    fn test_dictionary_hit_fidelity() {
        let resolver = SignResolver::default();
        let dict = SignDictionary::global();

        for key in available_words() {
            if key.contains(char::is_whitespace) {
                continue;
            }
            let entry = dict.get(key).expect("key listed");
            let signs = resolver.resolve(key);
            assert_eq!(signs.len(), 1, "key {:?}", key);

            let sign = &signs[0];
            assert_eq!(sign.word, key);
            assert_eq!(sign.description, entry.description);
            assert_eq!(sign.hand_shape, entry.hand_shape);
            assert_eq!(sign.movement, entry.movement);
            assert_eq!(sign.location, entry.location);
            assert_eq!(sign.emoji, entry.emoji);
            assert_eq!(sign.visual_cue, entry.visual_cue);
        }
    }

    #[test]
    fn test_phrase_key_not_reached() {
        let resolver = SignResolver::default();
        let signs = resolver.resolve("thank you");
        assert_eq!(words(&signs), vec!["thank", "you"]);
        assert!(signs[0].is_fingerspelled());
        assert!(!signs[1].is_fingerspelled());
    }

    #[test]
    fn test_length_matches_tokens() {
        let resolver = SignResolver::default();
        let samples = [
            "Um, I'm gonna need the doctor... today!",
            "hello -- world",
            "so well like",
            "I really wanna go home, you know?",
        ];
        for s in samples {
            let normalized = resolver.normalize(s);
            let expected = normalized
                .split_whitespace()
                .filter(|t| !Tokenizer::strip_symbols(t).is_empty())
                .count();
            assert_eq!(resolver.resolve(s).len(), expected, "input: {:?}", s);
        }
    }

    #[test]
    fn test_sentence() {
        let resolver = SignResolver::default();
        let signs = resolver.resolve("Um, I'm gonna need the doctor today!");
        assert_eq!(
            words(&signs),
            vec!["i", "go", "need", "the", "doctor", "today"]
        );
        assert!(signs[3].is_fingerspelled());
        assert_eq!(signs[3].description, "Fingerspell each letter: T-H-E");
    }

    #[test]
    fn test_translate_result() {
        let resolver = SignResolver::default();
        let result = resolver.translate("Hello friend, qq");
        assert_eq!(result.original, "Hello friend, qq");
        assert_eq!(result.normalized, "hello friend, qq");
        assert_eq!(result.signs.len(), 3);
        assert_eq!(result.fingerspelled_count(), 1);

        let empty = resolver.translate("uh");
        assert!(empty.is_empty());
        assert_eq!(empty.original, "uh");
        assert_eq!(empty.normalized, "");
    }

    #[test]
    fn test_without_rules() {
        let resolver = SignResolver::new(TextNormalizer::without_rules());
        let signs = resolver.resolve("um I'm here");
        assert_eq!(words(&signs), vec!["um", "im", "here"]);
    }

    #[test]
    fn test_resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignResolver>();
    }
}
