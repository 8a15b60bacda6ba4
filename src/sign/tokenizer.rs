//! 分词器
//!
//! 按空白切分规范化文本，并去除每个词内的标点/符号

/// 字符类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharClass {
    /// ASCII 字母/数字/下划线
    Word,
    /// 空白符
    Whitespace,
    /// 标点/符号/其他
    Symbol,
}

/// Token
#[derive(Debug, Clone)]
pub struct Token {
    /// 去除标点并小写后的词（词典查询键）
    pub text: String,
    /// 切分得到的原始片段
    pub raw: String,
    /// 在规范化文本中的起始字节索引
    pub start: usize,
    /// 在规范化文本中的结束字节索引（不含）
    pub end: usize,
}

/// 分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 分词
    ///
    /// 去标点后为空的片段（如 `"!!"`）直接丢弃
    pub fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (start, raw) in Self::split_whitespace_indices(text) {
            let cleaned = Self::strip_symbols(raw);
            if cleaned.is_empty() {
                tracing::debug!("丢弃纯符号片段: {:?}", raw);
                continue;
            }

            tokens.push(Token {
                text: cleaned,
                raw: raw.to_string(),
                start,
                end: start + raw.len(),
            });
        }

        tokens
    }

    /// 去除非词字符并转小写
    pub fn strip_symbols(raw: &str) -> String {
        raw.chars()
            .filter(|&ch| Self::classify_char(ch) != CharClass::Symbol)
            .collect::<String>()
            .to_lowercase()
    }

    /// 字符分类
    pub fn classify_char(ch: char) -> CharClass {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            CharClass::Word
        } else if ch.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Symbol
        }
    }

    /// 按空白切分，返回 (起始字节索引, 片段)
    fn split_whitespace_indices(text: &str) -> Vec<(usize, &str)> {
        let mut pieces = Vec::new();
        let mut current_start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = current_start.take() {
                    pieces.push((start, &text[start..idx]));
                }
            } else if current_start.is_none() {
                current_start = Some(idx);
            }
        }

        // 处理最后一个片段
        if let Some(start) = current_start {
            pieces.push((start, &text[start..]));
        }

        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        Tokenizer::tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(texts("hello water bye"), vec!["hello", "water", "bye"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(texts("hello! it's, ok?"), vec!["hello", "its", "ok"]);
    }

    #[test]
    fn test_tokenize_drops_symbol_only() {
        assert_eq!(texts("hi !! ... there"), vec!["hi", "there"]);
        assert!(texts("?!").is_empty());
        assert!(texts("").is_empty());
        assert!(texts("   ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscore() {
        assert_eq!(texts("room_101"), vec!["room_101"]);
    }

    #[test]
    fn test_tokenize_non_ascii_letters_removed() {
        assert_eq!(texts("café"), vec!["caf"]);
    }

    #[test]
    fn test_token_offsets() {
        let text = "hi  there!";
        let tokens = Tokenizer::tokenize(text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].raw, "there!");
        assert_eq!(&text[tokens[1].start..tokens[1].end], "there!");
    }

    #[test]
    fn test_classify_char() {
        assert_eq!(Tokenizer::classify_char('a'), CharClass::Word);
        assert_eq!(Tokenizer::classify_char('7'), CharClass::Word);
        assert_eq!(Tokenizer::classify_char(' '), CharClass::Whitespace);
        assert_eq!(Tokenizer::classify_char('\''), CharClass::Symbol);
        assert_eq!(Tokenizer::classify_char('é'), CharClass::Symbol);
    }
}
