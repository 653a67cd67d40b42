//! Script-aware tokenization producing phonetic readings for CJK spans.
//!
//! `Tokenizer` is the seam for a real morphological analyzer. The bundled
//! `ReadingTokenizer` segments text into runs of one character class and reads
//! kanji through a caller-supplied surface → kana table.

use std::collections::HashMap;

use crate::unicode::{
    is_cyrillic, is_greek, is_hiragana, is_kanji, is_kanji_numeric, is_katakana,
};

/// Coarse character class of a token, in the numbering morphological
/// analyzers commonly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Default = 0,
    Space = 1,
    Kanji = 2,
    Symbol = 3,
    Numeric = 4,
    Alpha = 5,
    Hiragana = 6,
    Katakana = 7,
    KanjiNumeric = 8,
    Greek = 9,
    Cyrillic = 10,
}

impl CharType {
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharType::Space
        } else if is_kanji_numeric(c) {
            CharType::KanjiNumeric
        } else if is_kanji(c) {
            CharType::Kanji
        } else if is_hiragana(c) {
            CharType::Hiragana
        } else if is_katakana(c) {
            CharType::Katakana
        } else if is_greek(c) {
            CharType::Greek
        } else if is_cyrillic(c) {
            CharType::Cyrillic
        } else if c.is_numeric() {
            CharType::Numeric
        } else if c.is_alphabetic() {
            CharType::Alpha
        } else if c.is_ascii_punctuation() || !c.is_alphanumeric() {
            CharType::Symbol
        } else {
            CharType::Default
        }
    }

    /// Classes whose tokens are replaced by their reading.
    pub fn is_cjk(self) -> bool {
        matches!(
            self,
            CharType::Kanji | CharType::Hiragana | CharType::Katakana | CharType::KanjiNumeric
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub char_type: CharType,
    /// Phonetic reading (kana). Only set for CJK-class tokens.
    pub reading: Option<String>,
}

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

#[derive(Debug, Clone, Default)]
pub struct ReadingTokenizer {
    readings: HashMap<String, String>,
    /// Longest table key, in code points. Bounds the prefix scan.
    max_key_chars: usize,
}

impl ReadingTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_readings<I, S, R>(readings: I) -> Self
    where
        I: IntoIterator<Item = (S, R)>,
        S: Into<String>,
        R: Into<String>,
    {
        let mut tokenizer = Self::new();
        for (surface, reading) in readings {
            tokenizer.insert(surface, reading);
        }
        tokenizer
    }

    /// Register a reading. Returns the previous reading for `surface`, if any.
    pub fn insert(&mut self, surface: impl Into<String>, reading: impl Into<String>) -> Option<String> {
        let surface = surface.into();
        let reading = reading.into();
        if surface.is_empty() || reading.is_empty() {
            return None;
        }
        self.max_key_chars = self.max_key_chars.max(surface.chars().count());
        self.readings.insert(surface, reading)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Longest table entry that is a prefix of `rest`: (length in chars, reading).
    fn longest_reading(&self, rest: &[char]) -> Option<(usize, &str)> {
        let limit = self.max_key_chars.min(rest.len());
        (1..=limit).rev().find_map(|end| {
            let key: String = rest[..end].iter().collect();
            self.readings.get(&key).map(|r| (end, r.as_str()))
        })
    }
}

impl Tokenizer for ReadingTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if let Some((len, reading)) = self.longest_reading(&chars[i..]) {
                let span = &chars[i..i + len];
                let char_type = if span.iter().copied().any(is_kanji) {
                    CharType::Kanji
                } else {
                    CharType::of(span[0])
                };
                tokens.push(Token {
                    surface: span.iter().collect(),
                    char_type,
                    reading: Some(reading.to_string()),
                });
                i += len;
                continue;
            }

            let char_type = CharType::of(chars[i]);
            let mut j = i + 1;
            while j < chars.len()
                && CharType::of(chars[j]) == char_type
                && self.longest_reading(&chars[j..]).is_none()
            {
                j += 1;
            }
            let surface: String = chars[i..j].iter().collect();
            let reading = match char_type {
                CharType::Hiragana | CharType::Katakana => Some(surface.clone()),
                _ => None,
            };
            tokens.push(Token {
                surface,
                char_type,
                reading,
            });
            i = j;
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_type_classes() {
        assert_eq!(CharType::of(' '), CharType::Space);
        assert_eq!(CharType::of('東'), CharType::Kanji);
        assert_eq!(CharType::of('三'), CharType::KanjiNumeric);
        assert_eq!(CharType::of('あ'), CharType::Hiragana);
        assert_eq!(CharType::of('ア'), CharType::Katakana);
        assert_eq!(CharType::of('7'), CharType::Numeric);
        assert_eq!(CharType::of('x'), CharType::Alpha);
        assert_eq!(CharType::of('λ'), CharType::Greek);
        assert_eq!(CharType::of('ж'), CharType::Cyrillic);
        assert_eq!(CharType::of('!'), CharType::Symbol);
        assert!(CharType::Kanji.is_cjk());
        assert!(!CharType::Alpha.is_cjk());
    }

    #[test]
    fn runs_without_table() {
        let t = ReadingTokenizer::new();
        let tokens = t.tokenize("abcかなカナ12");
        let types: Vec<CharType> = tokens.iter().map(|t| t.char_type).collect();
        assert_eq!(
            types,
            vec![
                CharType::Alpha,
                CharType::Hiragana,
                CharType::Katakana,
                CharType::Numeric
            ]
        );
        assert_eq!(tokens[1].reading.as_deref(), Some("かな"));
        assert_eq!(tokens[2].reading.as_deref(), Some("カナ"));
        assert_eq!(tokens[0].reading, None);
    }

    #[test]
    fn kanji_read_through_table() {
        let t = ReadingTokenizer::with_readings([("東京", "とうきょう"), ("東", "ひがし")]);
        let tokens = t.tokenize("東京タワー");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].surface, "東京");
        assert_eq!(tokens[0].char_type, CharType::Kanji);
        assert_eq!(tokens[0].reading.as_deref(), Some("とうきょう"));
        assert_eq!(tokens[1].surface, "タワー");
        assert_eq!(tokens[1].reading.as_deref(), Some("タワー"));
    }

    #[test]
    fn longest_match_wins() {
        let t = ReadingTokenizer::with_readings([("東", "ひがし"), ("東京", "とうきょう")]);
        let tokens = t.tokenize("東京東");
        let readings: Vec<&str> = tokens.iter().filter_map(|t| t.reading.as_deref()).collect();
        assert_eq!(readings, vec!["とうきょう", "ひがし"]);
    }

    #[test]
    fn unknown_kanji_has_no_reading() {
        let t = ReadingTokenizer::new();
        let tokens = t.tokenize("漢字");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].char_type, CharType::Kanji);
        assert_eq!(tokens[0].reading, None);
    }

    #[test]
    fn run_stops_where_table_entry_starts() {
        let t = ReadingTokenizer::with_readings([("京都", "きょうと")]);
        let tokens = t.tokenize("西京都");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].surface, "西");
        assert_eq!(tokens[1].surface, "京都");
        assert_eq!(tokens[1].reading.as_deref(), Some("きょうと"));
    }

    #[test]
    fn empty_entries_ignored() {
        let mut t = ReadingTokenizer::new();
        assert_eq!(t.insert("", "x"), None);
        assert_eq!(t.insert("x", ""), None);
        assert!(t.is_empty());
        t.insert("空", "そら");
        assert_eq!(t.len(), 1);
    }
}
