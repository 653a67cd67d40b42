//! Canonicalization pipeline: raw text → ASCII trie key.
//!
//! `key_to_latin(raw) = kana_to_latin(to_reading(normalize(remove_spaces(raw))))`,
//! where `to_reading` only runs when the normalized text contains Han characters.

use crate::normalize::{Normalizer, StandardNormalizer};
use crate::romaji::{RomajiTransliterator, Transliterator};
use crate::tokenize::{ReadingTokenizer, Tokenizer};
use crate::trie::TERMINATOR;
use crate::unicode::{contains_han, remove_spaces};

pub struct Canonicalizer {
    normalizer: Box<dyn Normalizer>,
    tokenizer: Box<dyn Tokenizer>,
    transliterator: Box<dyn Transliterator>,
}

impl Canonicalizer {
    pub fn new(
        normalizer: Box<dyn Normalizer>,
        tokenizer: Box<dyn Tokenizer>,
        transliterator: Box<dyn Transliterator>,
    ) -> Self {
        Self {
            normalizer,
            tokenizer,
            transliterator,
        }
    }

    /// Default collaborators; kanji without a reading pass through untouched.
    pub fn standard() -> Self {
        Self::with_tokenizer(ReadingTokenizer::new())
    }

    /// Default normalizer and transliterator around a custom tokenizer.
    pub fn with_tokenizer(tokenizer: impl Tokenizer + 'static) -> Self {
        Self::new(
            Box::new(StandardNormalizer::default()),
            Box::new(tokenizer),
            Box::new(RomajiTransliterator::new()),
        )
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Replace CJK-class tokens by their reading; other tokens keep their surface.
    pub fn to_reading(&self, text: &str) -> String {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| match token.reading {
                Some(reading) if token.char_type.is_cjk() => reading,
                _ => token.surface,
            })
            .collect()
    }

    /// Canonical trie key for `raw`; `""` when nothing survives normalization.
    /// The terminator never appears in a returned key.
    pub fn key_to_latin(&self, raw: &str) -> String {
        let normalized = self.normalize(&remove_spaces(raw));
        if normalized.is_empty() {
            return String::new();
        }
        let reading = if contains_han(&normalized) {
            self.to_reading(&normalized)
        } else {
            normalized
        };
        let mut key = self.transliterator.kana_to_latin(&reading);
        key.retain(|c| c != TERMINATOR);
        key
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::standard()
    }
}
