//! Kana-to-romaji transliteration.
//!
//! Uses a trie-based lookup table to convert hiragana/katakana into Latin
//! keys, handling sokuon (っ) gemination and yōon digraphs (きゃ).

mod config;
mod convert;
mod table;
mod trie;

use std::borrow::Cow;

pub use config::{parse_kana_toml, KanaTableError};
pub use convert::kana_to_romaji;
pub use table::DEFAULT_TOML;
pub use trie::KanaTrie;

/// Returns the embedded default kana table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

pub trait Transliterator: Send + Sync {
    /// Convert a phonetic (kana) string to a Latin-alphabet key.
    fn kana_to_latin(&self, kana: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct RomajiTransliterator {
    trie: Cow<'static, KanaTrie>,
}

impl RomajiTransliterator {
    /// Transliterator over the embedded default table.
    pub fn new() -> Self {
        Self {
            trie: Cow::Borrowed(KanaTrie::global()),
        }
    }

    /// Transliterator over a custom `[mappings]` table.
    pub fn from_toml(toml_str: &str) -> Result<Self, KanaTableError> {
        let map = parse_kana_toml(toml_str)?;
        Ok(Self {
            trie: Cow::Owned(KanaTrie::from_map(&map)),
        })
    }
}

impl Default for RomajiTransliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for RomajiTransliterator {
    fn kana_to_latin(&self, kana: &str) -> String {
        kana_to_romaji(&self.trie, kana)
    }
}
