//! Text canonicalization applied before any key is derived.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::settings::settings;
use crate::unicode::{fold_fullwidth_alnum, is_blank};

/// Apostrophe-like mark kept inside words ("rock’n’roll") but never at the end.
const RIGHT_QUOTE: char = '\u{2019}';

pub trait Normalizer: Send + Sync {
    /// Canonicalize `raw`. Returns `""` when the input cannot produce a key.
    fn normalize(&self, raw: &str) -> String;
}

/// Width/case folding normalizer.
///
/// Blank input and input longer than `max_chars` code points normalize to `""`.
/// Otherwise: NFC, fullwidth digits and Latin letters folded to ASCII,
/// lowercased, every Unicode punctuation mark removed except `-` and `’`,
/// and any trailing run of `’` stripped.
#[derive(Debug, Clone)]
pub struct StandardNormalizer {
    max_chars: usize,
}

impl StandardNormalizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl Default for StandardNormalizer {
    fn default() -> Self {
        Self::new(settings().normalize.max_chars)
    }
}

fn is_stripped_punctuation(c: char) -> bool {
    c != '-' && c != RIGHT_QUOTE && c.general_category_group() == GeneralCategoryGroup::Punctuation
}

impl Normalizer for StandardNormalizer {
    fn normalize(&self, raw: &str) -> String {
        if is_blank(raw) || raw.chars().count() > self.max_chars {
            return String::new();
        }

        let folded: String = raw.nfc().map(fold_fullwidth_alnum).collect();
        let lowered = folded.to_lowercase();
        let kept: String = lowered
            .chars()
            .filter(|&c| !is_stripped_punctuation(c))
            .collect();
        // Composition runs last: dropping a mark can expose a new composable pair.
        let out: String = kept.trim_end_matches(RIGHT_QUOTE).nfc().collect();

        if is_blank(&out) || out.chars().count() > self.max_chars {
            return String::new();
        }
        out
    }
}
