//! Popularity-weighted typeahead index for romanized, kana and kanji input.
//!
//! Keywords are canonicalized to an ASCII key (normalize, read kanji, romanize
//! kana) and stored in a scored prefix tree supporting ranked prefix
//! suggestion, exact lookup and bounded edit-distance lookup.

pub mod distance;
pub mod normalize;
pub mod pipeline;
pub mod romaji;
pub mod settings;
pub mod tokenize;
pub mod trace_init;
pub mod trie;
pub mod unicode;
pub mod vocab;

pub use distance::levenshtein;
pub use normalize::{Normalizer, StandardNormalizer};
pub use pipeline::Canonicalizer;
pub use romaji::{RomajiTransliterator, Transliterator};
pub use tokenize::{CharType, ReadingTokenizer, Token, Tokenizer};
pub use trie::{Correction, IndexStats, Suggestion, TrieIndex, TrieNode, TERMINATOR};
