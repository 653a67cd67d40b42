use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_hiragana;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KanaTable {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty kana key")]
    EmptyKey,
    #[error("key is not hiragana: {0}")]
    NonHiraganaKey(String),
    #[error("non-ASCII romaji for key: {0}")]
    NonAsciiValue(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
}

/// Input is folded to hiragana before lookup, so keys in any other script
/// could never match. `ー` is allowed as the long-vowel mark.
fn check_entry(kana: &str, romaji: &str) -> Option<KanaTableError> {
    if kana.is_empty() {
        Some(KanaTableError::EmptyKey)
    } else if !kana.chars().all(|c| is_hiragana(c) || c == 'ー') {
        Some(KanaTableError::NonHiraganaKey(kana.to_string()))
    } else if romaji.is_empty() {
        Some(KanaTableError::EmptyValue(kana.to_string()))
    } else if !romaji.is_ascii() {
        Some(KanaTableError::NonAsciiValue(kana.to_string()))
    } else {
        None
    }
}

/// Parse a `[mappings]` table of `kana = "romaji"` pairs.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, KanaTableError> {
    let table: KanaTable =
        toml::from_str(toml_str).map_err(|e| KanaTableError::Parse(e.to_string()))?;
    if table.mappings.is_empty() {
        return Err(KanaTableError::Empty);
    }
    match table
        .mappings
        .iter()
        .find_map(|(kana, romaji)| check_entry(kana, romaji))
    {
        Some(err) => Err(err),
        None => Ok(table.mappings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<BTreeMap<String, String>, KanaTableError> {
        parse_kana_toml(&format!("[mappings]\n{body}\n"))
    }

    #[test]
    fn small_table() {
        let map = parse("\"あ\" = \"a\"\n\"きゃ\" = \"kya\"").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["きゃ"], "kya");
    }

    #[test]
    fn embedded_table() {
        let map = parse_kana_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(map.len() > 130, "only {} mappings", map.len());
        assert_eq!(map["しゃ"], "sha");
        assert_eq!(map["っ"], "xtsu");
        assert_eq!(map["ー"], "-");
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(matches!(parse(""), Err(KanaTableError::Empty)));
        assert!(matches!(parse("\"\" = \"a\""), Err(KanaTableError::EmptyKey)));
        assert!(matches!(
            parse("\"ア\" = \"a\""),
            Err(KanaTableError::NonHiraganaKey(_))
        ));
        assert!(matches!(
            parse("\"あ\" = \"\""),
            Err(KanaTableError::EmptyValue(_))
        ));
        assert!(matches!(
            parse("\"あ\" = \"あ\""),
            Err(KanaTableError::NonAsciiValue(_))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            parse_kana_toml("not valid toml {{{"),
            Err(KanaTableError::Parse(_))
        ));
        assert!(matches!(
            parse_kana_toml("[other]\n\"あ\" = \"a\"\n"),
            Err(KanaTableError::Parse(_))
        ));
    }
}
