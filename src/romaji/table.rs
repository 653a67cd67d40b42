/// Embedded kana → romaji table, modified Hepburn.
pub const DEFAULT_TOML: &str = include_str!("default_kana.toml");
