//! Index tunables, read from TOML.
//!
//! The process-wide value comes from `settings()`, which parses the embedded
//! `default_settings.toml` unless `init_custom` installed an override first.
//! Whichever of the two runs first fixes the value for the process.
//! `TrieIndex::with_settings` takes an explicit `IndexSettings` and never
//! touches the global.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static GLOBAL: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub index: IndexSettings,
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSettings {
    pub min_score: i64,
    pub max_suggestions: usize,
    pub frontier_width: usize,
    pub default_max_cost: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizeSettings {
    pub max_chars: usize,
}

impl Default for IndexSettings {
    fn default() -> Self {
        settings().index.clone()
    }
}

/// Install `toml_content` as the global settings. Fails with
/// `AlreadyInitialized` once `settings()` has been read or another override
/// was installed.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    GLOBAL
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    GLOBAL.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let parsed: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    parsed.check()?;
    Ok(parsed)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

impl Settings {
    fn check(&self) -> Result<(), SettingsError> {
        if self.index.min_score < 0 {
            return Err(invalid("index.min_score", "must be non-negative"));
        }
        let counts = [
            ("index.max_suggestions", self.index.max_suggestions),
            ("index.frontier_width", self.index.frontier_width),
            ("index.default_max_cost", self.index.default_max_cost),
            ("normalize.max_chars", self.normalize.max_chars),
        ];
        match counts.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(invalid(field, "must be positive")),
            None => Ok(()),
        }
    }
}
