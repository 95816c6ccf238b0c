//! Settings loaded from TOML.
//!
//! - `parse_settings_toml(text)` parses and validates
//! - `Settings::builtin()` returns the embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::readers::BUILTIN_READERS;
use crate::romanize::BUILTIN_ROMANIZERS;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub spacing: SpacingSettings,
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleSettings>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpacingSettings {
    pub spaceless_languages: Vec<String>,
}

impl Default for SpacingSettings {
    fn default() -> Self {
        Self {
            spaceless_languages: vec!["ja".to_string(), "zh".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleSettings {
    pub romanizer: Option<String>,
    pub reader: Option<String>,
    pub normalizer: Option<String>,
    pub tag: Option<String>,
}

impl Settings {
    /// Settings parsed from the embedded defaults.
    pub fn builtin() -> &'static Settings {
        static INSTANCE: OnceLock<Settings> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
        })
    }

    /// Locale entries with their keys parsed.
    pub fn parsed_locales(
        &self,
    ) -> impl Iterator<Item = Result<(Locale, &LocaleSettings), SettingsError>> {
        self.locales.iter().map(|(key, ls)| {
            Locale::parse(key)
                .map(|locale| (locale, ls))
                .map_err(|e| SettingsError::InvalidValue {
                    field: format!("locales.{key}"),
                    reason: e.to_string(),
                })
        })
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    for language in &s.spacing.spaceless_languages {
        if language.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "spacing.spaceless_languages".to_string(),
                reason: "language must be non-empty".to_string(),
            });
        }
    }

    for entry in s.parsed_locales() {
        let (locale, ls) = entry?;
        macro_rules! check_builtin {
            ($field:ident, $names:expr) => {
                if let Some(name) = &ls.$field {
                    if !$names.contains(&name.as_str()) {
                        return Err(SettingsError::InvalidValue {
                            field: format!("locales.{}.{}", locale, stringify!($field)),
                            reason: format!("unknown {} {:?}", stringify!($field), name),
                        });
                    }
                }
            };
        }
        check_builtin!(romanizer, BUILTIN_ROMANIZERS);
        check_builtin!(reader, BUILTIN_READERS);
        if ls.tag.as_deref() == Some("") {
            return Err(SettingsError::InvalidValue {
                field: format!("locales.{locale}.tag"),
                reason: "must be non-empty".to_string(),
            });
        }
    }
    Ok(())
}
