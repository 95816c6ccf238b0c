//! Character maps for script normalization and per-character readings.
//!
//! Both kinds live in one TOML document:
//!
//! ```toml
//! [normalize.s2t]
//! "学" = "學"
//!
//! [read.zh_CN]
//! "學" = "xué"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::locale::{Locale, LocaleError};
use crate::registry::Normalizer;

pub const DEFAULT_CHARMAPS_TOML: &str = include_str!("default_charmaps.toml");

#[derive(Debug, thiserror::Error)]
pub enum CharMapError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{table}] key must be a single character: {key:?}")]
    MultiCharKey { table: String, key: String },
    #[error("[{table}] empty value for key {key:?}")]
    EmptyValue { table: String, key: String },
    #[error("[{table}] {source}")]
    Locale {
        table: String,
        #[source]
        source: LocaleError,
    },
}

#[derive(Deserialize)]
struct CharMapsFile {
    #[serde(default)]
    normalize: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    read: BTreeMap<String, BTreeMap<String, String>>,
}

/// Single character → string table. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct CharMap(Arc<HashMap<char, String>>);

impl CharMap {
    fn from_entries(table: &str, entries: BTreeMap<String, String>) -> Result<Self, CharMapError> {
        let mut map = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(CharMapError::MultiCharKey {
                    table: table.to_string(),
                    key,
                });
            };
            if value.is_empty() {
                return Err(CharMapError::EmptyValue {
                    table: table.to_string(),
                    key,
                });
            }
            map.insert(c, value);
        }
        Ok(Self(Arc::new(map)))
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.0.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace every mapped character; unmapped ones are kept.
    pub fn convert(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.0.get(&c) {
                Some(s) => out.push_str(s),
                None => out.push(c),
            }
        }
        out
    }

    fn overlay(&mut self, other: &CharMap) {
        let map = Arc::make_mut(&mut self.0);
        map.extend(other.0.iter().map(|(k, v)| (*k, v.clone())));
    }
}

impl Normalizer for CharMap {
    fn normalize(&self, text: &str) -> String {
        self.convert(text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CharMaps {
    normalize: BTreeMap<String, CharMap>,
    read: BTreeMap<Locale, CharMap>,
}

impl CharMaps {
    pub fn parse(toml_str: &str) -> Result<Self, CharMapError> {
        let file: CharMapsFile =
            toml::from_str(toml_str).map_err(|e| CharMapError::Parse(e.to_string()))?;

        let mut maps = CharMaps::default();
        for (name, entries) in file.normalize {
            let table = format!("normalize.{name}");
            maps.normalize.insert(name, CharMap::from_entries(&table, entries)?);
        }
        for (key, entries) in file.read {
            let table = format!("read.{key}");
            let locale = Locale::parse(&key).map_err(|source| CharMapError::Locale {
                table: table.clone(),
                source,
            })?;
            maps.read.insert(locale, CharMap::from_entries(&table, entries)?);
        }
        Ok(maps)
    }

    /// Maps parsed from the embedded defaults.
    pub fn builtin() -> CharMaps {
        static INSTANCE: OnceLock<CharMaps> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                CharMaps::parse(DEFAULT_CHARMAPS_TOML).expect("charmaps TOML must be valid")
            })
            .clone()
    }

    /// Overlay `other` on top of `self`; its entries win on conflict.
    pub fn merge(&mut self, other: CharMaps) {
        for (name, map) in other.normalize {
            self.normalize.entry(name).or_default().overlay(&map);
        }
        for (locale, map) in other.read {
            self.read.entry(locale).or_default().overlay(&map);
        }
    }

    pub fn normalizer(&self, name: &str) -> Option<&CharMap> {
        self.normalize.get(name)
    }

    pub fn readings(&self, locale: &Locale) -> Option<&CharMap> {
        self.read.get(locale)
    }

    pub fn normalizer_names(&self) -> impl Iterator<Item = &str> {
        self.normalize.keys().map(String::as_str)
    }

    pub fn reading_locales(&self) -> impl Iterator<Item = &Locale> {
        self.read.keys()
    }
}
