//! YAML source documents.
//!
//! A document is a sequence of rows; each row maps locale → word id → term
//! list:
//!
//! ```yaml
//! - ja:
//!     w1:
//!       - term: 計算
//!         read: けい さん
//!       - term: 機
//!         read: き
//!   en:
//!     w1:
//!       - term: computer
//! ```
//!
//! Source order is kept at every level. A `space:` key left empty counts
//! as `space: false`.


use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};
use tracing::{debug, debug_span};

use crate::locale::{Locale, LocaleError};
use crate::registry::Registry;
use crate::spacing::Spacing;
use crate::table::Table;
use crate::term::Term;
use crate::translation::Translation;
use crate::word::Word;

const DEFAULT_LOAN_LANGUAGE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{path}: expected {expected}")]
    Structure { path: String, expected: &'static str },
    #[error("{path}: {source}")]
    Locale {
        path: String,
        #[source]
        source: LocaleError,
    },
}

fn structure(path: &str, expected: &'static str) -> SourceError {
    SourceError::Structure {
        path: path.to_string(),
        expected,
    }
}

/// Read and build a table from a YAML file.
pub fn load_table(path: impl AsRef<Path>, registry: Arc<Registry>) -> Result<Table, SourceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text, registry)
}

/// Build a table from YAML text.
pub fn parse_table(text: &str, registry: Arc<Registry>) -> Result<Table, SourceError> {
    let _span = debug_span!("parse_table", bytes = text.len()).entered();
    let doc: Value = serde_yaml::from_str(text)?;
    let rows = doc
        .as_sequence()
        .ok_or_else(|| structure("$", "a sequence of rows"))?;

    let translations = rows
        .iter()
        .enumerate()
        .map(|(i, row)| translation(row, &format!("$[{i}]"), &registry))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = translations.len(), "parsed table");
    Ok(Table::new(translations, registry))
}

fn translation(row: &Value, path: &str, registry: &Registry) -> Result<Translation, SourceError> {
    let row = row
        .as_mapping()
        .ok_or_else(|| structure(path, "a mapping of locale to words"))?;

    let mut words = IndexMap::with_capacity(row.len());
    for (key, value) in row {
        let key = key
            .as_str()
            .ok_or_else(|| structure(path, "locale keys to be strings"))?;
        let path = format!("{path}.{key}");
        let locale = Locale::parse(&key.replace('-', "_")).map_err(|source| SourceError::Locale {
            path: path.clone(),
            source,
        })?;
        let entries = value
            .as_mapping()
            .ok_or_else(|| structure(&path, "a mapping of word id to terms"))?;
        let list = entries
            .iter()
            .map(|(id, terms)| word(id, terms, &path, &locale, registry))
            .collect::<Result<Vec<_>, _>>()?;
        words.insert(locale, list);
    }
    Ok(Translation::new(words))
}

fn word(
    id: &Value,
    terms: &Value,
    path: &str,
    locale: &Locale,
    registry: &Registry,
) -> Result<Word, SourceError> {
    let id = id
        .as_str()
        .ok_or_else(|| structure(path, "word ids to be strings"))?;
    let path = format!("{path}.{id}");
    let terms = terms
        .as_sequence()
        .ok_or_else(|| structure(&path, "a sequence of terms"))?
        .iter()
        .enumerate()
        .map(|(i, t)| term(t, &format!("{path}[{i}]"), locale, registry))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Word::new(id, locale.clone(), terms))
}

fn term(value: &Value, path: &str, locale: &Locale, registry: &Registry) -> Result<Term, SourceError> {
    let entry = value
        .as_mapping()
        .ok_or_else(|| structure(path, "a term mapping"))?;

    let text = optional_str(entry, "term", path)?
        .ok_or_else(|| structure(&format!("{path}.term"), "a string"))?;
    let space = match entry.get("space") {
        None => registry.implicit_spacing(locale),
        Some(Value::Null) => Spacing::NoSpace,
        Some(v) => Spacing::explicit(
            v.as_bool()
                .ok_or_else(|| structure(&format!("{path}.space"), "a boolean"))?,
        ),
    };
    let correspond = optional_str(entry, "correspond", path)?;

    let term = if let Some(loan) = optional_str(entry, "loan", path)? {
        let language = optional_str(entry, "language", path)?.unwrap_or(DEFAULT_LOAN_LANGUAGE);
        let loan_locale =
            Locale::parse(&language.replace('-', "_")).map_err(|source| SourceError::Locale {
                path: format!("{path}.language"),
                source,
            })?;
        Term::western(text, loan, loan_locale, space)
    } else if let Some(read) = optional_str(entry, "read", path)? {
        Term::eastern(text, read, space)
    } else {
        Term::plain(text, space)
    };

    Ok(match correspond {
        Some(c) => term.with_correspond(c),
        None => term,
    })
}

fn optional_str<'v>(entry: &'v Mapping, key: &str, path: &str) -> Result<Option<&'v str>, SourceError> {
    match entry.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(Some)
            .ok_or_else(|| structure(&format!("{path}.{key}"), "a string")),
    }
}
