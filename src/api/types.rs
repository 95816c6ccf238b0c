use std::path::PathBuf;

use serde::Serialize;
use termtable_core::{
    CharMapError, Locale, LocaleError, Markup, SettingsError, SourceError, Spacing,
    TermLookupError,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TermTableError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("character maps: {0}")]
    CharMap(#[from] CharMapError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error(transparent)]
    Lookup(#[from] TermLookupError),
}

// ---------------------------------------------------------------------------
// Layout records (plain data handed to renderers)
// ---------------------------------------------------------------------------

/// One translation laid out as `max_words` rows.
#[derive(Debug, Clone, Serialize)]
pub struct RowGroup {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// First row of its group.
    pub head: bool,
    /// Last row of its group.
    pub foot: bool,
    /// One cell per locale, in `ordered_locales` order.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Cell {
    Word(WordCell),
    /// Occupied by a word above spanning several rows.
    Covered,
    /// The locale has no words in this translation.
    Empty,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordCell {
    pub locale: Locale,
    pub id: String,
    pub terms: Vec<TermCell>,
    /// Omitted for English.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romanization: Option<Markup>,
    /// BCP 47 tag of `romanization`.
    pub tag: String,
    /// 1-based position of `id` among the translation's cognate groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognate: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermCell {
    pub text: String,
    pub space: Spacing,
    /// 1-based position of the correspond key among the translation's
    /// correspondences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correspond: Option<usize>,
    /// Pieces covering `text` in order.
    pub ruby: Vec<Ruby>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ruby {
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Ruby {
    pub fn plain(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            text: None,
        }
    }

    pub fn annotated(base: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            text: Some(text.into()),
        }
    }
}
