//! Terms: one token of one word in one language.

mod reading;

pub use reading::{EasternTerm, ReadAs};

use serde::Serialize;

use crate::locale::Locale;
use crate::markup::Markup;
use crate::registry::Registry;
use crate::spacing::Spacing;

/// A piece of a term paired with its reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub surface: String,
    pub reading: String,
}

impl Segment {
    pub fn new(surface: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
        }
    }
}

/// What a term carries beyond its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermKind {
    Plain,
    /// Written in a script that needs a reading (kanji, hanja, hanzi).
    Eastern { read: String },
    /// Borrowed from another language.
    Western { loan: String, locale: Locale },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    text: String,
    space: Spacing,
    correspond: String,
    kind: TermKind,
}

impl Term {
    pub fn plain(text: impl Into<String>, space: Spacing) -> Self {
        let text = text.into();
        Self {
            correspond: text.clone(),
            text,
            space,
            kind: TermKind::Plain,
        }
    }

    /// `read` is a space-separated reading, one token per character.
    pub fn eastern(text: impl Into<String>, read: impl Into<String>, space: Spacing) -> Self {
        let text = text.into();
        Self {
            correspond: text.clone(),
            text,
            space,
            kind: TermKind::Eastern { read: read.into() },
        }
    }

    pub fn western(
        text: impl Into<String>,
        loan: impl Into<String>,
        locale: Locale,
        space: Spacing,
    ) -> Self {
        let loan = loan.into();
        Self {
            text: text.into(),
            space,
            correspond: loan.clone(),
            kind: TermKind::Western { loan, locale },
        }
    }

    pub fn with_correspond(mut self, correspond: impl Into<String>) -> Self {
        self.correspond = correspond.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn space(&self) -> Spacing {
        self.space
    }

    pub fn correspond(&self) -> &str {
        &self.correspond
    }

    pub fn kind(&self) -> &TermKind {
        &self.kind
    }

    pub fn read(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Eastern { read } => Some(read),
            _ => None,
        }
    }

    pub fn loan(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Western { loan, .. } => Some(loan),
            _ => None,
        }
    }

    pub fn as_eastern(&self) -> Option<EasternTerm<'_>> {
        match &self.kind {
            TermKind::Eastern { read } => Some(EasternTerm::new(self, read)),
            _ => None,
        }
    }

    pub fn is_eastern(&self) -> bool {
        matches!(self.kind, TermKind::Eastern { .. })
    }

    /// Latin-script rendering for display.
    ///
    /// Eastern terms romanize their reading instead of their text. Western
    /// terms are capitalized when the loan is.
    pub fn romanize(&self, locale: &Locale, registry: &Registry) -> Markup {
        match &self.kind {
            TermKind::Plain => registry.romanize(locale, &self.text),
            TermKind::Eastern { read } => registry.romanize(locale, read),
            TermKind::Western { loan, .. } => {
                let romanized = registry.romanize(locale, &self.text);
                if loan.chars().next().is_some_and(char::is_uppercase) {
                    capitalize(&romanized)
                } else {
                    romanized
                }
            }
        }
    }

    /// Lookup key for this term in `locale`. Only eastern terms are
    /// normalized; the result is never shown.
    pub fn normalize(&self, locale: &Locale, registry: &Registry) -> String {
        match (&self.kind, registry.normalizer(locale)) {
            (TermKind::Eastern { .. }, Some(normalizer)) => normalizer.normalize(&self.text),
            _ => self.text.clone(),
        }
    }
}

fn capitalize(markup: &Markup) -> Markup {
    let mut chars = markup.as_str().chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(char::to_lowercase));
            Markup::trusted(out)
        }
        None => markup.clone(),
    }
}
