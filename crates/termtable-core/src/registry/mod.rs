//! Per-locale capability tables consulted while romanizing and reading terms.
//!
//! A `Registry` is assembled once (from settings or by hand) and shared
//! through an `Arc`; nothing in it changes afterwards.

mod builtin;
#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::locale::Locale;
use crate::markup::Markup;
use crate::romanize;
use crate::spacing::Spacing;
use crate::term::Segment;

/// Latin-script rendering of a term or reading for one locale.
///
/// Input may contain spaces between syllables; output must not.
pub trait Romanizer: Send + Sync {
    fn romanize(&self, text: &str) -> Markup;
}

impl<F> Romanizer for F
where
    F: Fn(&str) -> Markup + Send + Sync,
{
    fn romanize(&self, text: &str) -> Markup {
        self(text)
    }
}

/// Canonical script conversion used for lookup keys, never for display.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}

/// Generates a reading for a term that has none in the target locale.
///
/// `previous` holds the normalized terms preceding `raw` within its spacing
/// group. A reader may use them as phonological context but must return
/// segments covering `raw` only, left to right.
pub trait Reader: Send + Sync {
    fn read(&self, raw: &str, normalized: &str, previous: &[String]) -> Vec<Segment>;
}

impl<F> Reader for F
where
    F: Fn(&str, &str, &[String]) -> Vec<Segment> + Send + Sync,
{
    fn read(&self, raw: &str, normalized: &str, previous: &[String]) -> Vec<Segment> {
        self(raw, normalized, previous)
    }
}

#[derive(Default)]
pub struct Registry {
    romanizers: HashMap<Locale, Arc<dyn Romanizer>>,
    normalizers: HashMap<Locale, Arc<dyn Normalizer>>,
    readers: HashMap<Locale, Arc<dyn Reader>>,
    tags: HashMap<Locale, String>,
    spaceless_languages: BTreeSet<String>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Romanize `text` for `locale`, or strip spaces and escape it when no
    /// romanizer is registered.
    pub fn romanize(&self, locale: &Locale, text: &str) -> Markup {
        match self.romanizers.get(locale) {
            Some(r) => r.romanize(text),
            None => romanize::identity(text),
        }
    }

    pub fn romanizer(&self, locale: &Locale) -> Option<&dyn Romanizer> {
        self.romanizers.get(locale).map(|r| r.as_ref())
    }

    pub fn normalizer(&self, locale: &Locale) -> Option<&dyn Normalizer> {
        self.normalizers.get(locale).map(|n| n.as_ref())
    }

    pub fn reader(&self, locale: &Locale) -> Option<&dyn Reader> {
        self.readers.get(locale).map(|r| r.as_ref())
    }

    /// BCP 47 tag of the romanization shown for `locale`.
    pub fn language_tag(&self, locale: &Locale) -> String {
        match self.tags.get(locale) {
            Some(tag) => tag.clone(),
            None => format!("{}-Latn", locale.language()),
        }
    }

    /// Whether the locale's language is conventionally written without
    /// spaces between words.
    pub fn is_spaceless(&self, locale: &Locale) -> bool {
        self.spaceless_languages.contains(locale.language())
    }

    /// Spacing for a term whose source gives no `space` flag.
    pub fn implicit_spacing(&self, locale: &Locale) -> Spacing {
        Spacing::implicit(self.is_spaceless(locale))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn keys<V>(map: &HashMap<Locale, V>) -> BTreeSet<String> {
            map.keys().map(Locale::to_string).collect()
        }
        f.debug_struct("Registry")
            .field("romanizers", &keys(&self.romanizers))
            .field("normalizers", &keys(&self.normalizers))
            .field("readers", &keys(&self.readers))
            .field("tags", &self.tags)
            .field("spaceless_languages", &self.spaceless_languages)
            .finish()
    }
}

/// Assembles a [`Registry`] piece by piece. Later registrations for the
/// same locale replace earlier ones.
#[derive(Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn romanizer(mut self, locale: Locale, romanizer: impl Romanizer + 'static) -> Self {
        self.registry.romanizers.insert(locale, Arc::new(romanizer));
        self
    }

    pub fn normalizer(mut self, locale: Locale, normalizer: impl Normalizer + 'static) -> Self {
        self.registry.normalizers.insert(locale, Arc::new(normalizer));
        self
    }

    pub fn reader(mut self, locale: Locale, reader: impl Reader + 'static) -> Self {
        self.registry.readers.insert(locale, Arc::new(reader));
        self
    }

    pub fn tag(mut self, locale: Locale, tag: impl Into<String>) -> Self {
        self.registry.tags.insert(locale, tag.into());
        self
    }

    pub fn spaceless_language(mut self, language: impl Into<String>) -> Self {
        self.registry.spaceless_languages.insert(language.into());
        self
    }

    pub(crate) fn boxed_romanizer(mut self, locale: Locale, romanizer: Box<dyn Romanizer>) -> Self {
        self.registry.romanizers.insert(locale, Arc::from(romanizer));
        self
    }

    pub(crate) fn boxed_reader(mut self, locale: Locale, reader: Box<dyn Reader>) -> Self {
        self.registry.readers.insert(locale, Arc::from(reader));
        self
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}
