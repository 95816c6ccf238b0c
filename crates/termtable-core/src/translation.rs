//! One row of the document: the same concepts across locales.

use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::debug_span;

use crate::locale::Locale;
use crate::word::Word;

/// Locales sharing one word id, each pointing at the index of that word in
/// the locale's list.
pub type CognateGroup = IndexMap<Locale, usize>;

#[derive(Debug, Default)]
pub struct Translation {
    words: IndexMap<Locale, Vec<Word>>,
    max_words: OnceLock<usize>,
    cognate_groups: OnceLock<IndexMap<String, CognateGroup>>,
    correspondences: OnceLock<Vec<String>>,
}

impl Translation {
    pub fn new(words: IndexMap<Locale, Vec<Word>>) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }

    /// Words in `locale`, empty when the row has none.
    pub fn words(&self, locale: &Locale) -> &[Word] {
        self.words.get(locale).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.words.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Locale, Vec<Word>> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word list; 0 for an empty row.
    pub fn max_words(&self) -> usize {
        *self
            .max_words
            .get_or_init(|| self.words.values().map(Vec::len).max().unwrap_or(0))
    }

    /// Word ids present in at least two locales, in first-seen order.
    /// A locale listing the same id twice keeps its last word.
    pub fn cognate_groups(&self) -> &IndexMap<String, CognateGroup> {
        self.cognate_groups.get_or_init(|| {
            let mut groups: IndexMap<String, CognateGroup> = IndexMap::new();
            for (locale, words) in &self.words {
                for (i, word) in words.iter().enumerate() {
                    groups
                        .entry(word.id().to_string())
                        .or_default()
                        .insert(locale.clone(), i);
                }
            }
            groups.retain(|_, group| group.len() >= 2);
            groups
        })
    }

    /// Words of the cognate group `id`, by locale.
    pub fn cognates(&self, id: &str) -> impl Iterator<Item = (&Locale, &Word)> {
        self.cognate_groups()
            .get(id)
            .into_iter()
            .flatten()
            .map(|(locale, &i)| (locale, &self.words(locale)[i]))
    }

    /// Correspond keys used more than once in this row, most used first.
    /// Ties keep first-seen order.
    pub fn correspondences(&self) -> &[String] {
        self.correspondences.get_or_init(|| {
            let _span = debug_span!("correspondences").entered();
            let mut counts: IndexMap<&str, usize> = IndexMap::new();
            for term in self.words.values().flatten().flat_map(Word::terms) {
                *counts.entry(term.correspond()).or_default() += 1;
            }
            // stable, so equal counts stay in insertion order
            counts.sort_by(|_, a, _, b| b.cmp(a));
            counts
                .into_iter()
                .filter(|&(_, n)| n > 1)
                .map(|(key, _)| key.to_string())
                .collect()
        })
    }
}

impl FromIterator<(Locale, Vec<Word>)> for Translation {
    fn from_iter<I: IntoIterator<Item = (Locale, Vec<Word>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
