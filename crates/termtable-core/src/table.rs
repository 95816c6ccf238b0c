//! The whole document and its cross-row indices.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use tracing::{debug, debug_span};

use crate::locale::Locale;
use crate::registry::Registry;
use crate::term::Term;
use crate::translation::Translation;

/// Normalized term text → the last term declared with it, per locale.
pub type TermsTable = HashMap<Locale, HashMap<String, Term>>;

#[derive(Debug)]
pub struct Table {
    translations: Vec<Translation>,
    registry: Arc<Registry>,
    supported_locales: OnceLock<BTreeSet<Locale>>,
    terms_table: OnceLock<TermsTable>,
}

impl Table {
    pub fn new(translations: Vec<Translation>, registry: Arc<Registry>) -> Self {
        Self {
            translations,
            registry,
            supported_locales: OnceLock::new(),
            terms_table: OnceLock::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn shared_registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Translation> {
        self.translations.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Translation> {
        self.translations.get(index)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Every locale used by any row.
    pub fn supported_locales(&self) -> &BTreeSet<Locale> {
        self.supported_locales.get_or_init(|| {
            self.translations
                .iter()
                .flat_map(Translation::locales)
                .cloned()
                .collect()
        })
    }

    /// Global term index, built in document order so a later declaration
    /// of the same normalized text replaces an earlier one.
    pub fn terms_table(&self) -> &TermsTable {
        self.terms_table.get_or_init(|| {
            let _span = debug_span!("terms_table", rows = self.translations.len()).entered();
            let mut table = TermsTable::new();
            for translation in &self.translations {
                for (locale, words) in translation.iter() {
                    let terms = table.entry(locale.clone()).or_default();
                    for term in words.iter().flat_map(|w| w.terms()) {
                        terms.insert(term.normalize(locale, &self.registry), term.clone());
                    }
                }
            }
            debug!(
                locales = table.len(),
                terms = table.values().map(HashMap::len).sum::<usize>(),
                "indexed terms"
            );
            table
        })
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Translation;
    type IntoIter = std::slice::Iter<'a, Translation>;

    fn into_iter(self) -> Self::IntoIter {
        self.translations.iter()
    }
}
