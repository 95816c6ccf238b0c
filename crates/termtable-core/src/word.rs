//! Words: ordered terms naming one concept in one language.

use crate::locale::Locale;
use crate::markup::Markup;
use crate::registry::Registry;
use crate::term::Term;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TermLookupError {
    #[error("term {term:?} is not part of word {word:?}")]
    NotFound { term: String, word: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    id: String,
    locale: Locale,
    terms: Vec<Term>,
}

impl Word {
    pub fn new(id: impl Into<String>, locale: Locale, terms: Vec<Term>) -> Self {
        Self {
            id: id.into(),
            locale,
            terms,
        }
    }

    /// Cognate key shared with the same concept in other locales.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Romanizations of all terms joined, with one space before every term
    /// whose spacing is visible. Never starts or ends with whitespace.
    pub fn romanize(&self, registry: &Registry) -> Markup {
        let mut out = String::new();
        for term in &self.terms {
            if term.space().has_space() {
                out.push(' ');
            }
            out.push_str(term.romanize(&self.locale, registry).as_str());
        }
        Markup::trusted(out.trim())
    }

    /// Terms before `term` in its spacing group: everything since the last
    /// term with visible spacing, counting `term` itself as a boundary.
    pub fn get_previous_terms(&self, term: &Term) -> Result<Vec<&Term>, TermLookupError> {
        let mut previous = Vec::new();
        for t in &self.terms {
            if t.space().has_space() {
                previous.clear();
            }
            if t == term {
                return Ok(previous);
            }
            previous.push(t);
        }
        Err(TermLookupError::NotFound {
            term: term.text().to_string(),
            word: self.id.clone(),
        })
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
