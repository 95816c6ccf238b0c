//! Reading resolution for eastern terms.

use std::iter::Zip;
use std::str::{Chars, SplitWhitespace};
use std::vec;

use tracing::{debug, debug_span};

use super::{Segment, Term};
use crate::locale::Locale;
use crate::table::Table;
use crate::translation::Translation;

/// Borrowed view of a term known to carry a reading.
#[derive(Debug, Clone, Copy)]
pub struct EasternTerm<'a> {
    term: &'a Term,
    read: &'a str,
}

/// Ordered segments covering a term. Paired readings yield one segment per
/// character, stopping at whichever of characters or reading tokens runs
/// out first.
#[derive(Debug)]
pub enum ReadAs<'a> {
    Paired(Zip<Chars<'a>, SplitWhitespace<'a>>),
    Generated(vec::IntoIter<Segment>),
}

impl Iterator for ReadAs<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        match self {
            ReadAs::Paired(pairs) => pairs.next().map(|(c, r)| Segment::new(c, r)),
            ReadAs::Generated(segments) => segments.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ReadAs::Paired(pairs) => pairs.size_hint(),
            ReadAs::Generated(segments) => segments.size_hint(),
        }
    }
}

impl<'a> EasternTerm<'a> {
    pub(super) fn new(term: &'a Term, read: &'a str) -> Self {
        Self { term, read }
    }

    pub fn term(&self) -> &'a Term {
        self.term
    }

    pub fn read(&self) -> &'a str {
        self.read
    }

    /// Segments of this term read in `to`, where the term itself is written
    /// in `from`.
    ///
    /// The first of these that applies wins:
    ///
    /// 1. `from == to`: the term's own reading.
    /// 2. The eastern term with the same correspond key in the `to` word
    ///    sharing `word_id` within `translation`.
    /// 3. The eastern term with the same normalized text anywhere in the
    ///    `to` column of `table`.
    /// 4. The reader registered for `to`, given `previous_terms` as context.
    ///
    /// With none of them, the term's own reading is used as in step 1.
    pub fn read_as(
        &self,
        from: &Locale,
        to: &Locale,
        previous_terms: &[&Term],
        word_id: &str,
        translation: &'a Translation,
        table: &'a Table,
    ) -> ReadAs<'a> {
        let _span = debug_span!("read_as", term = self.term.text(), %from, %to).entered();
        match self.resolve(from, to, previous_terms, word_id, translation, table) {
            Some(segments) => segments,
            None => {
                debug!("no reader, using own reading");
                self.read_identity()
            }
        }
    }

    fn resolve(
        &self,
        from: &Locale,
        to: &Locale,
        previous_terms: &[&Term],
        word_id: &str,
        translation: &'a Translation,
        table: &'a Table,
    ) -> Option<ReadAs<'a>> {
        if from == to {
            return Some(self.read_identity());
        }

        let cognate = translation
            .words(to)
            .iter()
            .filter(|w| w.id() == word_id)
            .flat_map(|w| w.terms())
            .filter(|t| t.correspond() == self.term.correspond())
            .find_map(Term::as_eastern);
        if let Some(other) = cognate {
            debug!(correspond = self.term.correspond(), "same-word cross-reference");
            return Some(self.pair_with(other.read));
        }

        let registry = table.registry();
        let key = self.term.normalize(from, registry);
        let known = table
            .terms_table()
            .get(to)
            .and_then(|terms| terms.get(&key))
            .and_then(Term::as_eastern);
        if let Some(other) = known {
            debug!(%key, "global cross-reference");
            return Some(self.pair_with(other.read));
        }

        let reader = registry.reader(to)?;
        let previous: Vec<String> = previous_terms
            .iter()
            .map(|t| t.normalize(from, registry))
            .collect();
        debug!(%key, previous = previous.len(), "generated reading");
        let segments = reader.read(self.term.text(), &key, &previous);
        Some(ReadAs::Generated(segments.into_iter()))
    }

    fn read_identity(&self) -> ReadAs<'a> {
        self.pair_with(self.read)
    }

    fn pair_with(&self, read: &'a str) -> ReadAs<'a> {
        ReadAs::Paired(self.term.text().chars().zip(read.split_whitespace()))
    }
}
