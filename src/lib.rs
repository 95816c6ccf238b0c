//! Cross-language terminology tables.
//!
//! Re-exports the data model of [`termtable_core`] and adds document
//! loading and the row layout consumed by renderers.

pub mod api;
mod trace_init;

pub use termtable_core::{
    charmap, lint, locale, markup, readers, registry, romanize, settings, source, spacing, table,
    term, translation, unicode, word,
};
pub use termtable_core::{
    CharMap, CharMapError, CharMaps, EasternTerm, Locale, LocaleError, Markup, Registry, Segment,
    Settings, SettingsError, SourceError, Spacing, Table, Term, TermKind, TermLookupError,
    Translation, Word,
};
pub use trace_init::{init_tracing, TraceGuard};
