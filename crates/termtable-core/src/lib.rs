//! Cross-language terminology tables: the data model, reading resolution
//! and the builtin romanizers and readers it is wired with.

pub mod charmap;
pub mod lint;
pub mod locale;
pub mod markup;
pub mod readers;
pub mod registry;
pub mod romanize;
pub mod settings;
pub mod source;
pub mod spacing;
pub mod table;
pub mod term;
pub mod translation;
pub mod unicode;
pub mod word;

pub use charmap::{CharMap, CharMapError, CharMaps};
pub use locale::{Locale, LocaleError};
pub use markup::Markup;
pub use registry::{Normalizer, Reader, Registry, RegistryBuilder, Romanizer};
pub use settings::{Settings, SettingsError};
pub use source::{load_table, parse_table, SourceError};
pub use spacing::Spacing;
pub use table::{Table, TermsTable};
pub use term::{EasternTerm, ReadAs, Segment, Term, TermKind};
pub use translation::{CognateGroup, Translation};
pub use word::{TermLookupError, Word};
