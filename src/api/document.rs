use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use termtable_core::{load_table, parse_table, Locale, Registry, Table};
use tracing::info;

use super::TermTableError;

/// A loaded terminology table and where it came from.
#[derive(Debug)]
pub struct Document {
    table: Table,
    source: Option<PathBuf>,
}

impl Document {
    pub fn load(path: impl AsRef<Path>, registry: Arc<Registry>) -> Result<Self, TermTableError> {
        let path = path.as_ref();
        let table = load_table(path, registry)?;
        info!(path = %path.display(), rows = table.len(), "loaded document");
        Ok(Self {
            table,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn parse(
        text: &str,
        registry: Arc<Registry>,
        source: Option<PathBuf>,
    ) -> Result<Self, TermTableError> {
        Ok(Self {
            table: parse_table(text, registry)?,
            source,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Column order for a reader of `display`: English first, then the
    /// display language, then by language code. Within a language the
    /// display locale leads, then locales sharing its territory.
    pub fn ordered_locales(&self, display: &Locale) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.table.supported_locales().iter().cloned().collect();
        locales.sort_by_cached_key(|locale| {
            (
                locale.language() != "en",
                locale.language() != display.language(),
                locale.language().to_string(),
                locale != display,
                Reverse(locale.territory().is_some() && locale.territory() == display.territory()),
                locale.territory().map(str::to_string),
                locale.to_string(),
            )
        });
        locales
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn registry() -> Arc<Registry> {
        Arc::new(Registry::builtin())
    }

    fn locale(s: &str) -> Locale {
        Locale::parse(s).unwrap()
    }

    fn names(locales: &[Locale]) -> Vec<String> {
        locales.iter().map(Locale::to_string).collect()
    }

    const COLUMNS: &str = r#"
- zh_TW: {}
  ko: {}
  zh_HK: {}
  ja: {}
  en: {}
  zh_CN: {}
"#;

    #[test]
    fn english_then_display_language() {
        let doc = Document::parse(COLUMNS, registry(), None).unwrap();
        assert_eq!(
            names(&doc.ordered_locales(&locale("ko"))),
            ["en", "ko", "ja", "zh_CN", "zh_HK", "zh_TW"]
        );
    }

    #[test]
    fn display_locale_leads_its_language() {
        let doc = Document::parse(COLUMNS, registry(), None).unwrap();
        assert_eq!(
            names(&doc.ordered_locales(&locale("zh_TW"))),
            ["en", "zh_TW", "zh_CN", "zh_HK", "ja", "ko"]
        );
    }

    #[test]
    fn same_territory_before_other_territories() {
        let doc = Document::parse("- zh_CN: {}\n  zh_Hant_TW: {}\n  zh_TW: {}\n  zh_HK: {}\n", registry(), None)
            .unwrap();
        assert_eq!(
            names(&doc.ordered_locales(&locale("zh_TW"))),
            ["zh_TW", "zh_Hant_TW", "zh_CN", "zh_HK"]
        );
    }

    #[test]
    fn load_keeps_source_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- en:\n    w:\n      - term: tea").unwrap();
        let doc = Document::load(file.path(), registry()).unwrap();
        assert_eq!(doc.source(), Some(file.path()));
        assert_eq!(doc.table().len(), 1);
    }

    #[test]
    fn parse_error_is_wrapped() {
        let err = Document::parse("ja: {}", registry(), None).unwrap_err();
        assert!(matches!(err, TermTableError::Source(_)));
        assert_eq!(err.to_string(), "$: expected a sequence of rows");
    }
}
