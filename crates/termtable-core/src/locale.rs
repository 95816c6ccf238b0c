//! Locale identifiers (`ja`, `zh_CN`, `zh-Hant-TW`).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use unic_langid::LanguageIdentifier;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("invalid locale identifier: {0:?}")]
    Invalid(String),
}

/// A parsed locale: language, optional script, optional territory and any
/// variants.
///
/// Hyphen and underscore separators are both accepted on input; `Display`
/// always renders underscores (`zh_CN`) and `tag()` hyphens (`zh-CN`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    script: Option<String>,
    territory: Option<String>,
    variants: Vec<String>,
}

impl Locale {
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        let invalid = || LocaleError::Invalid(s.to_string());
        let id: LanguageIdentifier = s.parse().map_err(|_| invalid())?;
        if id.language.is_empty() {
            return Err(invalid());
        }
        Ok(Locale {
            language: id.language.as_str().to_string(),
            script: id.script.map(|script| script.as_str().to_string()),
            territory: id.region.map(|region| region.as_str().to_string()),
            variants: id.variants().map(|v| v.as_str().to_string()).collect(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    /// BCP 47 form (`zh-CN`).
    pub fn tag(&self) -> String {
        self.join('-')
    }

    fn join(&self, sep: char) -> String {
        let mut out = self.language.clone();
        let subtags = self.script.iter().chain(&self.territory).chain(&self.variants);
        for part in subtags {
            out.push(sep);
            out.push_str(part);
        }
        out
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join('_'))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_only() {
        let l = Locale::parse("ja").unwrap();
        assert_eq!(l.language(), "ja");
        assert_eq!(l.territory(), None);
        assert_eq!(l.to_string(), "ja");
    }

    #[test]
    fn parse_hyphen_and_underscore_agree() {
        assert_eq!(Locale::parse("zh-CN").unwrap(), Locale::parse("zh_CN").unwrap());
        assert_eq!(Locale::parse("zh-cn").unwrap().to_string(), "zh_CN");
        assert_eq!(Locale::parse("zh_CN").unwrap().tag(), "zh-CN");
    }

    #[test]
    fn parse_script_and_territory() {
        let l = Locale::parse("zh-hant-tw").unwrap();
        assert_eq!(l.script(), Some("Hant"));
        assert_eq!(l.territory(), Some("TW"));
        assert_eq!(l.to_string(), "zh_Hant_TW");
        assert_eq!(Locale::parse("es_419").unwrap().territory(), Some("419"));
    }

    #[test]
    fn parse_variants() {
        let l = Locale::parse("ca-ES-valencia").unwrap();
        assert_eq!(l.language(), "ca");
        assert_eq!(l.territory(), Some("ES"));
        assert_eq!(l.variants().collect::<Vec<_>>(), ["valencia"]);
        assert_eq!(l.to_string(), "ca_ES_valencia");
        assert_eq!(l.tag(), "ca-ES-valencia");

        for id in ["en_US_POSIX", "de_DE_1996", "sl_IT_nedis"] {
            assert!(Locale::parse(id).is_ok(), "{id}");
        }
        assert_ne!(Locale::parse("de_DE_1996").unwrap(), Locale::parse("de_DE").unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("toolonglanguage").is_err());
        assert!(Locale::parse("zh_CN_TW").is_err());
        assert!(Locale::parse("ja-").is_err());
        assert_eq!(
            Locale::parse("x1").unwrap_err(),
            LocaleError::Invalid("x1".to_string())
        );
    }
}
