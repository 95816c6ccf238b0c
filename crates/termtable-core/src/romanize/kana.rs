use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::markup::{push_escaped, Markup};
use crate::registry::Romanizer;
use crate::unicode::katakana_to_hiragana;

pub const DEFAULT_KANA_TOML: &str = include_str!("default_kana.toml");

const SOKUON: char = 'っ';
const CHOONPU: char = 'ー';

#[derive(Deserialize)]
struct KanaConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("ASCII in kana key: {0}")]
    AsciiKey(String),
    #[error("non-ASCII romaji for key: {0}")]
    NonAsciiValue(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, KanaConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(KanaConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() || key.bytes().any(|b| b.is_ascii()) {
            return Err(KanaConfigError::AsciiKey(key.clone()));
        }
        if value.is_empty() {
            return Err(KanaConfigError::EmptyValue(key.clone()));
        }
        if !value.is_ascii() {
            return Err(KanaConfigError::NonAsciiValue(key.clone()));
        }
    }

    Ok(config.mappings)
}

/// Kana → Hepburn lookup table with longest-match conversion.
#[derive(Debug, Clone)]
pub struct KanaTable {
    map: HashMap<String, String>,
    max_key_chars: usize,
}

impl KanaTable {
    pub fn from_toml(toml_str: &str) -> Result<Self, KanaConfigError> {
        let mappings = parse_kana_toml(toml_str)?;
        let max_key_chars = mappings.keys().map(|k| k.chars().count()).max().unwrap_or(1);
        Ok(Self {
            map: mappings.into_iter().collect(),
            max_key_chars,
        })
    }

    /// The table built from the embedded defaults.
    pub fn builtin() -> Arc<KanaTable> {
        static INSTANCE: OnceLock<Arc<KanaTable>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                Arc::new(KanaTable::from_toml(DEFAULT_KANA_TOML).expect("kana TOML must be valid"))
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Convert kana (either script) to romaji. Spaces are dropped; anything
    /// the table does not know is HTML-escaped and passed through.
    ///
    /// - っ doubles the next consonant (`っち` → `tchi`)
    /// - ー repeats the preceding vowel
    /// - ん before a vowel or `y` is written `n'`
    pub fn to_romaji(&self, text: &str) -> String {
        let chars: Vec<char> = katakana_to_hiragana(text)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let mut out = String::with_capacity(chars.len() * 2);
        let mut sokuon = false;
        let mut after_n = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == SOKUON {
                sokuon = true;
                i += 1;
                continue;
            }
            if c == CHOONPU {
                if let Some(v) = out.chars().last().filter(|v| is_vowel(*v)) {
                    out.push(v);
                }
                after_n = false;
                i += 1;
                continue;
            }

            match self.longest_match(&chars[i..]) {
                Some((len, romaji)) => {
                    if after_n && romaji.starts_with(|r: char| is_vowel(r) || r == 'y') {
                        out.push('\'');
                    }
                    if sokuon {
                        push_geminate(&mut out, romaji);
                    }
                    out.push_str(romaji);
                    after_n = chars[i] == 'ん';
                    i += len;
                }
                None => {
                    push_escaped(&mut out, c.encode_utf8(&mut [0; 4]));
                    after_n = false;
                    i += 1;
                }
            }
            sokuon = false;
        }
        out
    }

    fn longest_match(&self, rest: &[char]) -> Option<(usize, &str)> {
        let mut key = String::new();
        let mut best = None;
        for (n, c) in rest.iter().take(self.max_key_chars).enumerate() {
            key.push(*c);
            if let Some(romaji) = self.map.get(&key) {
                best = Some((n + 1, romaji.as_str()));
            }
        }
        best
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn push_geminate(out: &mut String, romaji: &str) {
    if romaji.starts_with("ch") {
        out.push('t');
    } else if let Some(first) = romaji.chars().next().filter(|c| c.is_ascii_alphabetic() && !is_vowel(*c)) {
        out.push(first);
    }
}

/// Hepburn romanizer over a kana table.
#[derive(Debug, Clone)]
pub struct Hepburn {
    table: Arc<KanaTable>,
}

impl Hepburn {
    pub fn new(table: Arc<KanaTable>) -> Self {
        Self { table }
    }
}

impl Default for Hepburn {
    fn default() -> Self {
        Self::new(KanaTable::builtin())
    }
}

impl Romanizer for Hepburn {
    fn romanize(&self, text: &str) -> Markup {
        Markup::trusted(self.table.to_romaji(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romaji(s: &str) -> String {
        KanaTable::builtin().to_romaji(s)
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_kana_toml(DEFAULT_KANA_TOML).unwrap();
        assert!(map.len() > 140, "expected 140+ mappings, got {}", map.len());
        assert_eq!(map["し"], "shi");
    }

    #[test]
    fn basic_syllables() {
        assert_eq!(romaji("にほん"), "nihon");
        assert_eq!(romaji("に ほん"), "nihon");
        assert_eq!(romaji("けいさんき"), "keisanki");
    }

    #[test]
    fn yoon_prefers_longest_match() {
        assert_eq!(romaji("とうきょう"), "toukyou");
        assert_eq!(romaji("じょうほう"), "jouhou");
    }

    #[test]
    fn sokuon_doubles_consonant() {
        assert_eq!(romaji("がっこう"), "gakkou");
        assert_eq!(romaji("まっちゃ"), "matcha");
        assert_eq!(romaji("あっ"), "a");
    }

    #[test]
    fn katakana_and_long_vowel() {
        assert_eq!(romaji("コンピューター"), "konpyuutaa");
        assert_eq!(romaji("ソフトウェア"), "sofutowea");
    }

    #[test]
    fn syllabic_n_apostrophe() {
        assert_eq!(romaji("きんえん"), "kin'en");
        assert_eq!(romaji("ほんや"), "hon'ya");
        assert_eq!(romaji("さんぽ"), "sanpo");
    }

    #[test]
    fn unknown_characters_are_escaped() {
        assert_eq!(romaji("日<"), "日&lt;");
    }

    #[test]
    fn error_ascii_key() {
        let err = parse_kana_toml("[mappings]\na = \"a\"\n").unwrap_err();
        assert!(matches!(err, KanaConfigError::AsciiKey(_)));
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_kana_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, KanaConfigError::Empty));
    }

    #[test]
    fn error_non_ascii_value() {
        let err = parse_kana_toml("[mappings]\n\"か\" = \"か\"\n").unwrap_err();
        assert!(matches!(err, KanaConfigError::NonAsciiValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_kana_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, KanaConfigError::Parse(_)));
    }
}
