use super::*;
use crate::charmap::CharMaps;
use crate::settings::{parse_settings_toml, Settings, SettingsError};

fn locale(s: &str) -> Locale {
    Locale::parse(s).unwrap()
}

#[test]
fn unregistered_locale_uses_identity() {
    let registry = Registry::builder().build();
    assert_eq!(registry.romanize(&locale("en"), "Ada Lovelace").as_str(), "AdaLovelace");
    assert!(registry.reader(&locale("en")).is_none());
    assert!(registry.normalizer(&locale("en")).is_none());
}

#[test]
fn closures_are_capabilities() {
    let registry = Registry::builder()
        .romanizer(locale("xx"), |t: &str| Markup::trusted(t.to_uppercase()))
        .normalizer(locale("xx"), |t: &str| t.replace('b', "B"))
        .reader(locale("xx"), |raw: &str, _n: &str, _p: &[String]| -> Vec<Segment> {
            raw.chars().map(|c| Segment::new(c, "?")).collect()
        })
        .build();
    let xx = locale("xx");
    assert_eq!(registry.romanize(&xx, "abc").as_str(), "ABC");
    assert_eq!(registry.normalizer(&xx).unwrap().normalize("abc"), "aBc");
    let segments = registry.reader(&xx).unwrap().read("ab", "aB", &[]);
    assert_eq!(segments, vec![Segment::new('a', "?"), Segment::new('b', "?")]);
}

#[test]
fn language_tag_default() {
    let registry = Registry::builder().tag(locale("ja"), "ja-Latn-hepburn").build();
    assert_eq!(registry.language_tag(&locale("ja")), "ja-Latn-hepburn");
    assert_eq!(registry.language_tag(&locale("fr_CA")), "fr-Latn");
}

#[test]
fn spacing_convention_by_language() {
    let registry = Registry::builder().spaceless_language("ja").spaceless_language("zh").build();
    assert!(registry.is_spaceless(&locale("zh_TW")));
    assert!(!registry.is_spaceless(&locale("ko")));
    assert_eq!(registry.implicit_spacing(&locale("ja")), Spacing::ImplicitNoSpace);
    assert_eq!(registry.implicit_spacing(&locale("en")), Spacing::ImplicitSpace);
}

#[test]
fn builtin_wiring() {
    let registry = Registry::builtin();
    for l in ["ja", "ko", "zh_CN", "zh_HK", "zh_TW"] {
        let l = locale(l);
        assert!(registry.romanizer(&l).is_some(), "{l} romanizer");
        assert!(registry.reader(&l).is_some(), "{l} reader");
    }
    assert!(registry.normalizer(&locale("ja")).is_some());
    assert!(registry.normalizer(&locale("ko")).is_none());
    assert_eq!(registry.romanize(&locale("zh_HK"), "sau6 si1").as_str(), "sau<sup>6</sup>si<sup>1</sup>");
    assert_eq!(registry.language_tag(&locale("zh_HK")), "yue-HK-Latn-jyutping");
}

#[test]
fn from_settings_rejects_missing_charmap() {
    let settings = parse_settings_toml("[locales.ja]\nnormalizer = \"hk2t\"\n").unwrap();
    let err = Registry::from_settings(&settings, &CharMaps::builtin()).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "locales.ja.normalizer"));
}

#[test]
fn from_settings_skips_reader_without_table() {
    let settings = parse_settings_toml("[locales.vi]\nreader = \"dictionary\"\n").unwrap();
    let registry = Registry::from_settings(&settings, &CharMaps::builtin()).unwrap();
    assert!(registry.reader(&locale("vi")).is_none());
}

#[test]
fn debug_lists_locales() {
    let registry = Registry::from_settings(Settings::builtin(), &CharMaps::builtin()).unwrap();
    let dbg = format!("{registry:?}");
    assert!(dbg.contains("zh_TW"));
    assert!(dbg.contains("spaceless_languages"));
}
