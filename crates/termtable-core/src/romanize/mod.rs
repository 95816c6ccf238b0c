//! Builtin romanizers, addressed by name from settings.

mod hangul;
mod jyutping;
mod kana;
mod pinyin;
mod zhuyin;

pub use hangul::{transliterate as hangul_transliterate, HangulRomanizer};
pub use jyutping::{superscript_tones, Jyutping};
pub use kana::{parse_kana_toml, Hepburn, KanaConfigError, KanaTable, DEFAULT_KANA_TOML};
pub use pinyin::{mark_tone, numbered_to_marked, Pinyin};
pub use zhuyin::{zhuyin_to_pinyin, Zhuyin};

use crate::markup::Markup;
use crate::registry::Romanizer;

pub const BUILTIN_ROMANIZERS: &[&str] = &["hepburn", "hangul", "pinyin", "zhuyin", "jyutping"];

/// Look up a builtin romanizer by settings name.
pub fn builtin(name: &str) -> Option<Box<dyn Romanizer>> {
    let romanizer: Box<dyn Romanizer> = match name {
        "hepburn" => Box::new(Hepburn::default()),
        "hangul" => Box::new(HangulRomanizer),
        "pinyin" => Box::new(Pinyin),
        "zhuyin" => Box::new(Zhuyin),
        "jyutping" => Box::new(Jyutping),
        _ => return None,
    };
    Some(romanizer)
}

/// Fallback for locales without a romanizer: spaces removed, text escaped.
pub fn identity(text: &str) -> Markup {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Markup::escape(&stripped)
}
