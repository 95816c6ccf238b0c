use crate::markup::{push_escaped, Markup};
use crate::registry::Romanizer;
use crate::unicode::Syllable;

const INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p",
    "h",
];

const MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

const FINALS: [&str; 28] = [
    "", "g", "kk", "gs", "n", "nj", "nh", "d", "l", "lg", "lm", "lb", "ls", "lt", "lp", "lh", "m",
    "b", "bs", "s", "ss", "ng", "j", "ch", "k", "t", "p", "h",
];

/// Letter-per-jamo transliteration of Hangul syllables. Sound changes
/// across syllable boundaries are not applied, so the mapping is reversible.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        match Syllable::decompose(c) {
            Some(s) => {
                out.push_str(INITIALS[s.initial as usize]);
                out.push_str(MEDIALS[s.medial as usize]);
                out.push_str(FINALS[s.final_ as usize]);
            }
            None => push_escaped(&mut out, c.encode_utf8(&mut [0; 4])),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HangulRomanizer;

impl Romanizer for HangulRomanizer {
    fn romanize(&self, text: &str) -> Markup {
        Markup::trusted(transliterate(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllables() {
        assert_eq!(transliterate("전산"), "jeonsan");
        assert_eq!(transliterate("전 산 기"), "jeonsangi");
        assert_eq!(transliterate("컴퓨터"), "keompyuteo");
        assert_eq!(transliterate("한국"), "hangug");
    }

    #[test]
    fn silent_initial_and_double_consonants() {
        assert_eq!(transliterate("이"), "i");
        assert_eq!(transliterate("쌀"), "ssal");
        assert_eq!(transliterate("닭"), "dalg");
    }

    #[test]
    fn non_hangul_passes_through() {
        assert_eq!(transliterate("電<"), "電&lt;");
    }
}
