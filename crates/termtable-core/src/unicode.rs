//! Character-level Unicode classification for CJK text.

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Precomposed Hangul syllables (U+AC00..U+D7A3). Conjoining jamo are not
/// syllables and return `false`.
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_BASE..=HANGUL_LAST).contains(&(c as u32))
}

/// Bopomofo block plus the tone marks used in Zhuyin readings.
pub fn is_zhuyin(c: char) -> bool {
    ('\u{3105}'..='\u{312F}').contains(&c) || matches!(c, 'ˊ' | 'ˇ' | 'ˋ' | '˙' | 'ˉ')
}

/// Convert a katakana string to hiragana.
/// ー, the small ヵ/ヶ and non-katakana characters pass through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F4}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// A Hangul syllable split into its (initial, medial, final) jamo indices.
///
/// Indices follow the Unicode composition order: 19 initials, 21 medials,
/// 28 finals (0 = no final).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: u32,
    pub medial: u32,
    pub final_: u32,
}

impl Syllable {
    pub fn decompose(c: char) -> Option<Self> {
        if !is_hangul_syllable(c) {
            return None;
        }
        let index = c as u32 - HANGUL_BASE;
        Some(Self {
            initial: index / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
            medial: (index % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT,
            final_: index % JONGSEONG_COUNT,
        })
    }

    pub fn compose(self) -> Option<char> {
        if self.initial >= 19 || self.medial >= JUNGSEONG_COUNT || self.final_ >= JONGSEONG_COUNT {
            return None;
        }
        char::from_u32(
            HANGUL_BASE
                + (self.initial * JUNGSEONG_COUNT + self.medial) * JONGSEONG_COUNT
                + self.final_,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("コンピュータ"), "こんぴゅーた");
        assert_eq!(katakana_to_hiragana("カタカナ"), "かたかな");
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana(""), "");
        assert_eq!(katakana_to_hiragana("abc"), "abc");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_kanji('漢'));
        assert!(!is_kanji('あ'));
        assert!(is_hangul_syllable('한'));
        assert!(!is_hangul_syllable('ㄱ'));
        assert!(is_zhuyin('ㄅ'));
        assert!(is_zhuyin('ˇ'));
        assert!(!is_zhuyin('a'));
    }

    #[test]
    fn test_syllable_roundtrip() {
        let s = Syllable::decompose('한').unwrap();
        assert_eq!(s, Syllable { initial: 18, medial: 0, final_: 4 });
        assert_eq!(s.compose(), Some('한'));
        assert_eq!(Syllable::decompose('a'), None);
    }
}
