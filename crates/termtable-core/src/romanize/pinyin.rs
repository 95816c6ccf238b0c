use crate::markup::{push_escaped, Markup};
use crate::registry::Romanizer;

const TONED: [(char, [char; 4]); 12] = [
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
    ('A', ['Ā', 'Á', 'Ǎ', 'À']),
    ('E', ['Ē', 'É', 'Ě', 'È']),
    ('I', ['Ī', 'Í', 'Ǐ', 'Ì']),
    ('O', ['Ō', 'Ó', 'Ǒ', 'Ò']),
    ('U', ['Ū', 'Ú', 'Ǔ', 'Ù']),
    ('Ü', ['Ǖ', 'Ǘ', 'Ǚ', 'Ǜ']),
];

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'ü' | 'Ü')
}

fn toned(c: char, tone: u8) -> char {
    TONED
        .iter()
        .find(|(base, _)| *base == c)
        .map(|(_, marks)| marks[tone as usize - 1])
        .unwrap_or(c)
}

/// Put the tone diacritic for `tone` (1-4) on the right vowel of a single
/// syllable. Tone 5 and 0 are neutral and leave the syllable bare.
///
/// The mark goes on `a` or `e` if present, on the `o` of `ou`, and
/// otherwise on the last vowel (`guì`, `liù`).
pub fn mark_tone(syllable: &str, tone: u8) -> String {
    let chars: Vec<char> = syllable.chars().collect();
    if !(1..=4).contains(&tone) {
        return syllable.to_string();
    }
    let lower: Vec<char> = chars.iter().map(|c| c.to_ascii_lowercase()).collect();
    let target = lower
        .iter()
        .position(|&c| c == 'a')
        .or_else(|| lower.iter().position(|&c| c == 'e'))
        .or_else(|| lower.windows(2).position(|w| w == ['o', 'u']))
        .or_else(|| chars.iter().rposition(|&c| is_vowel(c)));

    match target {
        Some(i) => chars
            .iter()
            .enumerate()
            .map(|(j, &c)| if i == j { toned(c, tone) } else { c })
            .collect(),
        None => syllable.to_string(),
    }
}

/// Convert numbered pinyin (`ji4suan4 ji1`) to diacritic pinyin
/// (`jìsuànjī`). `v` and `u:` in a numbered syllable stand for `ü`.
/// Syllables without a tone digit, including already-marked ones, pass
/// through unchanged. Whitespace is removed.
pub fn numbered_to_marked(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut syllable = String::new();
    for c in text.chars() {
        if c.is_alphabetic() || (c == ':' && syllable.ends_with(['u', 'U'])) {
            syllable.push(c);
            continue;
        }
        match c.to_digit(10).filter(|d| (0..=5).contains(d)) {
            Some(tone) if !syllable.is_empty() => {
                let spelled = spell_umlaut(&syllable);
                out.push_str(&mark_tone(&spelled, tone as u8));
            }
            _ => {
                out.push_str(&syllable);
                if !c.is_whitespace() {
                    push_escaped(&mut out, c.encode_utf8(&mut [0; 4]));
                }
            }
        }
        syllable.clear();
    }
    out.push_str(&syllable);
    out
}

fn spell_umlaut(syllable: &str) -> String {
    syllable
        .replace("u:", "ü")
        .replace("U:", "Ü")
        .replace('v', "ü")
        .replace('V', "Ü")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pinyin;

impl Romanizer for Pinyin {
    fn romanize(&self, text: &str) -> Markup {
        Markup::trusted(numbered_to_marked(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_placement() {
        assert_eq!(mark_tone("hao", 3), "hǎo");
        assert_eq!(mark_tone("xue", 2), "xué");
        assert_eq!(mark_tone("dou", 4), "dòu");
        assert_eq!(mark_tone("gui", 4), "guì");
        assert_eq!(mark_tone("liu", 4), "liù");
        assert_eq!(mark_tone("lü", 4), "lǜ");
        assert_eq!(mark_tone("de", 5), "de");
        assert_eq!(mark_tone("Ai", 4), "Ài");
    }

    #[test]
    fn numbered_syllables() {
        assert_eq!(numbered_to_marked("ji4 suan4 ji1"), "jìsuànjī");
        assert_eq!(numbered_to_marked("ji4suan4ji1"), "jìsuànjī");
        assert_eq!(numbered_to_marked("nv3 lu:4"), "nǚlǜ");
        assert_eq!(numbered_to_marked("ma5"), "ma");
    }

    #[test]
    fn marked_input_passes_through() {
        assert_eq!(numbered_to_marked("jì suàn jī"), "jìsuànjī");
        assert_eq!(numbered_to_marked("shòu sī"), "shòusī");
    }

    #[test]
    fn symbols_are_escaped() {
        assert_eq!(numbered_to_marked("a1 & b"), "ā&amp;b");
    }
}
