use crate::markup::{push_escaped, Markup};
use crate::registry::Romanizer;

use super::pinyin::mark_tone;

const NEUTRAL: char = '˙';

fn initial(c: char) -> Option<&'static str> {
    Some(match c {
        'ㄅ' => "b",
        'ㄆ' => "p",
        'ㄇ' => "m",
        'ㄈ' => "f",
        'ㄉ' => "d",
        'ㄊ' => "t",
        'ㄋ' => "n",
        'ㄌ' => "l",
        'ㄍ' => "g",
        'ㄎ' => "k",
        'ㄏ' => "h",
        'ㄐ' => "j",
        'ㄑ' => "q",
        'ㄒ' => "x",
        'ㄓ' => "zh",
        'ㄔ' => "ch",
        'ㄕ' => "sh",
        'ㄖ' => "r",
        'ㄗ' => "z",
        'ㄘ' => "c",
        'ㄙ' => "s",
        _ => return None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Medial {
    I,
    U,
    Yu,
}

fn medial(c: char) -> Option<Medial> {
    match c {
        'ㄧ' => Some(Medial::I),
        'ㄨ' => Some(Medial::U),
        'ㄩ' => Some(Medial::Yu),
        _ => None,
    }
}

fn rime(c: char) -> Option<&'static str> {
    Some(match c {
        'ㄚ' => "a",
        'ㄛ' => "o",
        'ㄜ' | 'ㄝ' => "e",
        'ㄞ' => "ai",
        'ㄟ' => "ei",
        'ㄠ' => "ao",
        'ㄡ' => "ou",
        'ㄢ' => "an",
        'ㄣ' => "en",
        'ㄤ' => "ang",
        'ㄥ' => "eng",
        'ㄦ' => "er",
        _ => return None,
    })
}

fn tone(c: char) -> Option<u8> {
    match c {
        'ˉ' => Some(1),
        'ˊ' => Some(2),
        'ˇ' => Some(3),
        'ˋ' => Some(4),
        NEUTRAL => Some(5),
        _ => None,
    }
}

/// Pinyin final for a medial + rime pair, spelled as it is after an initial.
fn final_after_initial(medial: Option<Medial>, rime: &str, initial: &str) -> String {
    match medial {
        None if rime.is_empty() => {
            // ㄓ ㄔ ㄕ ㄖ ㄗ ㄘ ㄙ carry an unwritten vowel
            if matches!(initial, "zh" | "ch" | "sh" | "r" | "z" | "c" | "s") {
                "i".to_string()
            } else {
                String::new()
            }
        }
        None => rime.to_string(),
        Some(Medial::I) => match rime {
            "ou" => "iu".to_string(),
            "en" => "in".to_string(),
            "eng" => "ing".to_string(),
            _ => format!("i{rime}"),
        },
        Some(Medial::U) => match rime {
            "o" => "uo".to_string(),
            "ei" => "ui".to_string(),
            "en" => "un".to_string(),
            "eng" => "ong".to_string(),
            _ => format!("u{rime}"),
        },
        Some(Medial::Yu) => match rime {
            "en" => "ün".to_string(),
            "eng" => "iong".to_string(),
            _ => format!("ü{rime}"),
        },
    }
}

/// Spelling of a final with no initial (`yi`, `wu`, `yu`, `wen`, `yong`).
fn zero_initial(medial: Option<Medial>, fin: &str) -> String {
    match medial {
        None => fin.to_string(),
        Some(Medial::I) => match fin {
            "i" | "in" | "ing" => format!("y{fin}"),
            "iu" => "you".to_string(),
            _ => format!("y{}", &fin[1..]),
        },
        Some(Medial::U) => match fin {
            "u" => "wu".to_string(),
            "ui" => "wei".to_string(),
            "un" => "wen".to_string(),
            "ong" => "weng".to_string(),
            _ => format!("w{}", &fin[1..]),
        },
        Some(Medial::Yu) => match fin {
            "iong" => "yong".to_string(),
            _ => format!("yu{}", &fin['ü'.len_utf8()..]),
        },
    }
}

#[derive(Debug, Default)]
struct Syllable {
    initial: Option<&'static str>,
    medial: Option<Medial>,
    rime: Option<&'static str>,
    tone: Option<u8>,
}

impl Syllable {
    fn is_empty(&self) -> bool {
        self.initial.is_none() && self.medial.is_none() && self.rime.is_none()
    }

    fn to_pinyin(&self) -> String {
        let rime = self.rime.unwrap_or("");
        let spelled = match self.initial {
            Some(init) => {
                let mut fin = final_after_initial(self.medial, rime, init);
                if matches!(init, "j" | "q" | "x") {
                    fin = fin.replace('ü', "u");
                }
                format!("{init}{fin}")
            }
            None => zero_initial(self.medial, &final_after_initial(self.medial, rime, "")),
        };
        mark_tone(&spelled, self.tone.unwrap_or(1))
    }
}

/// Convert Zhuyin (Bopomofo) to diacritic pinyin. A syllable ends at its
/// tone mark or where the next component could not continue it; the
/// first-tone mark is optional and `˙` may precede or follow the syllable.
/// Whitespace is removed; anything else passes through escaped.
pub fn zhuyin_to_pinyin(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut syl = Syllable::default();

    let flush = |syl: &mut Syllable, out: &mut String| {
        if !syl.is_empty() {
            out.push_str(&syl.to_pinyin());
        }
        *syl = Syllable::default();
    };

    for c in text.chars() {
        if let Some(t) = tone(c) {
            if c == NEUTRAL && syl.is_empty() {
                syl.tone = Some(t);
                continue;
            }
            syl.tone = Some(t);
            flush(&mut syl, &mut out);
        } else if let Some(init) = initial(c) {
            if !syl.is_empty() {
                flush(&mut syl, &mut out);
            }
            syl.initial = Some(init);
        } else if let Some(m) = medial(c) {
            if syl.medial.is_some() || syl.rime.is_some() {
                flush(&mut syl, &mut out);
            }
            syl.medial = Some(m);
        } else if let Some(r) = rime(c) {
            if syl.rime.is_some() {
                flush(&mut syl, &mut out);
            }
            syl.rime = Some(r);
        } else {
            flush(&mut syl, &mut out);
            if !c.is_whitespace() {
                push_escaped(&mut out, c.encode_utf8(&mut [0; 4]));
            }
        }
    }
    flush(&mut syl, &mut out);
    out
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Zhuyin;

impl Romanizer for Zhuyin {
    fn romanize(&self, text: &str) -> Markup {
        Markup::trusted(zhuyin_to_pinyin(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllables_with_initials() {
        assert_eq!(zhuyin_to_pinyin("ㄐㄧˋ ㄙㄨㄢˋ ㄐㄧ"), "jìsuànjī");
        assert_eq!(zhuyin_to_pinyin("ㄌㄨㄣˋ"), "lùn");
        assert_eq!(zhuyin_to_pinyin("ㄕˋ"), "shì");
        assert_eq!(zhuyin_to_pinyin("ㄒㄩㄝˊ"), "xué");
        assert_eq!(zhuyin_to_pinyin("ㄌㄩˋ"), "lǜ");
        assert_eq!(zhuyin_to_pinyin("ㄍㄨㄟˋ"), "guì");
        assert_eq!(zhuyin_to_pinyin("ㄉㄨㄥ"), "dōng");
    }

    #[test]
    fn zero_initial_spellings() {
        assert_eq!(zhuyin_to_pinyin("ㄧ"), "yī");
        assert_eq!(zhuyin_to_pinyin("ㄧㄡˇ"), "yǒu");
        assert_eq!(zhuyin_to_pinyin("ㄨˇ"), "wǔ");
        assert_eq!(zhuyin_to_pinyin("ㄨㄣˊ"), "wén");
        assert_eq!(zhuyin_to_pinyin("ㄨㄥ"), "wēng");
        assert_eq!(zhuyin_to_pinyin("ㄩㄢˊ"), "yuán");
        assert_eq!(zhuyin_to_pinyin("ㄩㄥˇ"), "yǒng");
        assert_eq!(zhuyin_to_pinyin("ㄢ"), "ān");
    }

    #[test]
    fn neutral_tone_either_side() {
        assert_eq!(zhuyin_to_pinyin("˙ㄉㄜ"), "de");
        assert_eq!(zhuyin_to_pinyin("ㄉㄜ˙"), "de");
    }

    #[test]
    fn unmarked_run_splits_on_next_initial() {
        assert_eq!(zhuyin_to_pinyin("ㄕㄡˋㄙ"), "shòusī");
    }
}
