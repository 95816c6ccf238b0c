//! Builtin generative readers backed by per-character reading tables.

use crate::charmap::CharMap;
use crate::registry::Reader;
use crate::term::Segment;
use crate::unicode::Syllable;

pub const BUILTIN_READERS: &[&str] = &["dictionary", "hanja"];

/// Look up a builtin reader by settings name over a reading table.
pub fn builtin(name: &str, readings: CharMap) -> Option<Box<dyn Reader>> {
    let reader: Box<dyn Reader> = match name {
        "dictionary" => Box::new(DictionaryReader::new(readings)),
        "hanja" => Box::new(HanjaReader::new(readings)),
        _ => return None,
    };
    Some(reader)
}

/// Reads each character on its own: by its normalized form, then its raw
/// form, else the character stands for itself.
#[derive(Debug, Clone)]
pub struct DictionaryReader {
    readings: CharMap,
}

impl DictionaryReader {
    pub fn new(readings: CharMap) -> Self {
        Self { readings }
    }
}

impl Reader for DictionaryReader {
    fn read(&self, raw: &str, normalized: &str, _previous: &[String]) -> Vec<Segment> {
        let normalized: Vec<char> = normalized.chars().collect();
        let aligned = normalized.len() == raw.chars().count();
        raw.chars()
            .enumerate()
            .map(|(i, c)| {
                let reading = aligned
                    .then(|| self.readings.get(normalized[i]))
                    .flatten()
                    .or_else(|| self.readings.get(c))
                    .map(str::to_string)
                    .unwrap_or_else(|| c.to_string());
                Segment::new(c, reading)
            })
            .collect()
    }
}

/// Sino-Korean reader. The whole spacing group is read so the initial
/// sound law only touches the syllable that starts it.
#[derive(Debug, Clone)]
pub struct HanjaReader {
    readings: CharMap,
}

impl HanjaReader {
    pub fn new(readings: CharMap) -> Self {
        Self { readings }
    }

    fn substitute(&self, text: &str) -> Vec<Option<String>> {
        let mut out: Vec<Option<String>> = text
            .chars()
            .map(|c| self.readings.get(c).map(str::to_string))
            .collect();
        if let Some(Some(first)) = out.first_mut() {
            *first = initial_sound_law(first);
        }
        out
    }
}

impl Reader for HanjaReader {
    fn read(&self, raw: &str, normalized: &str, previous: &[String]) -> Vec<Segment> {
        let context = previous.concat();
        let skip = context.chars().count();
        let substituted = self.substitute(&(context + normalized));

        let mut rest = substituted.into_iter().skip(skip);
        raw.chars()
            .map(|c| {
                let reading = rest.next().flatten().unwrap_or_else(|| c.to_string());
                Segment::new(c, reading)
            })
            .collect()
    }
}

// jamo indices into the compatibility tables of `unicode::Syllable`
const NIEUN: u32 = 2;
const RIEUL: u32 = 5;
const IEUNG: u32 = 11;
const IOTIZED: [u32; 7] = [2, 3, 6, 7, 12, 17, 20];

/// Apply 두음법칙 to the first syllable of a word: ㄹ or ㄴ before an
/// iotized vowel (ㅑ ㅒ ㅕ ㅖ ㅛ ㅠ ㅣ) drops to ㅇ; other word-initial ㄹ
/// becomes ㄴ.
pub fn initial_sound_law(reading: &str) -> String {
    let mut chars = reading.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let Some(mut syl) = Syllable::decompose(first) else {
        return reading.to_string();
    };

    if matches!(syl.initial, NIEUN | RIEUL) && IOTIZED.contains(&syl.medial) {
        syl.initial = IEUNG;
    } else if syl.initial == RIEUL {
        syl.initial = NIEUN;
    }

    let mut out = String::with_capacity(reading.len());
    out.push(syl.compose().unwrap_or(first));
    out.extend(chars);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charmap::CharMaps;
    use crate::locale::Locale;

    fn table(locale: &str) -> CharMap {
        CharMaps::builtin()
            .readings(&Locale::parse(locale).unwrap())
            .unwrap()
            .clone()
    }

    fn pairs(segments: Vec<Segment>) -> Vec<(String, String)> {
        segments.into_iter().map(|s| (s.surface, s.reading)).collect()
    }

    fn p(surface: &str, reading: &str) -> (String, String) {
        (surface.to_string(), reading.to_string())
    }

    #[test]
    fn initial_sound_law_cases() {
        assert_eq!(initial_sound_law("룡"), "용");
        assert_eq!(initial_sound_law("리"), "이");
        assert_eq!(initial_sound_law("녀"), "여");
        assert_eq!(initial_sound_law("론"), "논");
        assert_eq!(initial_sound_law("래"), "내");
        assert_eq!(initial_sound_law("계"), "계");
        assert_eq!(initial_sound_law("A"), "A");
        assert_eq!(initial_sound_law(""), "");
    }

    #[test]
    fn dictionary_prefers_normalized_character() {
        let reader = DictionaryReader::new(table("zh_CN"));
        assert_eq!(
            pairs(reader.read("计算机", "計算機", &[])),
            vec![p("计", "jì"), p("算", "suàn"), p("机", "jī")]
        );
    }

    #[test]
    fn dictionary_falls_back_to_raw_then_itself() {
        let reader = DictionaryReader::new(table("ja"));
        assert_eq!(
            pairs(reader.read("計X", "計X", &[])),
            vec![p("計", "けい"), p("X", "X")]
        );
        // misaligned normalization only consults the raw characters
        assert_eq!(
            pairs(reader.read("計算", "計", &[])),
            vec![p("計", "けい"), p("算", "さん")]
        );
    }

    #[test]
    fn hanja_applies_law_at_group_start() {
        let reader = HanjaReader::new(table("ko"));
        assert_eq!(pairs(reader.read("理論", "理論", &[])), vec![p("理", "이"), p("論", "론")]);
    }

    #[test]
    fn hanja_strips_previous_context() {
        let reader = HanjaReader::new(table("ko"));
        let previous = vec!["數".to_string()];
        assert_eq!(pairs(reader.read("理", "理", &previous)), vec![p("理", "리")]);
    }

    #[test]
    fn hanja_pads_unknown_characters() {
        let reader = HanjaReader::new(table("ko"));
        assert_eq!(
            pairs(reader.read("電X", "電X", &[])),
            vec![p("電", "전"), p("X", "X")]
        );
    }

    #[test]
    fn builtin_names() {
        for name in BUILTIN_READERS {
            assert!(builtin(name, CharMap::default()).is_some());
        }
        assert!(builtin("kakasi", CharMap::default()).is_none());
    }
}
