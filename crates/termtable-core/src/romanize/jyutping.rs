use crate::markup::{push_escaped, Markup};
use crate::registry::Romanizer;

/// Render Jyutping with superscript tone numbers:
/// `gai3 syun3` → `gai<sup>3</sup>syun<sup>3</sup>`.
pub fn superscript_tones(text: &str) -> Markup {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        if c.is_ascii_digit() {
            out.push_str("<sup>");
            out.push(c);
            out.push_str("</sup>");
        } else {
            push_escaped(&mut out, c.encode_utf8(&mut [0; 4]));
        }
    }
    Markup::trusted(out)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Jyutping;

impl Romanizer for Jyutping {
    fn romanize(&self, text: &str) -> Markup {
        superscript_tones(text)
    }
}
