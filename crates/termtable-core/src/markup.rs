//! HTML-safe string fragments.

use std::fmt;

use serde::Serialize;

/// A string that is already safe to splice into HTML.
///
/// Romanizers may emit markup (`<sup>` tone digits); everything that enters
/// from plain text goes through [`Markup::escape`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string the caller vouches for.
    pub fn trusted(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Escape plain text.
    pub fn escape(text: &str) -> Self {
        let mut out = String::with_capacity(text.len());
        push_escaped(&mut out, text);
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    pub fn push_text(&mut self, text: &str) {
        push_escaped(&mut self.0, text);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(Markup::escape("a<b>&'\"").as_str(), "a&lt;b&gt;&amp;&#39;&#34;");
        assert_eq!(Markup::escape("日本").as_str(), "日本");
    }

    #[test]
    fn trusted_is_verbatim() {
        let mut m = Markup::trusted("din<sup>6</sup>");
        m.push_text("<");
        assert_eq!(m.to_string(), "din<sup>6</sup>&lt;");
    }
}
