use std::path::Path;

use termtable::api::{self, Document};
use termtable::lint::lint_table;
use termtable::{Locale, Table};
use unicode_width::UnicodeWidthStr;

use super::die;

/// Settings and character-map overrides shared by every table command.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub settings: Option<&'a str>,
    pub charmaps: Option<&'a str>,
}

fn open(file: &str, overrides: Overrides<'_>) -> Document {
    let registry = die!(
        api::load_registry(
            overrides.settings.map(Path::new),
            overrides.charmaps.map(Path::new)
        ),
        "Error: {}"
    );
    die!(Document::load(file, registry), "Error: {}")
}

fn parse_locale(s: &str) -> Locale {
    die!(Locale::parse(&s.replace('-', "_")), "Error: {}")
}

pub fn check(file: &str, overrides: Overrides<'_>) {
    let doc = open(file, overrides);
    let table = doc.table();
    let words: usize = table
        .iter()
        .flat_map(|t| t.iter())
        .map(|(_, words)| words.len())
        .sum();
    let terms: usize = table
        .iter()
        .flat_map(|t| t.iter())
        .flat_map(|(_, words)| words)
        .map(|w| w.len())
        .sum();
    println!(
        "OK: {} rows, {} locales, {words} words, {terms} terms",
        table.len(),
        table.supported_locales().len()
    );

    let findings = lint_table(table);
    for finding in &findings {
        eprintln!("warning: {finding}");
    }
    if !findings.is_empty() {
        eprintln!("{} warnings", findings.len());
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

pub fn romanize(file: &str, locale: Option<&str>, overrides: Overrides<'_>) {
    let doc = open(file, overrides);
    let table = doc.table();
    let filter = locale.map(parse_locale);

    let mut lines = Vec::new();
    for (row, translation) in table.iter().enumerate() {
        for (locale, words) in translation.iter() {
            if filter.as_ref().is_some_and(|f| f != locale) {
                continue;
            }
            for word in words {
                let text: String = word.iter().map(|t| t.text()).collect();
                lines.push((row, locale.to_string(), text, word.romanize(table.registry())));
            }
        }
    }

    let width = lines.iter().map(|(_, _, text, _)| text.width()).max().unwrap_or(0);
    for (row, locale, text, romanized) in &lines {
        println!("{row:>4}  {locale:<6}  {}  {romanized}", pad(text, width));
    }
}

/// `計算` read as `けい さん` prints as `計(けい)算(さん)`.
fn ruby_lines(table: &Table, to: &Locale) -> Vec<String> {
    let mut out = Vec::new();
    for translation in table {
        for (from, words) in translation.iter() {
            for word in words {
                for term in word {
                    let Some(eastern) = term.as_eastern() else {
                        continue;
                    };
                    let previous = die!(word.get_previous_terms(term), "Error: {}");
                    let line: String = eastern
                        .read_as(from, to, &previous, word.id(), translation, table)
                        .map(|s| format!("{}({})", s.surface, s.reading))
                        .collect();
                    out.push(format!("{from}\t{}\t{line}", term.text()));
                }
            }
        }
    }
    out
}

pub fn read(file: &str, to: &str, overrides: Overrides<'_>) {
    let doc = open(file, overrides);
    let to = parse_locale(to);
    for line in ruby_lines(doc.table(), &to) {
        println!("{line}");
    }
}

pub fn layout(file: &str, display: &str, pretty: bool, overrides: Overrides<'_>) {
    let doc = open(file, overrides);
    let display = parse_locale(display);
    let groups = die!(doc.layout(&display), "Error: {}");
    let json = if pretty {
        serde_json::to_string_pretty(&groups)
    } else {
        serde_json::to_string(&groups)
    };
    println!("{}", die!(json, "Error serializing layout: {}"));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use termtable::Registry;

    use super::*;

    #[test]
    fn pad_uses_display_width() {
        assert_eq!(pad("計算", 6), "計算  ");
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad("計算機", 4), "計算機");
    }

    #[test]
    fn ruby_lines_for_eastern_terms() {
        let doc = Document::parse(
            "- ja:\n    w:\n      - term: 計算\n        read: けい さん\n  en:\n    w:\n      - term: calc\n",
            Arc::new(Registry::builtin()),
            None,
        )
        .unwrap();
        let lines = ruby_lines(doc.table(), &Locale::parse("ko").unwrap());
        assert_eq!(lines, ["ja\t計算\t計(계)算(산)"]);
    }
}
