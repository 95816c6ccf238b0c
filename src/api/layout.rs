//! Translations flattened into rows of cells.

use termtable_core::{Locale, Table, Term, TermKind, Translation, Word};
use tracing::debug_span;

use super::types::{Cell, Row, RowGroup, Ruby, TermCell, WordCell};
use super::{Document, TermTableError};

const ENGLISH: &str = "en";

impl Document {
    /// One group per translation, `max_words` rows each, with a cell per
    /// column of [`Document::ordered_locales`].
    ///
    /// Readings are given in the `target` locale. When a locale has fewer
    /// words than the row, its last word spans the remaining rows.
    pub fn layout(&self, target: &Locale) -> Result<Vec<RowGroup>, TermTableError> {
        let _span = debug_span!("layout", display = %target).entered();
        let locales = self.ordered_locales(target);
        self.table()
            .iter()
            .map(|translation| group(self.table(), translation, &locales, target))
            .collect()
    }
}

fn group(
    table: &Table,
    translation: &Translation,
    locales: &[Locale],
    display: &Locale,
) -> Result<RowGroup, TermTableError> {
    let max_words = translation.max_words();
    let mut rows = Vec::with_capacity(max_words);
    for i in 0..max_words {
        let mut cells = Vec::with_capacity(locales.len());
        for locale in locales {
            let words = translation.words(locale);
            let cell = match words.get(i) {
                Some(word) => {
                    let mut cell = word_cell(table, translation, word, display)?;
                    if i + 1 == words.len() && max_words > words.len() {
                        cell.rowspan = Some(max_words - i);
                    }
                    Cell::Word(cell)
                }
                None if words.is_empty() => Cell::Empty,
                None => Cell::Covered,
            };
            cells.push(cell);
        }
        rows.push(Row {
            head: i == 0,
            foot: i + 1 >= max_words,
            cells,
        });
    }
    Ok(RowGroup { rows })
}

fn word_cell(
    table: &Table,
    translation: &Translation,
    word: &Word,
    display: &Locale,
) -> Result<WordCell, TermTableError> {
    let registry = table.registry();
    let locale = word.locale();
    let terms = word
        .iter()
        .map(|term| {
            Ok(TermCell {
                text: term.text().to_string(),
                space: term.space(),
                correspond: translation
                    .correspondences()
                    .iter()
                    .position(|c| c == term.correspond())
                    .map(|i| i + 1),
                ruby: ruby(table, translation, word, term, display)?,
            })
        })
        .collect::<Result<Vec<_>, TermTableError>>()?;

    Ok(WordCell {
        locale: locale.clone(),
        id: word.id().to_string(),
        terms,
        romanization: (locale.language() != ENGLISH).then(|| word.romanize(registry)),
        tag: registry.language_tag(locale),
        cognate: translation
            .cognate_groups()
            .get_index_of(word.id())
            .map(|i| i + 1),
        rowspan: None,
    })
}

fn ruby(
    table: &Table,
    translation: &Translation,
    word: &Word,
    term: &Term,
    display: &Locale,
) -> Result<Vec<Ruby>, TermTableError> {
    let Some(eastern) = term.as_eastern() else {
        return Ok(match term.kind() {
            TermKind::Western { loan, .. } => vec![Ruby::annotated(term.text(), loan.as_str())],
            _ => vec![Ruby::plain(term.text())],
        });
    };

    let previous = word.get_previous_terms(term)?;
    let mut covered = 0;
    let mut pieces: Vec<Ruby> = eastern
        .read_as(word.locale(), display, &previous, word.id(), translation, table)
        .map(|segment| {
            covered += segment.surface.chars().count();
            if segment.reading == segment.surface {
                Ruby::plain(segment.surface)
            } else {
                Ruby::annotated(segment.surface, segment.reading)
            }
        })
        .collect();
    let rest: String = term.text().chars().skip(covered).collect();
    if !rest.is_empty() {
        pieces.push(Ruby::plain(rest));
    }
    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use termtable_core::{Registry, Spacing};

    use super::*;

    const DOC: &str = r#"
- ja:
    w1:
      - term: 計算
        read: けい さん
      - term: 機
        read: き
  ko:
    w1:
      - term: 컴퓨터
        correspond: 計算
  en:
    w1:
      - term: computer
    w2:
      - term: calculator
- ja:
    w1:
      - term: コンピュータ
        loan: computer
"#;

    fn layout(display: &str) -> Vec<RowGroup> {
        let doc = Document::parse(DOC, Arc::new(Registry::builtin()), None).unwrap();
        doc.layout(&Locale::parse(display).unwrap()).unwrap()
    }

    fn word(cell: &Cell) -> &WordCell {
        match cell {
            Cell::Word(w) => w,
            other => panic!("expected a word, got {other:?}"),
        }
    }

    #[test]
    fn rows_and_spans() {
        let groups = layout("ja");
        assert_eq!(groups.len(), 2);
        let rows = &groups[0].rows;
        assert_eq!(rows.len(), 2);
        assert!(rows[0].head && !rows[0].foot);
        assert!(!rows[1].head && rows[1].foot);

        // columns: en, ja, ko
        assert_eq!(word(&rows[0].cells[0]).id, "w1");
        assert_eq!(word(&rows[0].cells[0]).rowspan, None);
        assert_eq!(word(&rows[1].cells[0]).id, "w2");
        assert_eq!(word(&rows[0].cells[1]).rowspan, Some(2));
        assert!(matches!(rows[1].cells[1], Cell::Covered));
        assert!(matches!(rows[1].cells[2], Cell::Covered));

        let second = &groups[1].rows;
        assert_eq!(second.len(), 1);
        assert!(second[0].head && second[0].foot);
        assert!(matches!(second[0].cells[0], Cell::Empty));
        assert!(matches!(second[0].cells[2], Cell::Empty));
    }

    #[test]
    fn word_details() {
        let groups = layout("ja");
        let cells = &groups[0].rows[0].cells;
        let en = word(&cells[0]);
        assert_eq!(en.romanization, None);
        assert_eq!(en.cognate, Some(1));

        let ja = word(&cells[1]);
        assert_eq!(ja.romanization.as_ref().map(|m| m.as_str()), Some("keisanki"));
        assert_eq!(ja.tag, "ja-Latn-hepburn");
        assert_eq!(ja.cognate, Some(1));
        assert_eq!(ja.terms[0].space, Spacing::ImplicitNoSpace);
        // 計算 is used by ja and ko
        assert_eq!(ja.terms[0].correspond, Some(1));
        assert_eq!(ja.terms[1].correspond, None);

        assert_eq!(word(&groups[0].rows[1].cells[0]).cognate, None);
    }

    #[test]
    fn ruby_in_display_locale() {
        let groups = layout("ja");
        let ja = word(&groups[0].rows[0].cells[1]);
        assert_eq!(
            ja.terms[0].ruby,
            [Ruby::annotated("計", "けい"), Ruby::annotated("算", "さん")]
        );

        let groups = layout("ko");
        let ja = word(&groups[0].rows[0].cells[2]);
        assert_eq!(ja.terms[1].ruby, [Ruby::annotated("機", "기")]);
        // the plain Korean term carries no reading
        let ko = word(&groups[0].rows[0].cells[1]);
        assert_eq!(ko.terms[0].ruby, [Ruby::plain("컴퓨터")]);

        let loan = word(&groups[1].rows[0].cells[2]);
        assert_eq!(loan.terms[0].ruby, [Ruby::annotated("コンピュータ", "computer")]);
    }

    #[test]
    fn unchanged_readings_are_not_annotated() {
        let doc = Document::parse(
            "- ja:\n    w:\n      - term: 計算機\n        read: けい さ\n  zh_TW:\n    w:\n      - term: ㄅ\n        read: ㄅ\n",
            Arc::new(Registry::builtin()),
            None,
        )
        .unwrap();
        let groups = doc.layout(&Locale::parse("ja").unwrap()).unwrap();
        let cells = &groups[0].rows[0].cells;
        // truncated pairing leaves 機 unannotated
        assert_eq!(
            word(&cells[0]).terms[0].ruby,
            [Ruby::annotated("計", "けい"), Ruby::annotated("算", "さ"), Ruby::plain("機")]
        );
        assert_eq!(word(&cells[1]).terms[0].ruby, [Ruby::plain("ㄅ")]);
    }

    #[test]
    fn serializes_tagged_cells() {
        let groups = layout("ja");
        let json = serde_json::to_value(&groups[1].rows[0].cells).unwrap();
        assert_eq!(json[0], serde_json::json!({ "type": "empty" }));
        assert_eq!(json[1]["type"], "word");
        assert_eq!(json[1]["locale"], "ja");
        assert!(json[1].get("rowspan").is_none());
    }
}
