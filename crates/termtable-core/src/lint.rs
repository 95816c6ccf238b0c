//! Consistency checks over source readings.
//!
//! None of these are errors: mismatched readings still render (pairing
//! truncates). They are reported by `termtool check`.

use std::fmt;

use crate::locale::Locale;
use crate::table::Table;
use crate::term::Term;
use crate::unicode::{is_hangul_syllable, is_hiragana, is_kanji, is_katakana, is_zhuyin};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A term written purely in Han characters whose reading has a different
    /// number of tokens.
    TokenCount { chars: usize, tokens: usize },
    /// A reading token containing a character outside the locale's
    /// phonetic script.
    Script { token: String, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub row: usize,
    pub locale: Locale,
    pub word: String,
    pub term: String,
    pub issue: Issue,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} {} {} {:?}: ", self.row, self.locale, self.word, self.term)?;
        match &self.issue {
            Issue::TokenCount { chars, tokens } => {
                write!(f, "{chars} characters but {tokens} reading tokens")
            }
            Issue::Script { token, expected } => {
                write!(f, "reading {token:?} is not {expected}")
            }
        }
    }
}

fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

fn phonetic_script(locale: &Locale) -> Option<(&'static str, fn(char) -> bool)> {
    match (locale.language(), locale.territory()) {
        ("ja", _) => Some(("kana", is_kana as fn(char) -> bool)),
        ("ko", _) => Some(("hangul", is_hangul_syllable)),
        ("zh", Some("TW")) => Some(("zhuyin", is_zhuyin)),
        _ => None,
    }
}

fn check_term(locale: &Locale, term: &Term) -> Vec<Issue> {
    let Some(read) = term.read() else {
        return Vec::new();
    };
    let mut issues = Vec::new();
    let tokens: Vec<&str> = read.split_whitespace().collect();
    let chars = term.text().chars().count();
    if term.text().chars().all(is_kanji) && chars != tokens.len() {
        issues.push(Issue::TokenCount {
            chars,
            tokens: tokens.len(),
        });
    }
    if let Some((expected, accepts)) = phonetic_script(locale) {
        for token in tokens.iter().filter(|t| !t.chars().all(accepts)) {
            issues.push(Issue::Script {
                token: token.to_string(),
                expected,
            });
        }
    }
    issues
}

/// Every finding in document order.
pub fn lint_table(table: &Table) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (row, translation) in table.iter().enumerate() {
        for (locale, words) in translation.iter() {
            for word in words {
                for term in word {
                    findings.extend(check_term(locale, term).into_iter().map(|issue| Finding {
                        row,
                        locale: locale.clone(),
                        word: word.id().to_string(),
                        term: term.text().to_string(),
                        issue,
                    }));
                }
            }
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::registry::Registry;
    use crate::source::parse_table;

    fn lint(yaml: &str) -> Vec<Finding> {
        lint_table(&parse_table(yaml, Arc::new(Registry::builtin())).unwrap())
    }

    #[test]
    fn clean_document() {
        let findings = lint(
            r#"
- ja:
    w:
      - term: 計算機
        read: けい さん き
      - term: 送り
        read: おくり
  ko:
    w:
      - term: 電算
        read: 전 산
  zh_TW:
    w:
      - term: 計算
        read: ㄐㄧˋ ㄙㄨㄢˋ
"#,
        );
        assert!(findings.is_empty(), "{findings:?}");
    }

    #[test]
    fn token_count_mismatch() {
        let findings = lint("- ja:\n    w:\n      - term: 計算機\n        read: けいさん き\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].issue, Issue::TokenCount { chars: 3, tokens: 2 });
        assert_eq!(findings[0].to_string(), "row 0 ja w \"計算機\": 3 characters but 2 reading tokens");
    }

    #[test]
    fn wrong_script() {
        let findings = lint("- ko:\n    w:\n      - term: 電\n        read: jeon\n");
        assert_eq!(
            findings[0].issue,
            Issue::Script {
                token: "jeon".to_string(),
                expected: "hangul"
            }
        );
    }
}
