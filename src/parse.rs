//! Glossary parsing and manifest assembly.
//!
//! Stage 1 of the build pipeline. Reads the plain-text glossary source into
//! a structured [`Manifest`] that the generate stage consumes.
//!
//! ## Record Format
//!
//! ```text
//! term
//! first definition line
//! any further lines are concatenated verbatim
//!
//! next term
//! its definition
//! ```
//!
//! Line 1 of a record is the term; line 2 is the first definition line;
//! every following non-blank line is appended to the definition with no
//! inserted whitespace. A blank line (or end of input) closes the record.
//!
//! ## Validation
//!
//! The parser enforces these rules:
//! - every term line must be followed by at least one definition line
//! - no term may appear twice
//!
//! Anything else is trusted: definitions are embedded in the output pages
//! as-is, so the source file is expected to contain valid embeddable text.

use crate::config;
use crate::types::{Glossary, Manifest};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("term {0:?} has no definition before end of input")]
    MissingDefinition(String),
    #[error("duplicate term {0:?}")]
    DuplicateTerm(String),
}

/// Parse glossary records from a sequence of lines.
///
/// An empty input yields an empty glossary.
pub fn parse_records<'a, I>(lines: I) -> Result<Glossary, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut glossary = Glossary::new();
    let mut lines = lines.into_iter();

    while let Some(term) = lines.next() {
        let Some(first) = lines.next() else {
            return Err(ParseError::MissingDefinition(term.to_string()));
        };

        let mut definition = first.to_string();
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }
            definition.push_str(line);
        }

        if glossary.contains_key(term) {
            return Err(ParseError::DuplicateTerm(term.to_string()));
        }
        glossary.insert(term.to_string(), definition);
    }

    Ok(glossary)
}

/// Return the glossary's terms in case-insensitive ascending order.
///
/// The mapping is borrowed immutably and left untouched. Distinct terms
/// that compare equal case-insensitively ("Book" vs "book") fall back to
/// raw ordering so the output is deterministic.
pub fn sorted_terms(glossary: &Glossary) -> Vec<String> {
    let mut terms: Vec<String> = glossary.keys().cloned().collect();
    terms.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    terms
}

/// Parse a glossary source file into a full manifest.
///
/// Loads `config.toml` from the directory containing the source file, so a
/// glossary and its site configuration travel together.
pub fn parse_file(source: &Path) -> Result<Manifest, ParseError> {
    let content = fs::read_to_string(source)?;
    let glossary = parse_records(content.lines())?;
    let order = sorted_terms(&glossary);

    let config_dir = source.parent().filter(|p| !p.as_os_str().is_empty());
    let config = config::load_config(config_dir.unwrap_or(Path::new(".")))?;

    Ok(Manifest {
        glossary,
        order,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{find_definition, sample_glossary, write_sample_glossary};
    use tempfile::TempDir;

    // =========================================================================
    // parse_records
    // =========================================================================

    #[test]
    fn single_line_records() {
        let lines = [
            "term1",
            "definition1",
            "",
            "term2",
            "definition2",
            "",
            "term3",
            "definition3",
        ];
        let glossary = parse_records(lines).unwrap();

        assert_eq!(glossary.len(), 3);
        assert_eq!(glossary["term1"], "definition1");
        assert_eq!(glossary["term2"], "definition2");
        assert_eq!(glossary["term3"], "definition3");
        assert_eq!(sorted_terms(&glossary), vec!["term1", "term2", "term3"]);
    }

    #[test]
    fn empty_input_yields_empty_glossary() {
        let glossary = parse_records("".lines()).unwrap();
        assert!(glossary.is_empty());
        assert!(sorted_terms(&glossary).is_empty());
    }

    #[test]
    fn multi_line_definition_concatenated_verbatim() {
        let lines = [
            "glossary",
            "a list of specialized terms,",
            " usually near the end of a book",
            "",
            "book",
            "a printed or written literary work",
        ];
        let glossary = parse_records(lines).unwrap();

        assert_eq!(
            glossary["glossary"],
            "a list of specialized terms, usually near the end of a book"
        );
        assert_eq!(glossary["book"], "a printed or written literary work");
    }

    #[test]
    fn no_blank_line_between_continuation_lines_means_no_space() {
        let lines = ["term", "abc", "def"];
        let glossary = parse_records(lines).unwrap();
        assert_eq!(glossary["term"], "abcdef");
    }

    #[test]
    fn record_may_end_at_end_of_input_without_blank_line() {
        let lines = ["term1", "definition1", "", "term2", "definition2"];
        let glossary = parse_records(lines).unwrap();
        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary["term2"], "definition2");
    }

    #[test]
    fn term_without_definition_is_an_error() {
        let result = parse_records(["term1", "definition1", "", "orphan"]);
        assert!(matches!(
            result,
            Err(ParseError::MissingDefinition(t)) if t == "orphan"
        ));
    }

    #[test]
    fn duplicate_term_is_an_error() {
        let lines = ["word", "first meaning", "", "word", "second meaning"];
        let result = parse_records(lines);
        assert!(matches!(
            result,
            Err(ParseError::DuplicateTerm(t)) if t == "word"
        ));
    }

    // =========================================================================
    // sorted_terms
    // =========================================================================

    #[test]
    fn terms_sorted_case_insensitively() {
        let lines = [
            "banana", "yellow", "", "Apple", "red or green", "", "cherry", "red",
        ];
        let glossary = parse_records(lines).unwrap();
        assert_eq!(sorted_terms(&glossary), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn sort_is_deterministic_for_case_insensitive_ties() {
        let lines = ["book", "lowercase entry", "", "Book", "capitalized entry"];
        let glossary = parse_records(lines).unwrap();
        assert_eq!(sorted_terms(&glossary), vec!["Book", "book"]);
    }

    #[test]
    fn sort_leaves_glossary_unchanged() {
        let glossary = parse_records(sample_glossary().lines()).unwrap();
        let before = glossary.clone();

        let order = sorted_terms(&glossary);

        assert_eq!(glossary, before);
        assert_eq!(order.len(), glossary.len());
    }

    #[test]
    fn order_has_no_duplicates_and_ascends() {
        let glossary = parse_records(sample_glossary().lines()).unwrap();
        let order = sorted_terms(&glossary);

        for pair in order.windows(2) {
            assert!(
                pair[0].to_lowercase() < pair[1].to_lowercase(),
                "{:?} should sort strictly before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    // =========================================================================
    // parse_file
    // =========================================================================

    #[test]
    fn parse_file_assembles_manifest() {
        let tmp = TempDir::new().unwrap();
        let source = write_sample_glossary(tmp.path());

        let manifest = parse_file(&source).unwrap();

        assert_eq!(manifest.glossary.len(), 10);
        assert_eq!(manifest.order.len(), 10);
        assert_eq!(manifest.order.first().map(String::as_str), Some("book"));
        assert_eq!(manifest.order.last().map(String::as_str), Some("word"));
        assert_eq!(
            find_definition(&manifest.glossary, "camel"),
            "a desert creature"
        );
        // No config.toml next to the source: defaults apply
        assert_eq!(manifest.config.title, "Sample Glossary");
    }

    #[test]
    fn parse_file_picks_up_sibling_config() {
        let tmp = TempDir::new().unwrap();
        let source = write_sample_glossary(tmp.path());
        std::fs::write(
            tmp.path().join("config.toml"),
            "title = \"Demo Glossary\"\n",
        )
        .unwrap();

        let manifest = parse_file(&source).unwrap();
        assert_eq!(manifest.config.title, "Demo Glossary");
    }

    #[test]
    fn parse_file_missing_source_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = parse_file(&tmp.path().join("nope.txt"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
