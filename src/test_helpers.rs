//! Shared test utilities for the simple-gloss test suite.
//!
//! Provides the canonical sample glossary used across modules and helpers
//! for materializing it on disk, so tests don't each carry their own copy
//! of the record format.

use std::path::{Path, PathBuf};

/// The canonical ten-term sample glossary, in record format.
///
/// Definitions deliberately mention other terms ("term" mentions "word",
/// "definition" and "glossary"; "glossary" spans two source lines) so
/// parsing, sorting and cross-referencing are all exercised by one input.
pub fn sample_glossary() -> &'static str {
    "\
meaning
something that one wishes to convey, especially by language

term
a word whose definition is in a glossary

word
a string of characters in a language, which has at least one character

definition
a sequence of words that gives meaning to a term

glossary
a list of difficult or specialized terms, with their definitions,
 usually near the end of a book

language
a set of strings of characters, each of which has meaning

book
a printed or written literary work

calculus
used in math

flutter
used for mobile development

camel
a desert creature"
}

/// The sample glossary's terms in expected listing order.
pub fn sample_order() -> Vec<&'static str> {
    vec![
        "book",
        "calculus",
        "camel",
        "definition",
        "flutter",
        "glossary",
        "language",
        "meaning",
        "term",
        "word",
    ]
}

/// Write the sample glossary to `terms.txt` in `dir` and return its path.
pub fn write_sample_glossary(dir: &Path) -> PathBuf {
    let path = dir.join("terms.txt");
    std::fs::write(&path, sample_glossary()).unwrap();
    path
}

/// Find a term's definition in a glossary. Panics with the available terms
/// on a miss.
pub fn find_definition<'a>(glossary: &'a crate::types::Glossary, term: &str) -> &'a str {
    glossary.get(term).map(String::as_str).unwrap_or_else(|| {
        let terms: Vec<&str> = glossary.keys().map(String::as_str).collect();
        panic!("term '{term}' not found. Available: {terms:?}")
    })
}
