//! Definition cross-referencing.
//!
//! A definition is scanned as a strict alternation of word runs and
//! separator runs. Any word run that exactly matches a glossary term is
//! replaced with a hyperlink to that term's page; everything else passes
//! through untouched. Matching is case-sensitive and whole-token only, so
//! "words" never links to "word", but a term mentioned in its own
//! definition does link to itself.
//!
//! The run classification is per-run, not per-character: [`next_token`]
//! extends in both directions from its anchor position and never splits a
//! run. Concatenating consecutive tokens from position 0 reconstructs the
//! input exactly, which is what lets [`link_references`] rebuild the
//! definition without ever re-inspecting emitted text.

use std::collections::BTreeSet;

/// Characters that delimit word tokens.
///
/// Everything else, whitespace aside from plain space included, counts as
/// word material. All separators are ASCII, so run boundaries always fall
/// on `char` boundaries and byte offsets are safe to slice on.
pub const SEPARATORS: &[char] = &[
    '.', ',', '/', '!', '?', '(', ')', ';', '<', '>', '{', '}', '[', ']', '@', '#', '$', '%', '^',
    '&', '*', '|', ' ',
];

/// Return the maximal homogeneous run containing `position`.
///
/// If the character at `position` is a separator, the run extends left and
/// right over separator characters; otherwise it extends over
/// non-separator characters. Returns the substring from the left edge
/// (inclusive) to the right edge (exclusive).
///
/// `position` is a byte offset and must lie on a char boundary inside
/// `text`; violating that is a caller bug and panics.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &[char]) -> &'a str {
    let anchor = text[position..]
        .chars()
        .next()
        .expect("token position past end of text");
    let on_separator = separators.contains(&anchor);

    let mut left = position;
    for (i, c) in text[..position].char_indices().rev() {
        if separators.contains(&c) == on_separator {
            left = i;
        } else {
            break;
        }
    }

    let mut right = text.len();
    for (i, c) in text[position..].char_indices() {
        if separators.contains(&c) != on_separator {
            right = position + i;
            break;
        }
    }

    &text[left..right]
}

/// Rewrite a definition so every token matching a known term becomes a
/// hyperlink to `TERM.html`.
///
/// Tokens that match no term, and separator runs, are emitted unchanged.
/// The output is HTML only to the extent of the inserted anchors; no other
/// escaping or rewriting is performed.
pub fn link_references(definition: &str, terms: &BTreeSet<&str>) -> String {
    let mut linked = String::with_capacity(definition.len());
    let mut position = 0;

    while position < definition.len() {
        let token = next_token(definition, position, SEPARATORS);
        position += token.len();

        if terms.contains(token) {
            linked.push_str("<a href=\"");
            linked.push_str(token);
            linked.push_str(".html\">");
            linked.push_str(token);
            linked.push_str("</a>");
        } else {
            linked.push_str(token);
        }
    }

    linked
}
