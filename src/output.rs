//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: every term leads with
//! its positional index and headword, with context (source path, definition
//! preview, output file) on indented or arrowed lines.
//!
//! ## Parse
//!
//! ```text
//! Glossary (10 terms)
//!     Source: terms.txt
//! 001 book
//!     a printed or written literary work
//! 002 calculus
//!     used in math
//!
//! Config
//!     title: Sample Glossary
//! ```
//!
//! ## Generate
//!
//! ```text
//! Index → index.html
//! 001 book → book.html
//! 002 calculus → calculus.html
//!
//! Generated 10 term pages
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::types::Manifest;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
///
/// Definitions are trusted embeddable text and may carry markup; previews
/// read better without it.
fn strip_html_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// Stage 1: Parse output
// ============================================================================

/// Format parse stage output: the term inventory in listing order, each
/// with a truncated definition preview, plus the effective config.
pub fn format_parse_output(manifest: &Manifest, source: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Glossary ({} terms)", manifest.order.len()));
    lines.push(format!("    Source: {}", source.display()));

    for (i, term) in manifest.order.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), term));
        if let Some(definition) = manifest.glossary.get(term) {
            let plain = strip_html_tags(definition);
            let preview = truncate_desc(plain.trim(), 60);
            if !preview.is_empty() {
                lines.push(format!("    {}", preview));
            }
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("    title: {}", manifest.config.title));

    lines
}

/// Print parse output to stdout.
pub fn print_parse_output(manifest: &Manifest, source: &Path) {
    for line in format_parse_output(manifest, source) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: the map from each page to its output file.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Index \u{2192} index.html".to_string());

    for (i, term) in manifest.order.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}.html",
            format_index(i + 1),
            term,
            term
        ));
    }

    lines.push(String::new());
    lines.push(format!("Generated {} term pages", manifest.order.len()));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}
