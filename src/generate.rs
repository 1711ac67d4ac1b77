//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the parsed manifest and writes the
//! final static site: one index page listing every term, and one page per
//! term with its cross-referenced definition.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html       # Alphabetical term listing
//! ├── book.html        # One page per term
//! ├── glossary.html
//! └── ...
//! ```
//!
//! Term page file names are the literal term plus `.html`; terms containing
//! characters that are illegal in file names are not sanitized.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is auto-escaped, with one deliberate exception: the
//! cross-referenced definition is inserted with `PreEscaped`, because the
//! inserted anchors are the literal substitution the tool exists to make
//! and the source text is trusted embeddable content.
//!
//! The stylesheet is embedded at compile time, prefixed by a `:root` block
//! generated from the config colors.

use crate::config::{self, SiteConfig};
use crate::types::Manifest;
use crate::xref;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("term {0:?} is listed in the page order but missing from the glossary")]
    UnknownTerm(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Read a manifest from disk and generate the site from it.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, output_dir)
}

/// Generate the full site from an in-memory manifest.
///
/// The input is fully parsed before this runs, so every write here is
/// straight-line: index first, then one file per term in listing order.
pub fn generate_site(manifest: &Manifest, output_dir: &Path) -> Result<(), GenerateError> {
    let color_css = config::generate_color_css(&manifest.config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    let index_html = render_index(&manifest.order, &manifest.config, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    let terms: BTreeSet<&str> = manifest.glossary.keys().map(String::as_str).collect();

    for term in &manifest.order {
        let definition = manifest
            .glossary
            .get(term)
            .ok_or_else(|| GenerateError::UnknownTerm(term.clone()))?;
        let linked = xref::link_references(definition, &terms);
        let page_html = render_term_page(term, &linked, &css);
        fs::write(
            output_dir.join(format!("{term}.html")),
            page_html.into_string(),
        )?;
    }

    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the index page: site title, then one list item per term in
/// listing order, each linking to that term's page.
pub fn render_index(order: &[String], config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        h2 { (config.title) }
        hr;
        h3 { "Index" }
        ul.term-index {
            @for term in order {
                li { a href={ (term) ".html" } { (term) } }
            }
        }
    };
    base_document(&config.title, css, content)
}

/// Renders a single term page: styled term heading, cross-referenced
/// definition in a blockquote, and a link back to the index.
///
/// `definition_html` is the output of [`xref::link_references`] and is
/// inserted without further escaping.
pub fn render_term_page(term: &str, definition_html: &str, css: &str) -> Markup {
    let content = html! {
        h2.term-heading { (term) }
        blockquote.definition {
            (PreEscaped(definition_html))
        }
        hr;
        p { "Return to " a href="index.html" { "index" } "." }
    };
    base_document(term, css, content)
}

// ============================================================================
// Tests
// ============================================================================
