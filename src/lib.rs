//! # Simple Gloss
//!
//! A minimal static glossary generator. A flat text file of term/definition
//! records becomes a set of cross-linked HTML pages: one alphabetical index,
//! and one page per term with every glossary term mentioned in its
//! definition hyperlinked to that term's own page.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Simple Gloss processes content through two independent stages, with a
//! JSON manifest between them:
//!
//! ```text
//! 1. Parse     terms.txt  →  manifest.json   (text records → structured data)
//! 2. Generate  manifest   →  dist/           (final HTML site)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect
//!   when a page comes out wrong.
//! - **Testability**: each stage is a pure function from input to output,
//!   so unit tests exercise parsing, sorting and rendering without touching
//!   the other stage.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`] | Stage 1: reads term/definition records, sorts terms, produces the manifest |
//! | [`xref`] | Word/separator-run tokenizer and cross-reference insertion |
//! | [`generate`] | Stage 2: renders the index and term pages from the manifest using Maud |
//! | [`config`] | Optional `config.toml` loading, validation, and color CSS generation |
//! | [`types`] | Shared types serialized between stages (`Glossary`, `Manifest`) |
//! | [`output`] | CLI output formatting: term inventory and generated-file map |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed HTML is a build error, template variables
//! are Rust expressions, and interpolation is escaped by default. The one
//! exception is the cross-referenced definition body, which is inserted
//! pre-escaped: the anchors it contains are the literal substitution this
//! tool exists to perform, and the source text is trusted embeddable
//! content by contract.
//!
//! ## Whole-Token Cross-Referencing
//!
//! Definitions are scanned as a strict alternation of word runs and
//! separator runs (see [`xref`]). A term is linked only when it appears as
//! an entire token, case-sensitively. "words" never links to "word", and no
//! stemming or partial matching is attempted. A term mentioned in its own
//! definition links to itself.
//!
//! ## Listing Order Is Not Map Order
//!
//! The glossary is stored in a `BTreeMap` for deterministic serialization,
//! but that iterates case-sensitively. The case-insensitive listing order
//! users expect from a glossary is computed once by [`parse::sorted_terms`]
//! and carried in the manifest as an explicit sequence.
//!
//! ## Plain Files, No Server
//!
//! The output is plain HTML with one embedded stylesheet and zero
//! JavaScript. The generated directory can be dropped on any file server
//! or opened straight from disk.

pub mod config;
pub mod generate;
pub mod output;
pub mod parse;
pub mod types;
pub mod xref;

#[cfg(test)]
pub(crate) mod test_helpers;
