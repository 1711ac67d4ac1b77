//! Shared types serialized between pipeline stages.
//!
//! The parse stage writes a [`Manifest`] as JSON; the generate stage reads it
//! back. Keeping the manifest as a plain serde type means the intermediate
//! file is human-readable and each stage stays testable in isolation.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Term to definition mapping.
///
/// Keys are case-sensitive as stored; a `BTreeMap` keeps the serialized
/// manifest deterministic. Display order lives in [`Manifest::order`], not
/// here: map iteration order is case-sensitive and must not be confused
/// with the case-insensitive listing order.
pub type Glossary = BTreeMap<String, String>;

/// Manifest passed from the parse stage to the generate stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// All glossary entries.
    pub glossary: Glossary,
    /// Terms in case-insensitive ascending order. Page generation order and
    /// index listing order. Always the same length as `glossary`.
    pub order: Vec<String>,
    /// Site configuration loaded from `config.toml` next to the source file.
    pub config: SiteConfig,
}
