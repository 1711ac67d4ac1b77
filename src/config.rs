//! Site configuration module.
//!
//! Handles loading and validating an optional `config.toml` placed next to
//! the glossary source file:
//!
//! ```text
//! glossary/
//! ├── terms.txt        # Glossary source
//! └── config.toml      # Site config (optional)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Sample Glossary"  # Index page title
//!
//! [colors]
//! background = "#ffffff"
//! text = "#111111"
//! link = "#0044aa"           # Hyperlinks, including inserted cross-references
//! term = "#cc0000"           # Term heading on definition pages
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Title shown as the index page heading and `<title>`.
    pub title: String,
    /// Page color scheme.
    pub colors: ColorConfig,
}

fn default_title() -> String {
    "Sample Glossary".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        for (name, value) in [
            ("colors.background", &self.colors.background),
            ("colors.text", &self.colors.text),
            ("colors.link", &self.colors.link),
            ("colors.term", &self.colors.term),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a hex color like #rrggbb, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Page color scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Body text.
    pub text: String,
    /// Hyperlinks, including inserted cross-references.
    pub link: String,
    /// Term heading on definition pages.
    pub term: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            link: "#0044aa".to_string(),
            term: "#cc0000".to_string(),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    matches!(value.len(), 4 | 7)
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Load `config.toml` from the given directory, falling back to defaults
/// when the file does not exist.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Generate the `:root` custom-property block from the color config.
///
/// Prepended to the static stylesheet so `static/style.css` can consume
/// `var(--color-*)` without knowing about config at all.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n  --color-background: {};\n  --color-text: {};\n  --color-link: {};\n  --color-term: {};\n}}",
        colors.background, colors.text, colors.link, colors.term
    )
}

/// A stock `config.toml` with every option documented at its default value.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        r##"# simple-gloss configuration
# Place this file next to your glossary source file.
# All options are optional - defaults shown below.

# Index page title
title = "{title}"

[colors]
background = "{background}"  # Page background
text = "{text}"        # Body text
link = "{link}"        # Hyperlinks, including inserted cross-references
term = "{term}"        # Term heading on definition pages
"##,
        title = defaults.title,
        background = defaults.colors.background,
        text = defaults.colors.text,
        link = defaults.colors.link,
        term = defaults.colors.term,
    )
}
