//! Locale file parsers.
//!
//! The engine never reads file formats itself; it asks a [`LocaleFileParser`]
//! for a [`LocaleDocument`] and flattens that.
//!
//! - `json`: JSON locale files (serde_json, key order preserved)
//! - `yaml`: YAML locale files (serde_yaml)

use std::path::Path;

use anyhow::{Result, bail};

use crate::core::LocaleDocument;

pub mod json;
pub mod yaml;

pub use json::JsonLocaleParser;
pub use yaml::YamlLocaleParser;

/// Turns the content of one locale file into a nested document.
pub trait LocaleFileParser: Send + Sync {
    fn parse(&self, path: &Path, content: &str) -> Result<LocaleDocument>;
}

impl<F> LocaleFileParser for F
where
    F: Fn(&Path, &str) -> Result<LocaleDocument> + Send + Sync,
{
    fn parse(&self, path: &Path, content: &str) -> Result<LocaleDocument> {
        self(path, content)
    }
}

/// Picks a parser from the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionParser;

impl LocaleFileParser for ExtensionParser {
    fn parse(&self, path: &Path, content: &str) -> Result<LocaleDocument> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => JsonLocaleParser.parse(path, content),
            Some("yml" | "yaml") => YamlLocaleParser.parse(path, content),
            Some(other) => bail!("Unsupported locale file extension '.{}'", other),
            None => bail!("Locale file has no extension"),
        }
    }
}
