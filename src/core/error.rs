use std::{io, path::PathBuf};

use thiserror::Error;

/// A locale document could not be turned into a key set.
///
/// Fatal: a partial key universe would make every report untrustworthy.
#[derive(Error, Debug)]
#[error("Failed to parse locale file {}: {source:#}", path.display())]
pub struct ParseError {
    pub path: PathBuf,
    #[source]
    pub source: anyhow::Error,
}

/// The translation key matcher is misconfigured or failed while scanning.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// The matcher pattern itself is invalid.
    #[error("Invalid translation key matcher '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// A custom matcher reported a failure.
    #[error("Translation key matcher failed: {0}")]
    Failed(String),
}

/// A file that could not be read and was left out of the report.
#[derive(Error, Debug)]
#[error("Cannot read {}: {source}", path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Errors that abort a collect operation. No partial report is produced.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Failed to scan {}: {source}", path.display())]
    Matcher {
        path: PathBuf,
        #[source]
        source: MatcherError,
    },
}
