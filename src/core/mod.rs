//! Core reconciliation engine.
//!
//! Reconciles keys declared in locale files against keys referenced from
//! source code.
//!
//! ## Pipeline
//!
//! 1. **Flatten**: locale file → [`LocaleDocument`] (via the injected parser) →
//!    [`LocaleKeySet`]
//! 2. **Extract**: source file → [`SourceUsage`]s (static or dynamic keys)
//! 3. **Reconcile**: key sets + usages → [`UnusedTranslations`] /
//!    [`MissedTranslations`]
//!
//! Steps 1 and 2 run per file in parallel; step 3 only starts once every file
//! has been joined back in input order.
//!
//! ## Module Structure
//!
//! - `collect`: The two public operations and the file reader seam
//! - `comments`: Comment stripping that respects string literals
//! - `document`: Parsed locale document type
//! - `error`: Error taxonomy (parse, matcher, read)
//! - `extract`: Source key extraction and argument classification
//! - `file_scanner`: Directory traversal for locale and source files
//! - `flatten`: Locale document flattening with context keys
//! - `key_set`: Insertion-ordered key set
//! - `key_usage`: Usage types (static / dynamic keys)
//! - `matcher`: Translation call matchers
//! - `options`: Option bundle shared by all steps
//! - `parsers`: JSON / YAML locale parsers
//! - `reconcile`: Unused and missed report computation
//! - `utils`: Glob matching and line lookup helpers

pub mod collect;
pub mod comments;
pub mod document;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod flatten;
pub mod key_set;
pub mod key_usage;
pub mod matcher;
pub mod options;
pub mod parsers;
pub mod reconcile;
pub mod utils;

pub use collect::{
    Collected, FileReader, FsReader, collect_missed_translations, collect_unused_translations,
};
pub use document::LocaleDocument;
pub use error::{CollectError, MatcherError, ParseError, ReadError};
pub use extract::extract;
pub use flatten::{LocaleKeySet, flatten};
pub use key_set::KeySet;
pub use key_usage::{DynamicKey, SourceUsage, UsageKey, UsageKind};
pub use matcher::{FnMatcher, RegexMatcher, TranslationKeyMatcher};
pub use options::Options;
pub use parsers::LocaleFileParser;
pub use reconcile::{
    FileUsages, MissedTranslation, MissedTranslations, UnusedTranslation, UnusedTranslations,
};
