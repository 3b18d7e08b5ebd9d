//! i18n-unused - find unused and missed translation keys
//!
//! Reconciles the keys declared in locale files (JSON or YAML) against the
//! translation calls found in application source code, reporting declared
//! keys nothing uses and used keys no locale file declares.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report rendering)
//! - `config`: Configuration file loading and parsing
//! - `core`: Reconciliation engine (flatten, extract, reconcile)

pub mod cli;
pub mod config;
pub mod core;
