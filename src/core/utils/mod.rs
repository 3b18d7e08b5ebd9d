//! Utility functions shared by the engine.
//!
//! ## Module Structure
//!
//! - `glob_matcher`: Segment-aware glob matching for translation keys
//! - `line_index`: Byte offset to line number lookups

pub mod glob_matcher;
pub mod line_index;

pub use glob_matcher::*;
pub use line_index::*;
