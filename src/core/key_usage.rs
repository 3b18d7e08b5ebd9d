//! Key usage types produced by the source extractor.

use std::{fmt, path::PathBuf};

/// Whether a usage names its key with a literal or builds it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageKind {
    Static,
    Dynamic,
}

/// A key built at runtime: `` t(`item_${id}`) `` is prefix `item_`, suffix ``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicKey {
    pub prefix: String,
    pub suffix: String,
}

impl DynamicKey {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// No literal part is known, so no declared key can be narrowed down.
    pub fn is_opaque(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// `key` starts with the prefix and ends with the suffix, with at least one
    /// character left over for the interpolated part.
    pub fn matches(&self, key: &str) -> bool {
        key.len() > self.prefix.len() + self.suffix.len()
            && key.starts_with(&self.prefix)
            && key.ends_with(&self.suffix)
    }

    /// Reported form, e.g. `item_*`.
    pub fn pattern(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DynamicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

/// The key argument of one translation call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageKey {
    Static(String),
    Dynamic(DynamicKey),
}

impl UsageKey {
    pub fn kind(&self) -> UsageKind {
        match self {
            UsageKey::Static(_) => UsageKind::Static,
            UsageKey::Dynamic(_) => UsageKind::Dynamic,
        }
    }

    /// The literal for static keys, the `prefix*suffix` pattern for dynamic ones.
    pub fn display_key(&self) -> String {
        match self {
            UsageKey::Static(key) => key.clone(),
            UsageKey::Dynamic(dynamic) => dynamic.pattern(),
        }
    }
}

/// One translation key usage found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUsage {
    pub file_path: PathBuf,
    /// 1-based line of the call.
    pub line: usize,
    pub key: UsageKey,
}

impl SourceUsage {
    pub fn kind(&self) -> UsageKind {
        self.key.kind()
    }
}
