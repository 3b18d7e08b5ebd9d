//! Reconciliation of declared and referenced keys.
//!
//! Both reports are pure functions of the flattened locale key sets and the
//! extracted usages. Matching is uniform: a key is referenced when it equals a
//! static usage or is matched by a dynamic usage's prefix/suffix pattern.
//! Key-shape normalization (context bases, transforms) happens before this.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::core::{DynamicKey, KeySet, LocaleKeySet, SourceUsage, UsageKey};

/// Unused keys of one locale file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedTranslation {
    pub locale_path: PathBuf,
    pub keys: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedTranslations {
    pub translations: Vec<UnusedTranslation>,
    pub total_count: usize,
}

impl UnusedTranslations {
    /// Approximate size of the unused keys in KiB.
    pub fn estimated_size_kb(&self) -> f64 {
        let bytes: usize = self
            .translations
            .iter()
            .map(|t| ", ".len() + t.keys.join(", ").len())
            .sum();
        bytes as f64 / 1024.0
    }
}

/// Missed keys of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedTranslation {
    pub file_path: PathBuf,
    pub static_keys: Vec<String>,
    pub dynamic_keys: Vec<String>,
    pub static_count: usize,
    pub dynamic_count: usize,
}

impl MissedTranslation {
    pub fn is_empty(&self) -> bool {
        self.static_count == 0 && self.dynamic_count == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedTranslations {
    pub translations: Vec<MissedTranslation>,
    pub total_static_count: usize,
    pub total_dynamic_count: usize,
}

/// Usages extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUsages {
    pub file_path: PathBuf,
    pub usages: Vec<SourceUsage>,
}

impl FileUsages {
    pub fn new(file_path: impl AsRef<Path>, usages: Vec<SourceUsage>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            usages,
        }
    }
}

/// Lookup structure over all referenced keys.
#[derive(Debug, Default)]
pub struct UsageIndex {
    static_keys: HashSet<String>,
    /// Non-opaque dynamic patterns; opaque ones cannot narrow any key.
    patterns: Vec<DynamicKey>,
}

impl UsageIndex {
    pub fn new<'a>(usages: impl IntoIterator<Item = &'a SourceUsage>) -> Self {
        let mut index = UsageIndex::default();
        let mut seen_patterns: HashSet<&DynamicKey> = HashSet::new();
        let mut patterns = Vec::new();

        for usage in usages {
            match &usage.key {
                UsageKey::Static(key) => {
                    index.static_keys.insert(key.clone());
                }
                UsageKey::Dynamic(dynamic) => {
                    if !dynamic.is_opaque() && seen_patterns.insert(dynamic) {
                        patterns.push(dynamic.clone());
                    }
                }
            }
        }

        index.patterns = patterns;
        index
    }

    pub fn is_used(&self, key: &str) -> bool {
        self.static_keys.contains(key) || self.patterns.iter().any(|p| p.matches(key))
    }
}

/// Declared keys with no static or dynamic reference, per locale file.
///
/// Only keys physically present in a file are candidates; a key counts as
/// used when any of its match forms (the key or its context base) is used.
pub fn collect_unused_translations<'a>(
    locale_key_sets: &[LocaleKeySet],
    usages: impl IntoIterator<Item = &'a SourceUsage>,
) -> UnusedTranslations {
    let index = UsageIndex::new(usages);

    let translations: Vec<UnusedTranslation> = locale_key_sets
        .iter()
        .map(|key_set| {
            let keys: Vec<String> = key_set
                .raw_keys()
                .filter(|key| !key_set.match_forms(key).any(|form| index.is_used(form)))
                .map(str::to_string)
                .collect();
            UnusedTranslation {
                locale_path: key_set.locale_path.clone(),
                count: keys.len(),
                keys,
            }
        })
        .collect();

    let total_count = translations.iter().map(|t| t.count).sum();
    UnusedTranslations {
        translations,
        total_count,
    }
}

/// Referenced keys with no declaration in any locale file, per source file.
///
/// Static keys must be declared exactly (context bases count as declared);
/// dynamic keys are missed when no declared key matches their pattern. Opaque
/// dynamic keys are never missed.
pub fn collect_missed_translations(
    locale_key_sets: &[LocaleKeySet],
    files: &[FileUsages],
) -> MissedTranslations {
    let declared: KeySet = locale_key_sets
        .iter()
        .flat_map(|key_set| key_set.keys().iter())
        .collect();

    let translations: Vec<MissedTranslation> = files
        .iter()
        .map(|file| missed_in_file(file, &declared))
        .collect();

    let total_static_count = translations.iter().map(|t| t.static_count).sum();
    let total_dynamic_count = translations.iter().map(|t| t.dynamic_count).sum();

    MissedTranslations {
        translations,
        total_static_count,
        total_dynamic_count,
    }
}

fn missed_in_file(file: &FileUsages, declared: &KeySet) -> MissedTranslation {
    let mut static_keys = KeySet::new();
    let mut dynamic_keys = KeySet::new();

    for usage in &file.usages {
        match &usage.key {
            UsageKey::Static(key) => {
                if !declared.contains(key) {
                    static_keys.insert(key.as_str());
                }
            }
            UsageKey::Dynamic(dynamic) => {
                if dynamic.is_opaque() {
                    continue;
                }
                if !declared.iter().any(|key| dynamic.matches(key)) {
                    dynamic_keys.insert(dynamic.pattern());
                }
            }
        }
    }

    MissedTranslation {
        file_path: file.file_path.clone(),
        static_count: static_keys.len(),
        dynamic_count: dynamic_keys.len(),
        static_keys: static_keys.into_vec(),
        dynamic_keys: dynamic_keys.into_vec(),
    }
}
