//! Locale document flattening.
//!
//! Turns a nested [`LocaleDocument`] into the set of dot-joined key paths it
//! declares. With context mode on, `greeting_male` also declares `greeting`,
//! since callers may reference the base key and pick the context at render
//! time.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::core::{KeySet, LocaleDocument, Options};

/// The keys declared by one locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleKeySet {
    pub locale_path: PathBuf,
    /// Raw keys and derived context bases, in declaration order.
    keys: KeySet,
    /// Keys physically present in the file, in declaration order.
    raw_keys: KeySet,
    /// Raw key -> context base it registered.
    context_bases: HashMap<String, String>,
}

impl LocaleKeySet {
    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn count(&self) -> usize {
        self.keys.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Keys present in the file itself, without derived context bases.
    pub fn raw_keys(&self) -> impl Iterator<Item = &str> {
        self.raw_keys.iter()
    }

    /// Every form under which a raw key may be referenced: the key itself and
    /// its context base, if one was registered.
    pub fn match_forms<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        std::iter::once(key).chain(self.context_bases.get(key).map(String::as_str))
    }
}

/// Flatten one parsed locale document into its key set.
pub fn flatten(locale_path: &Path, document: &LocaleDocument, options: &Options) -> LocaleKeySet {
    let mut paths = Vec::new();
    match document {
        LocaleDocument::Map(entries) if options.flat_translations => {
            paths.extend(entries.iter().map(|(key, _)| key.clone()));
        }
        _ => collect_paths(document, String::new(), &options.translation_separator, &mut paths),
    }

    let mut result = LocaleKeySet {
        locale_path: locale_path.to_path_buf(),
        keys: KeySet::new(),
        raw_keys: KeySet::new(),
        context_bases: HashMap::new(),
    };

    for key in paths {
        if options.is_excluded(&key) {
            continue;
        }

        let base = if options.context {
            context_base(&key, &options.translation_separator, &options.context_separator)
                .filter(|base| !options.is_excluded(base))
                .map(str::to_string)
        } else {
            None
        };

        result.keys.insert(key.clone());
        result.raw_keys.insert(key.clone());
        if let Some(base) = base {
            result.keys.insert(base.clone());
            result.context_bases.insert(key, base);
        }
    }

    result
}

fn collect_paths(value: &LocaleDocument, prefix: String, separator: &str, out: &mut Vec<String>) {
    match value {
        LocaleDocument::Map(entries) => {
            for (key, val) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}{}{}", prefix, separator, key)
                };
                collect_paths(val, path, separator, out);
            }
        }
        LocaleDocument::Text(_) => {
            if !prefix.is_empty() {
                out.push(prefix);
            }
        }
    }
}

/// The key with the context suffix of its last segment removed.
///
/// `"user.greeting_male"` -> `Some("user.greeting")`. Returns `None` when the
/// last segment has no separator or the base segment would be empty.
pub fn context_base<'a>(
    key: &'a str,
    translation_separator: &str,
    context_separator: &str,
) -> Option<&'a str> {
    if context_separator.is_empty() {
        return None;
    }

    let segment_start = if translation_separator.is_empty() {
        0
    } else {
        key.rfind(translation_separator)
            .map_or(0, |pos| pos + translation_separator.len())
    };

    let segment = &key[segment_start..];
    match segment.rfind(context_separator) {
        Some(pos) if pos > 0 => Some(&key[..segment_start + pos]),
        _ => None,
    }
}
