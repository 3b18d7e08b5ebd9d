//! Source key extraction.
//!
//! Scans one source file's text for translation calls and classifies each key
//! argument as static or dynamic. This is text-level extraction: the matcher
//! finds call heads, `argument` reads and classifies the first argument.

pub mod argument;

use std::{borrow::Cow, path::Path};

use crate::core::{
    DynamicKey, MatcherError, Options, SourceUsage, UsageKey, comments::strip_comments,
    utils::LineIndex,
};

pub use argument::{classify_argument, read_first_argument};

/// Extract every translation key usage from `source`, in source order.
///
/// Comments are stripped first when `options.ignore_comments` is set.
/// `transform_key` is applied before `exclude_translation_key`.
pub fn extract(
    file_path: &Path,
    source: &str,
    options: &Options,
) -> Result<Vec<SourceUsage>, MatcherError> {
    let text: Cow<'_, str> = if options.ignore_comments {
        Cow::Owned(strip_comments(source))
    } else {
        Cow::Borrowed(source)
    };

    let spans = options.translation_key_matcher.find_calls(&text)?;
    let line_index = LineIndex::new(&text);
    let mut usages = Vec::with_capacity(spans.len());

    for span in spans {
        let Some(open) = text.get(span.start..).and_then(|rest| rest.find('(')) else {
            continue;
        };
        let argument_start = span.start + open + 1;
        let Some(argument) = read_first_argument(&text[argument_start..]) else {
            continue;
        };
        let Some(key) = classify_argument(&argument) else {
            continue;
        };
        let Some(key) = normalize(key, options) else {
            continue;
        };

        usages.push(SourceUsage {
            file_path: file_path.to_path_buf(),
            line: line_index.line_of(span.start),
            key,
        });
    }

    Ok(usages)
}

/// Apply the key transform and the exclusion predicate.
fn normalize(key: UsageKey, options: &Options) -> Option<UsageKey> {
    let key = match key {
        UsageKey::Static(literal) => {
            let literal = options.transform(&literal);
            if literal.is_empty() {
                return None;
            }
            UsageKey::Static(literal)
        }
        UsageKey::Dynamic(DynamicKey { prefix, suffix }) => {
            let prefix = transform_part(&prefix, options);
            let suffix = transform_part(&suffix, options);
            UsageKey::Dynamic(DynamicKey { prefix, suffix })
        }
    };

    if options.is_excluded(&key.display_key()) {
        None
    } else {
        Some(key)
    }
}

fn transform_part(part: &str, options: &Options) -> String {
    if part.is_empty() {
        String::new()
    } else {
        options.transform(part)
    }
}
