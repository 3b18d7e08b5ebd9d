//! Translation call matchers.
//!
//! A matcher locates translation function calls in source text. Each span it
//! returns starts at the call head (`t`, `$t`, `i18n.t`, ...); the extractor
//! reads the key argument from the first `(` at or after the span start.

use std::{fmt, ops::Range, sync::LazyLock};

use regex::Regex;

use crate::core::MatcherError;

/// Matches `t(`, `tc(`, `$t(`, `$tc(`, `i18n.t(` and `_(` when not preceded by
/// an identifier character. Member calls such as `this.$t(` or
/// `i18n.global.t(` match at their last segment. Group 1 is the call head.
pub const DEFAULT_TRANSLATION_KEY_MATCHER: &str =
    r"(?m)(?:^|[^\w$])((?:\$?tc?|i18n\.t|_)\()";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_TRANSLATION_KEY_MATCHER).unwrap());

pub trait TranslationKeyMatcher: Send + Sync {
    fn find_calls(&self, text: &str) -> Result<Vec<Range<usize>>, MatcherError>;
}

/// Regex-based matcher. When the pattern has a capture group, group 1 marks the
/// call head; otherwise the whole match does.
#[derive(Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, MatcherError> {
        let regex = Regex::new(pattern).map_err(|source| MatcherError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl Default for RegexMatcher {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}

impl fmt::Debug for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegexMatcher").field(&self.regex.as_str()).finish()
    }
}

impl TranslationKeyMatcher for RegexMatcher {
    fn find_calls(&self, text: &str) -> Result<Vec<Range<usize>>, MatcherError> {
        Ok(self
            .regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.range())
            .collect())
    }
}

/// Matcher backed by a closure, for call shapes a regex cannot express.
pub struct FnMatcher<F>(pub F);

impl<F> TranslationKeyMatcher for FnMatcher<F>
where
    F: Fn(&str) -> Result<Vec<Range<usize>>, String> + Send + Sync,
{
    fn find_calls(&self, text: &str) -> Result<Vec<Range<usize>>, MatcherError> {
        (self.0)(text).map_err(MatcherError::Failed)
    }
}
