use std::{fmt, sync::Arc};

use crate::core::{
    matcher::{RegexMatcher, TranslationKeyMatcher},
    parsers::{ExtensionParser, LocaleFileParser},
};

pub type KeyPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;
pub type KeyTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

pub const DEFAULT_CONTEXT_SEPARATOR: &str = "_";
pub const DEFAULT_TRANSLATION_SEPARATOR: &str = ".";

/// Everything the flattener, extractor and reconciler need to agree on.
///
/// The same `exclude_translation_key` instance is applied to declared and
/// referenced keys, so exclusion is symmetric between the two reports.
#[derive(Clone)]
pub struct Options {
    /// Register the context-stripped form of `base{sep}suffix` keys.
    pub context: bool,
    pub context_separator: String,
    /// Separator joining nested locale keys into paths.
    pub translation_separator: String,
    /// Top-level locale keys are already full paths.
    pub flat_translations: bool,
    /// Strip comments from source text before matching.
    pub ignore_comments: bool,
    pub exclude_translation_key: KeyPredicate,
    pub transform_key: Option<KeyTransform>,
    pub translation_key_matcher: Arc<dyn TranslationKeyMatcher>,
    pub locale_file_parser: Arc<dyn LocaleFileParser>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            context: true,
            context_separator: DEFAULT_CONTEXT_SEPARATOR.to_string(),
            translation_separator: DEFAULT_TRANSLATION_SEPARATOR.to_string(),
            flat_translations: false,
            ignore_comments: false,
            exclude_translation_key: Arc::new(|_: &str| false),
            transform_key: None,
            translation_key_matcher: Arc::new(RegexMatcher::default()),
            locale_file_parser: Arc::new(ExtensionParser),
        }
    }
}

impl Options {
    pub fn is_excluded(&self, key: &str) -> bool {
        (self.exclude_translation_key)(key)
    }

    pub fn transform(&self, key: &str) -> String {
        match &self.transform_key {
            Some(transform) => transform(key),
            None => key.to_string(),
        }
    }

    pub fn with_exclude(mut self, predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.exclude_translation_key = Arc::new(predicate);
        self
    }

    pub fn with_transform(
        mut self,
        transform: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.transform_key = Some(Arc::new(transform));
        self
    }

    pub fn with_matcher(mut self, matcher: impl TranslationKeyMatcher + 'static) -> Self {
        self.translation_key_matcher = Arc::new(matcher);
        self
    }

    pub fn with_parser(mut self, parser: impl LocaleFileParser + 'static) -> Self {
        self.locale_file_parser = Arc::new(parser);
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("context", &self.context)
            .field("context_separator", &self.context_separator)
            .field("translation_separator", &self.translation_separator)
            .field("flat_translations", &self.flat_translations)
            .field("ignore_comments", &self.ignore_comments)
            .field("transform_key", &self.transform_key.is_some())
            .finish_non_exhaustive()
    }
}
