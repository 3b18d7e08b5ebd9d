use std::{
    fs,
    path::{Path, PathBuf},
    slice,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{
    Options, RegexMatcher,
    options::{DEFAULT_CONTEXT_SEPARATOR, DEFAULT_TRANSLATION_SEPARATOR},
    utils::{is_glob_pattern, matches_key_glob},
};

pub const CONFIG_FILE_NAME: &str = ".i18n-unused.json";

/// `excludeKey` accepts a single pattern or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ExcludeKey {
    One(String),
    Many(Vec<String>),
}

impl ExcludeKey {
    pub fn patterns(&self) -> &[String] {
        match self {
            ExcludeKey::One(pattern) => slice::from_ref(pattern),
            ExcludeKey::Many(patterns) => patterns,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_path")]
    pub locales_path: String,
    #[serde(default = "default_locales_extensions")]
    pub locales_extensions: Vec<String>,
    /// Regex the locale file name must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_name_resolver: Option<String>,
    #[serde(default = "default_src_path")]
    pub src_path: String,
    #[serde(default = "default_src_extensions")]
    pub src_extensions: Vec<String>,
    #[serde(default)]
    pub ignore_paths: Vec<String>,
    /// Regex locating translation calls; capture group 1 marks the call head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_key_matcher: Option<String>,
    #[serde(default = "default_translation_separator")]
    pub translation_separator: String,
    #[serde(default = "default_translation_context_separator")]
    pub translation_context_separator: String,
    #[serde(default = "default_context")]
    pub context: bool,
    #[serde(default)]
    pub ignore_comments: bool,
    #[serde(default)]
    pub flat_translations: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_key: Option<ExcludeKey>,
    /// Prefix removed from referenced keys before matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_key_prefix: Option<String>,
}

fn default_locales_path() -> String {
    "locales".to_string()
}

fn default_locales_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

fn default_src_path() -> String {
    ".".to_string()
}

fn default_src_extensions() -> Vec<String> {
    ["js", "ts", "jsx", "tsx", "vue"].map(String::from).to_vec()
}

fn default_translation_separator() -> String {
    DEFAULT_TRANSLATION_SEPARATOR.to_string()
}

fn default_translation_context_separator() -> String {
    DEFAULT_CONTEXT_SEPARATOR.to_string()
}

fn default_context() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_path: default_locales_path(),
            locales_extensions: default_locales_extensions(),
            locale_name_resolver: None,
            src_path: default_src_path(),
            src_extensions: default_src_extensions(),
            ignore_paths: Vec::new(),
            translation_key_matcher: None,
            translation_separator: default_translation_separator(),
            translation_context_separator: default_translation_context_separator(),
            context: default_context(),
            ignore_comments: false,
            flat_translations: false,
            exclude_key: None,
            strip_key_prefix: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, invalid regexes, empty
    /// extension lists or empty separators.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignore_paths {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignorePaths': \"{}\"", pattern)
                })?;
            }
        }

        if self.locales_extensions.is_empty() {
            bail!("'localesExtensions' must list at least one extension");
        }
        if self.src_extensions.is_empty() {
            bail!("'srcExtensions' must list at least one extension");
        }
        if self.translation_separator.is_empty() {
            bail!("'translationSeparator' must not be empty");
        }
        if self.context && self.translation_context_separator.is_empty() {
            bail!("'translationContextSeparator' must not be empty when 'context' is enabled");
        }

        self.locale_name_regex()?;
        self.matcher()?;

        Ok(())
    }

    pub fn locale_name_regex(&self) -> Result<Option<Regex>> {
        self.locale_name_resolver
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).with_context(|| {
                    format!("Invalid regex in 'localeNameResolver': \"{}\"", pattern)
                })
            })
            .transpose()
    }

    fn matcher(&self) -> Result<RegexMatcher> {
        match &self.translation_key_matcher {
            Some(pattern) => RegexMatcher::new(pattern).context("Invalid 'translationKeyMatcher'"),
            None => Ok(RegexMatcher::default()),
        }
    }

    /// Build the engine option bundle from this configuration.
    pub fn to_options(&self) -> Result<Options> {
        let mut options = Options {
            context: self.context,
            context_separator: self.translation_context_separator.clone(),
            translation_separator: self.translation_separator.clone(),
            flat_translations: self.flat_translations,
            ignore_comments: self.ignore_comments,
            ..Options::default()
        }
        .with_matcher(self.matcher()?);

        if let Some(exclude) = &self.exclude_key {
            let patterns = exclude.patterns().to_vec();
            let separator = self.translation_separator.clone();
            options = options.with_exclude(move |key| is_excluded_key(&patterns, &separator, key));
        }

        if let Some(prefix) = self.strip_key_prefix.clone().filter(|p| !p.is_empty()) {
            options = options.with_transform(move |key| {
                key.strip_prefix(prefix.as_str()).unwrap_or(key).to_string()
            });
        }

        Ok(options)
    }
}

/// Entries with `*` match whole key segments; other entries exclude any key
/// containing them.
fn is_excluded_key(patterns: &[String], separator: &str, key: &str) -> bool {
    patterns.iter().any(|pattern| {
        if is_glob_pattern(pattern) {
            matches_key_glob(pattern, key, separator)
        } else {
            key.contains(pattern.as_str())
        }
    })
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
