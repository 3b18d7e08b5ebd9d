use std::path::{Path, PathBuf};

use glob::Pattern;
use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

/// Ignore entries with `*` or `?` are glob patterns, others literal paths.
fn is_path_glob(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// What to keep while walking a directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanOptions<'a> {
    /// File extensions to keep, without the dot.
    pub extensions: &'a [String],
    /// Literal path prefixes (relative to the root) or glob patterns to skip.
    pub ignore_paths: &'a [String],
    /// When set, the file name must match.
    pub name_filter: Option<&'a Regex>,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

pub fn scan_files(root: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let mut result = ScanResult::default();

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in options.ignore_paths {
        if is_path_glob(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        } else {
            // Literal path mode: prefix match against the joined path
            literal_ignore_paths.push(root.join(p));
        }
    }

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!(error = %e, "cannot access path");
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && is_wanted_file(path, options) {
            result.files.push(path.to_path_buf());
        }
    }

    result.files.sort();
    result
}

fn is_wanted_file(path: &Path, options: &ScanOptions<'_>) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| options.extensions.iter().any(|wanted| wanted == ext));
    if !has_extension {
        return false;
    }

    match options.name_filter {
        Some(filter) => path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| filter.is_match(name)),
        None => true,
    }
}
