//! The two operations the engine exposes.
//!
//! Each operation loads every locale and source file, flattening and
//! extracting per file in parallel, joins all results in input order, then
//! reconciles. Unreadable files are skipped and reported back; parse and
//! matcher failures abort the whole operation.

mod reader;

use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::core::{
    CollectError, FileUsages, LocaleKeySet, MissedTranslations, Options, ParseError, ReadError,
    UnusedTranslations, extract, flatten, reconcile,
};

pub use reader::{FileReader, FsReader};

/// A report plus the files that had to be skipped to produce it.
#[derive(Debug)]
pub struct Collected<T> {
    pub report: T,
    pub skipped: Vec<ReadError>,
}

/// Per-file outcome before the join: a result, a recoverable skip, or a fatal
/// error.
type FileOutcome<T> = Result<Result<T, ReadError>, CollectError>;

/// Report declared keys that no source file references.
pub fn collect_unused_translations<L, S>(
    locale_paths: &[L],
    source_paths: &[S],
    options: &Options,
    reader: &dyn FileReader,
) -> Result<Collected<UnusedTranslations>, CollectError>
where
    L: AsRef<Path> + Sync,
    S: AsRef<Path> + Sync,
{
    let (locale_key_sets, mut skipped) = load_locale_key_sets(locale_paths, options, reader)?;
    let (files, skipped_sources) = extract_source_usages(source_paths, options, reader)?;
    skipped.extend(skipped_sources);

    let report = reconcile::collect_unused_translations(
        &locale_key_sets,
        files.iter().flat_map(|file| file.usages.iter()),
    );

    info!(
        locale_files = locale_key_sets.len(),
        source_files = files.len(),
        skipped = skipped.len(),
        unused = report.total_count,
        "collected unused translations"
    );

    Ok(Collected { report, skipped })
}

/// Report referenced keys that no locale file declares.
pub fn collect_missed_translations<L, S>(
    locale_paths: &[L],
    source_paths: &[S],
    options: &Options,
    reader: &dyn FileReader,
) -> Result<Collected<MissedTranslations>, CollectError>
where
    L: AsRef<Path> + Sync,
    S: AsRef<Path> + Sync,
{
    let (locale_key_sets, mut skipped) = load_locale_key_sets(locale_paths, options, reader)?;
    let (files, skipped_sources) = extract_source_usages(source_paths, options, reader)?;
    skipped.extend(skipped_sources);

    let report = reconcile::collect_missed_translations(&locale_key_sets, &files);

    info!(
        locale_files = locale_key_sets.len(),
        source_files = files.len(),
        skipped = skipped.len(),
        missed_static = report.total_static_count,
        missed_dynamic = report.total_dynamic_count,
        "collected missed translations"
    );

    Ok(Collected { report, skipped })
}

/// Read, parse and flatten every locale file, keeping input order.
pub fn load_locale_key_sets<P>(
    paths: &[P],
    options: &Options,
    reader: &dyn FileReader,
) -> Result<(Vec<LocaleKeySet>, Vec<ReadError>), CollectError>
where
    P: AsRef<Path> + Sync,
{
    let outcomes: Vec<FileOutcome<LocaleKeySet>> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let content = match read(reader, path) {
                Ok(content) => content,
                Err(err) => return Ok(Err(err)),
            };

            let document = options
                .locale_file_parser
                .parse(path, &content)
                .map_err(|source| ParseError {
                    path: path.to_path_buf(),
                    source,
                })?;

            let key_set = flatten(path, &document, options);
            debug!(path = %path.display(), keys = key_set.count(), "flattened locale file");
            Ok(Ok(key_set))
        })
        .collect();

    join(outcomes)
}

/// Read every source file and extract its key usages, keeping input order.
pub fn extract_source_usages<P>(
    paths: &[P],
    options: &Options,
    reader: &dyn FileReader,
) -> Result<(Vec<FileUsages>, Vec<ReadError>), CollectError>
where
    P: AsRef<Path> + Sync,
{
    let outcomes: Vec<FileOutcome<FileUsages>> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let content = match read(reader, path) {
                Ok(content) => content,
                Err(err) => return Ok(Err(err)),
            };

            let usages =
                extract(path, &content, options).map_err(|source| CollectError::Matcher {
                    path: path.to_path_buf(),
                    source,
                })?;

            debug!(path = %path.display(), usages = usages.len(), "extracted source file");
            Ok(Ok(FileUsages::new(path, usages)))
        })
        .collect();

    join(outcomes)
}

fn read(reader: &dyn FileReader, path: &Path) -> Result<String, ReadError> {
    reader.read_to_string(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "skipping unreadable file");
        ReadError {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Split outcomes into results and skipped files. The first fatal error in
/// input order wins, so failures are reported deterministically.
fn join<T>(outcomes: Vec<FileOutcome<T>>) -> Result<(Vec<T>, Vec<ReadError>), CollectError> {
    let mut results = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();

    for outcome in outcomes {
        match outcome? {
            Ok(result) => results.push(result),
            Err(err) => skipped.push(err),
        }
    }

    Ok((results, skipped))
}
