//! Command dispatch.
//!
//! # Configuration Priority
//!
//! 1. CLI arguments (e.g., `--locales-path i18n`)
//! 2. `.i18n-unused.json` config file
//! 3. Built-in defaults

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use tracing::debug;

use super::{
    args::{Command, CommonArgs, MissedCommand, OutputFormat, UnusedCommand},
    exit_status::ExitStatus,
    report,
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, default_config_json, load_config},
    core::{
        FsReader, Options, collect_missed_translations, collect_unused_translations,
        file_scanner::{ScanOptions, scan_files},
    },
};

pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Unused(cmd) => unused(cmd),
        Command::Missed(cmd) => missed(cmd),
        Command::Init => init(),
    }
}

fn unused(cmd: UnusedCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let project = Project::load(common)?;

    let result = collect_unused_translations(
        &project.locale_files,
        &project.source_files,
        &project.options,
        &FsReader,
    )?;

    report::print_skipped(&result.skipped, common.verbose);
    match common.format {
        OutputFormat::Text => report::print_unused(&result.report),
        OutputFormat::Json => report::print_json(&result.report)?,
    }

    Ok(ExitStatus::from_found(result.report.total_count))
}

fn missed(cmd: MissedCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let project = Project::load(common)?;

    let result = collect_missed_translations(
        &project.locale_files,
        &project.source_files,
        &project.options,
        &FsReader,
    )?;

    report::print_skipped(&result.skipped, common.verbose);
    match common.format {
        OutputFormat::Text => report::print_missed(&result.report),
        OutputFormat::Json => report::print_json(&result.report)?,
    }

    Ok(ExitStatus::from_found(
        result.report.total_static_count + result.report.total_dynamic_count,
    ))
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)?;
    report::print_init();

    Ok(ExitStatus::Success)
}

/// Merged configuration turned into engine options plus the files to check.
struct Project {
    options: Options,
    locale_files: Vec<PathBuf>,
    source_files: Vec<PathBuf>,
}

impl Project {
    fn load(common: &CommonArgs) -> Result<Self> {
        let config_result = load_config(Path::new("."))?;

        // In verbose mode, inform user if using default config
        if common.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = apply_overrides(config_result.config, common);

        let locales_dir = Path::new(&config.locales_path);
        if !locales_dir.is_dir() {
            bail!("Locales directory does not exist: {}", locales_dir.display());
        }
        let src_dir = Path::new(&config.src_path);
        if !src_dir.is_dir() {
            bail!("Source directory does not exist: {}", src_dir.display());
        }

        let name_filter = config.locale_name_regex()?;
        let locales = scan_files(
            locales_dir,
            &ScanOptions {
                extensions: &config.locales_extensions,
                ignore_paths: &[],
                name_filter: name_filter.as_ref(),
            },
        );
        let sources = scan_files(
            src_dir,
            &ScanOptions {
                extensions: &config.src_extensions,
                ignore_paths: &config.ignore_paths,
                name_filter: None,
            },
        );

        debug!(
            locale_files = locales.files.len(),
            source_files = sources.files.len(),
            skipped = locales.skipped_count + sources.skipped_count,
            "scanned project"
        );

        Ok(Self {
            options: config.to_options()?,
            locale_files: locales.files,
            source_files: sources.files,
        })
    }
}

fn apply_overrides(mut config: Config, common: &CommonArgs) -> Config {
    if let Some(ref locales_path) = common.locales_path {
        config.locales_path = locales_path.to_string_lossy().to_string();
    }
    if let Some(ref src_path) = common.src_path {
        config.src_path = src_path.to_string_lossy().to_string();
    }
    if common.ignore_comments {
        config.ignore_comments = true;
    }
    config
}
