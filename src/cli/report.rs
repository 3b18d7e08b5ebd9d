//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow the engine to be used as a library.
//! Every `print_*` function has a `*_to` variant taking a writer for tests.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::config::CONFIG_FILE_NAME;
use crate::core::{MissedTranslations, ReadError, UnusedTranslations};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const SEPARATOR: &str = "<<<==========================================================>>>";

pub fn print_unused(report: &UnusedTranslations) {
    print_unused_to(report, &mut io::stdout().lock());
}

pub fn print_unused_to<W: Write>(report: &UnusedTranslations, writer: &mut W) {
    for translation in report.translations.iter().filter(|t| t.count > 0) {
        let _ = writeln!(writer, "{}", SEPARATOR.dimmed());
        let _ = writeln!(
            writer,
            "Unused translations in: {}",
            translation.locale_path.display().to_string().bold()
        );
        let _ = writeln!(writer, "Unused translations count: {}", translation.count);
        write_table(writer, "Translation", &translation.keys);
    }

    if report.total_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused translations found".green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} Total unused translations count: {}",
        FAILURE_MARK.red(),
        report.total_count.to_string().red().bold()
    );
    let _ = writeln!(
        writer,
        "Can free up memory: ~{:.2}kb",
        report.estimated_size_kb()
    );
}

pub fn print_missed(report: &MissedTranslations) {
    print_missed_to(report, &mut io::stdout().lock());
}

pub fn print_missed_to<W: Write>(report: &MissedTranslations, writer: &mut W) {
    for translation in report.translations.iter().filter(|t| !t.is_empty()) {
        let _ = writeln!(writer, "{}", SEPARATOR.dimmed());
        let _ = writeln!(
            writer,
            "Missed translations in: {}",
            translation.file_path.display().to_string().bold()
        );
        let _ = writeln!(
            writer,
            "Missed static translations count: {}",
            translation.static_count
        );
        let _ = writeln!(
            writer,
            "Missed dynamic translations count: {}",
            translation.dynamic_count
        );

        if !translation.static_keys.is_empty() {
            let _ = writeln!(writer, "{}", "Static keys:".cyan());
            write_table(writer, "Key", &translation.static_keys);
        }
        if !translation.dynamic_keys.is_empty() {
            let _ = writeln!(writer, "{}", "Dynamic keys:".yellow());
            write_table(writer, "Key", &translation.dynamic_keys);
        }
    }

    if report.total_static_count == 0 && report.total_dynamic_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No missed translations found".green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} Total missed static translations count: {}",
        FAILURE_MARK.red(),
        report.total_static_count.to_string().red().bold()
    );
    let _ = writeln!(
        writer,
        "{} Total missed dynamic translations count: {}",
        FAILURE_MARK.red(),
        report.total_dynamic_count.to_string().yellow().bold()
    );
}

/// Print any serializable report as pretty JSON on stdout.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    print_json_to(report, &mut io::stdout().lock())
}

pub fn print_json_to<T: Serialize, W: Write>(report: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report).context("Failed to serialize report")?;
    writeln!(writer)?;
    Ok(())
}

/// Print a warning for every file skipped because it could not be read.
pub fn print_skipped(skipped: &[ReadError], verbose: bool) {
    print_skipped_to(skipped, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_to<W: Write>(skipped: &[ReadError], verbose: bool, writer: &mut W) {
    if skipped.is_empty() {
        return;
    }

    if verbose {
        for err in skipped {
            let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), err);
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            skipped.len(),
            "-v".cyan()
        );
    }
}

pub fn print_init() {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

/// Write `rows` as a single-column table with an index column.
fn write_table<W: Write>(writer: &mut W, header: &str, rows: &[String]) {
    let index_width = rows.len().saturating_sub(1).to_string().len().max("#".len());
    let value_width = rows
        .iter()
        .map(|row| UnicodeWidthStr::width(row.as_str()))
        .chain([UnicodeWidthStr::width(header)])
        .max()
        .unwrap_or_default();

    let border = format!(
        "+{}+{}+",
        "-".repeat(index_width + 2),
        "-".repeat(value_width + 2)
    );

    let _ = writeln!(writer, "{}", border);
    let _ = writeln!(
        writer,
        "| {:<iw$} | {} |",
        "#",
        pad(header, value_width).bold(),
        iw = index_width
    );
    let _ = writeln!(writer, "{}", border);
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            writer,
            "| {:>iw$} | {} |",
            index,
            pad(row, value_width),
            iw = index_width
        );
    }
    let _ = writeln!(writer, "{}", border);
}

/// Pad by display width; `format!` width counts chars, not columns.
fn pad(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(value));
    format!("{}{}", value, " ".repeat(padding))
}

// ============================================================
// Tests
// ============================================================
