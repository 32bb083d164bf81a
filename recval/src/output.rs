//! Output writers for check reports.
//!
//! The terminal result-file writer plus JSON and plain-text summary
//! formatters. Color/terminal formatting is intentionally excluded from
//! this module; that concern belongs to the CLI layer.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::CheckError;
use crate::report::CheckReport;

/// Write the `{variant, checksum}` result record as UTF-8 JSON,
/// overwriting `path`.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_result(path: &Path, report: &CheckReport) -> Result<(), CheckError> {
    let json = serde_json::to_string(&report.result_record())?;
    fs::write(path, json)?;
    Ok(())
}

/// Format a `CheckReport` as pretty JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> Result<(), CheckError> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> Result<(), CheckError> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  RECORD VALIDATION CHECKSUM")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Rows scanned:    {}", report.rows_scanned)?;
    writeln!(writer, "  Invalid fields:  {}", report.invalid_count())?;
    writeln!(writer, "  Variant:         {}", report.variant)?;
    writeln!(writer, "  Checksum:        {}", report.checksum)?;
    writeln!(writer)?;

    if !report.invalid_indices.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  INVALID ROW INDICES (adjusted, sorted)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        let indices: Vec<String> = report
            .invalid_indices
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(writer, "  [{}]", indices.join(", "))?;
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.invalid_indices.is_empty() {
        writeln!(
            writer,
            "\u{2713} All {} rows passed validation",
            report.rows_scanned
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} invalid field value(s) found",
            report.invalid_count()
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
