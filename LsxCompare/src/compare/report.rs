//! Report rendering for comparison results

use std::io::Write;
use std::path::Path;

use crate::error::Result;

use super::types::Comparison;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per difference
    #[default]
    Text,
    /// A single pretty-printed JSON object
    Json,
}

/// Options for rendering a report
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Maximum number of differences listed
    pub limit: usize,
    pub format: ReportFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            limit: 500,
            format: ReportFormat::Text,
        }
    }
}

/// Render a report to a string
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    original: &Path,
    generated: &Path,
    result: &Comparison,
    options: &ReportOptions,
) -> Result<String> {
    let mut out = Vec::new();
    write_report(&mut out, original, generated, result, options)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Write the lines naming the two compared files
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_header<W: Write>(out: &mut W, original: &Path, generated: &Path) -> Result<()> {
    writeln!(out, "Comparing all regions in")?;
    writeln!(out, "  Original:  {}", original.display())?;
    writeln!(out, "  Generated: {}", generated.display())?;
    writeln!(out)?;
    Ok(())
}

/// Write a report for `result` to `out`
///
/// # Errors
/// Returns an error if writing or JSON serialization fails.
pub fn write_report<W: Write>(
    out: &mut W,
    original: &Path,
    generated: &Path,
    result: &Comparison,
    options: &ReportOptions,
) -> Result<()> {
    let shown = result.len().min(options.limit);
    let omitted = result.len() - shown;

    match options.format {
        ReportFormat::Json => {
            let report = serde_json::json!({
                "original": original.display().to_string(),
                "generated": generated.display().to_string(),
                "identical": result.is_empty(),
                "count": result.len(),
                "shown": shown,
                "omitted": omitted,
                "differences": &result.differences[..shown],
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        ReportFormat::Text => {
            write_header(out, original, generated)?;
            write_differences(out, result, options.limit)?;
        }
    }

    Ok(())
}

/// Write the summary line and up to `limit` differences, one per line
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_differences<W: Write>(out: &mut W, result: &Comparison, limit: usize) -> Result<()> {
    writeln!(out, "{}", result.summary())?;
    let shown = result.len().min(limit);
    for diff in &result.differences[..shown] {
        writeln!(out, "  {diff}")?;
    }
    if result.len() > shown {
        writeln!(out, "  ... and {} more.", result.len() - shown)?;
    }
    Ok(())
}
