//! `compare-lsx` CLI - compare an original LSX file with a regenerated one

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::compare::{self, CompareOptions, ReportFormat, ReportOptions};
use crate::formats::lsx;

const USAGE: &str = "Usage: compare-lsx <original.lsx> <generated.lsx>";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "compare-lsx")]
#[command(version = crate::VERSION)]
#[command(about = "Report semantic differences between two LSX files", long_about = None)]
struct Cli {
    /// The original LSX file
    original: Option<PathBuf>,

    /// The generated LSX file to check against the original
    generated: Option<PathBuf>,

    /// Further arguments are accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    /// Maximum number of differences to list
    #[arg(long, default_value_t = 500)]
    limit: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Decimal places compared for float, vector and matrix values
    #[arg(long, default_value_t = 6)]
    precision: usize,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Run the `compare-lsx` CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let (Some(original), Some(generated)) = (&cli.original, &cli.generated) else {
        println!("{USAGE}");
        return Ok(());
    };

    let report_options = ReportOptions {
        limit: cli.limit,
        format: match cli.format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        },
    };
    let compare_options = CompareOptions {
        precision: cli.precision,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if report_options.format == ReportFormat::Text {
        compare::write_header(&mut out, original, generated)?;
    }

    let docs = lsx::read_lsx(original).and_then(|o| lsx::read_lsx(generated).map(|g| (o, g)));
    let (orig_doc, gen_doc) = match docs {
        Ok(docs) => docs,
        Err(e) if e.is_parse_error() => {
            writeln!(out, "Error parsing XML: {e}")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let result = compare::compare_documents(&orig_doc, &gen_doc, &compare_options);
    tracing::debug!("{} difference(s) found", result.len());

    match report_options.format {
        ReportFormat::Text => compare::write_differences(&mut out, &result, report_options.limit)?,
        ReportFormat::Json => {
            compare::write_report(&mut out, original, generated, &result, &report_options)?;
        }
    }
    out.flush()?;

    Ok(())
}
