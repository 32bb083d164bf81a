// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use recval::{CheckConfig, DEFAULT_VARIANT, IndexMode, check_file, output};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default input table path.
const DEFAULT_INPUT: &str = "21.csv";
/// Default result file path, overwritten on every run.
const DEFAULT_OUTPUT: &str = "result.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "recval",
    version,
    about = "Validate record fields and checksum the invalid rows"
)]
struct Cli {
    /// Input table (`;`-delimited, UTF-16LE, header row).
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Result file to overwrite with the `{variant, checksum}` record.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Variant identifier stamped into the result record.
    #[arg(long, default_value_t = DEFAULT_VARIANT)]
    variant: u32,

    /// Record unshifted 0-based row indices instead of the legacy
    /// off-by-one adjustment. Checksums are not comparable across modes.
    #[arg(long)]
    zero_based: bool,

    /// Summary format printed to stdout.
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let cli = Cli::parse();
    let mut config = CheckConfig::default();
    config.variant = cli.variant;
    config.index_mode = if cli.zero_based {
        IndexMode::ZeroBased
    } else {
        IndexMode::Legacy
    };

    let report = check_file(&cli.input, &config)
        .with_context(|| format!("checking {}", cli.input.display()))?;
    info!(
        rows = report.rows_scanned,
        invalid = report.invalid_count(),
        checksum = %report.checksum,
        "check complete"
    );

    output::write_result(&cli.output, &report)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Human => output::write_human(&report, &mut stdout)?,
        Format::Json => output::write_json(&report, &mut stdout)?,
    }

    Ok(())
}
