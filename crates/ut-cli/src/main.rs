mod format;
mod report;

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use ut_core::{CURRENT_YEAR, CivilDateTime, now_unix_secs, unix_to_iso8601};

use crate::report::{Report, ReportConfig};

#[derive(Parser, Debug, Default)]
#[command(
    name = "ut",
    version,
    about = "Universal time calculator: elapsed years on cosmic and divine timescales"
)]
struct Cli {
    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,

    /// Reference year for years-since-creation figures
    #[arg(long, value_name = "YEAR", default_value_t = CURRENT_YEAR)]
    anchor_year: i32,

    /// Use this Unix timestamp instead of the system clock
    #[arg(long, value_name = "UNIX_SECS", hide = true)]
    at: Option<u64>,

    /// Include the scripture references section
    #[arg(long)]
    references: bool,
}

impl Cli {
    /// Parse arguments, falling back to defaults when they don't parse.
    /// `--help` and `--version` still print and exit.
    fn parse_lenient() -> (Self, Option<clap::Error>) {
        match Self::try_parse() {
            Ok(cli) => (cli, None),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => (
                Self {
                    anchor_year: CURRENT_YEAR,
                    ..Self::default()
                },
                Some(e),
            ),
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let (cli, parse_error) = Cli::parse_lenient();
    init_tracing(cli.verbose);

    if let Some(e) = parse_error {
        let reason = e.to_string();
        let reason = reason.lines().next().unwrap_or_default();
        tracing::warn!("ignoring command-line arguments: {reason}");
    }

    let secs = match cli.at {
        Some(secs) => secs,
        None => now_unix_secs().context("failed to read system clock")?,
    };
    let now = CivilDateTime::from_unix_secs(secs).context("failed to read system clock")?;
    tracing::info!(
        time = %unix_to_iso8601(secs),
        anchor_year = cli.anchor_year,
        "generating report"
    );

    let report = Report::new(ReportConfig {
        now,
        anchor_year: cli.anchor_year,
        references: cli.references,
    });

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report.render(&mut out).context("failed to write report")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
