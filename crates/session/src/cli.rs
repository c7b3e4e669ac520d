//! The `fridgekeep` command: ingest a recognized receipt, then export the inventory.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::config::SessionConfig;
use crate::receipt_reader::PlainTextReader;
use crate::session::Session;

/// Ingest a recognized receipt into a fresh session and export it as CSV.
#[derive(Debug, Parser)]
#[command(name = "fridgekeep", version)]
pub struct Args {
    /// JSON session config; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Receipt text, one product per line. Read from stdin when omitted.
    #[arg(long)]
    pub receipt: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Directory to write the export into. Written to stdout when omitted.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Human-readable logs instead of JSON. Logs always go to stderr.
    #[arg(long)]
    pub pretty: bool,
}

/// Run one invocation. `input` stands in for stdin, `output` for stdout.
///
/// Only the CSV export is ever written to `output`.
pub fn run(args: &Args, mut input: impl Read, mut output: impl Write) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SessionConfig::from_path(path)?,
        None => SessionConfig::default(),
    };
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let receipt = match &args.receipt {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read receipt at {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            input
                .read_to_end(&mut buf)
                .context("failed to read receipt from stdin")?;
            buf
        }
    };

    let mut session = Session::new(config);
    session.ingest_receipt(&PlainTextReader, &receipt, today);

    let counts = session.counts(today);
    tracing::info!(
        total = counts.total,
        expiring_today = counts.expiring_today,
        expiring_soon = counts.expiring_soon,
        "inventory summary"
    );

    let suggestions = session.suggestions();
    if suggestions.is_empty() {
        tracing::info!("no suggestions, add more products");
    }
    for suggestion in suggestions {
        tracing::info!(suggestion, "recipe idea");
    }

    let export = session.export(today).context("failed to render export")?;
    match &args.out_dir {
        Some(dir) => {
            let path = dir.join(&export.file_name);
            std::fs::write(&path, export.contents.as_bytes())
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            tracing::info!(path = %path.display(), "export written");
        }
        None => {
            output
                .write_all(export.contents.as_bytes())
                .context("failed to write export to stdout")?;
            output.flush().context("failed to flush stdout")?;
        }
    }

    Ok(())
}
