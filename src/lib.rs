pub mod cli;
pub mod format;
pub mod io_utils;
pub mod label;
pub mod print;

use std::{
    env,
    io::{self, Write},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::cli::Cli;

pub use crate::{
    format::format_label,
    label::{Label, LabelError, LabelField},
    print::{EmitSummary, load_labels, print_valid_labels},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("mailing_labels", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    debug!("Printing labels from '{}'", cli.input.display());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let summary = print_valid_labels(&cli.input, &mut out)?;
    out.flush().context("Flushing labels to stdout")?;

    info!(
        "Printed {} of {} label(s) ({} skipped as incomplete)",
        summary.printed, summary.total, summary.skipped
    );
    Ok(())
}
