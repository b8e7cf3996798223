//! Top-level label run: load every label, then print the complete ones.
//!
//! Loading is all-or-nothing. A file that cannot be read, cannot be parsed,
//! or holds any row without exactly six fields fails before anything is
//! written. Once loaded, labels with an empty required field are skipped
//! without an error, and the run still succeeds.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use log::debug;

use crate::{io_utils, label::Label};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub total: usize,
    pub printed: usize,
    pub skipped: usize,
}

pub fn labels_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<Label>> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| Label::try_from(row).with_context(|| format!("record {}", idx + 1)))
        .collect()
}

pub fn load_labels(path: &Path) -> Result<Vec<Label>> {
    io_utils::read_csv(path)
        .and_then(labels_from_rows)
        .with_context(|| format!("could not parse labels from csv {path:?}"))
}

/// Writes each valid label followed by a blank line, in input order.
pub fn emit_labels<W: Write>(labels: &[Label], out: &mut W) -> Result<EmitSummary> {
    let mut summary = EmitSummary {
        total: labels.len(),
        ..EmitSummary::default()
    };
    for (idx, label) in labels.iter().enumerate() {
        if let Err(reason) = label.validate() {
            debug!("Skipping record {}: {reason}", idx + 1);
            summary.skipped += 1;
            continue;
        }
        write!(out, "{label}\n\n").context("Writing label output")?;
        summary.printed += 1;
    }
    Ok(summary)
}

pub fn print_valid_labels<W: Write>(path: &Path, out: &mut W) -> Result<EmitSummary> {
    let labels = load_labels(path)?;
    debug!("Loaded {} label(s) from {:?}", labels.len(), path);
    emit_labels(&labels, out)
}
