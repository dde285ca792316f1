use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use bcgen_core::models::Pool;
use bcgen_io::read_barcodes_w_stdin;

/// Validate a barcode file against the adjacency and distance constraints.
///
/// # Returns
/// The number of barcodes in the file.
pub fn run_check(matches: &ArgMatches) -> Result<usize> {
    let file = matches
        .get_one::<String>("file")
        .context("A barcode file is required")?;

    let barcodes = read_barcodes_w_stdin(file)
        .with_context(|| format!("Failed to read barcode file: {}", file))?;

    let length = match matches.get_one::<usize>("length") {
        Some(length) => *length,
        None => barcodes
            .first()
            .map(|seq| seq.len())
            .with_context(|| format!("No barcodes found in {}", file))?,
    };

    Pool::verify(&barcodes, length).with_context(|| format!("{} failed validation", file))?;
    info!("{}: {} barcodes of length {} are valid", file, barcodes.len(), length);

    Ok(barcodes.len())
}
