use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{info, warn};

use bcgen_core::models::Sequence;

use crate::barcodes::BarcodeWrite;
use crate::consts::{CSV_EXT, GZ_EXT, TIMESTAMP_FORMAT};
use crate::error::Result;

///
/// True when no sequence occurs twice.
///
pub fn verify_unique(sequences: &[Sequence]) -> bool {
    let mut seen: HashSet<&Sequence> = HashSet::with_capacity(sequences.len());
    sequences.iter().all(|s| seen.insert(s))
}

///
/// File name for a generated set: `n=<count>-<length>nt-<timestamp>.csv`.
///
pub fn barcode_file_name(
    count: usize,
    length: usize,
    timestamp: &NaiveDateTime,
    gzip: bool,
) -> String {
    let mut name = format!(
        "n={}-{}nt-{}.{}",
        count,
        length,
        timestamp.format(TIMESTAMP_FORMAT),
        CSV_EXT
    );
    if gzip {
        name.push('.');
        name.push_str(GZ_EXT);
    }
    name
}

///
/// Path inside `dir` named after the current local time.
///
pub fn timestamped_path<P: AsRef<Path>>(
    dir: P,
    count: usize,
    length: usize,
    gzip: bool,
) -> PathBuf {
    let now = Local::now().naive_local();
    dir.as_ref().join(barcode_file_name(count, length, &now, gzip))
}

///
/// Write a finished barcode set to a timestamped file in `dir`.
///
/// Uniqueness is verified first; if it fails nothing is written and `None`
/// is returned.
///
/// # Arguments
/// - dir: output directory, created if missing
/// - sequences: the barcodes
/// - length: barcode length, used in the file name
/// - gzip: compress the output
///
pub fn export_barcodes<P: AsRef<Path>>(
    dir: P,
    sequences: &[Sequence],
    length: usize,
    gzip: bool,
) -> Result<Option<PathBuf>> {
    if !verify_unique(sequences) {
        warn!("Barcodes are not unique, skipping export");
        return Ok(None);
    }

    let path = timestamped_path(dir, sequences.len(), length, gzip);
    match gzip {
        true => sequences.write_csv_gz(&path)?,
        false => sequences.write_csv(&path)?,
    }
    info!("Wrote {} barcodes to {}", sequences.len(), path.display());

    Ok(Some(path))
}
