use std::io;
use thiserror::Error;

use bcgen_core::errors::BarcodeError;

/// Error type for bcgen-io operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Could not open the barcode file for reading.
    #[error("Can't read file: {0}")]
    FileRead(String),

    /// A line of a barcode file is not a valid sequence.
    #[error("Invalid barcode on line {line}: {source}")]
    InvalidBarcode {
        line: u64,
        #[source]
        source: BarcodeError,
    },
}

/// Result type alias for bcgen-io operations.
pub type Result<T> = std::result::Result<T, ExportError>;
