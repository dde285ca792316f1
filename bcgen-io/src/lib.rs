//! # Input/Output utilities for barcode sets.
//!
//! This small crate handles the files around a generation run: writing a
//! finished set to a timestamped csv (optionally gzipped) after checking that
//! every barcode is unique, and reading such files back in.
//!
pub mod barcodes;
pub mod consts;
pub mod error;
pub mod export;

// re-expose core functions
pub use barcodes::*;
pub use consts::*;
pub use error::*;
pub use export::*;
