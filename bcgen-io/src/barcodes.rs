use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use bcgen_core::models::Sequence;
use bcgen_core::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin};

use crate::error::{ExportError, Result};

pub trait BarcodeWrite {
    ///
    /// Write barcodes to disk as a csv file, one per line, no header
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write barcodes to disk as a csv.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

fn write_records<W: Write>(sequences: &[Sequence], writer: W) -> Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for seq in sequences {
        writer.write_record([seq.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

fn create_with_parents(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

impl BarcodeWrite for [Sequence] {
    fn write_csv<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_with_parents(path.as_ref())?;
        let mut out = write_records(self, BufWriter::new(file))?;
        out.flush()?;
        Ok(())
    }

    fn write_csv_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let file = create_with_parents(path.as_ref())?;
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        let encoder = write_records(self, encoder)?;
        encoder.finish()?.flush()?;
        Ok(())
    }
}

fn parse_barcodes<R: Read>(reader: R) -> Result<Vec<Sequence>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut sequences = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(0).unwrap_or("").trim();
        if field.is_empty() {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
        let seq = Sequence::try_from(field)
            .map_err(|source| ExportError::InvalidBarcode { line, source })?;
        sequences.push(seq);
    }

    Ok(sequences)
}

///
/// Read a barcode file written by [BarcodeWrite], or any file with one
/// sequence per line. Gzipped files are detected by their `.gz` extension.
/// Blank lines are skipped.
///
pub fn read_barcodes<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>> {
    let reader = get_dynamic_reader(path.as_ref())
        .map_err(|e| ExportError::FileRead(format!("{:#}", e)))?;
    parse_barcodes(reader)
}

///
/// Same as [read_barcodes], but `-` reads from stdin.
///
pub fn read_barcodes_w_stdin(file_path_str: &str) -> Result<Vec<Sequence>> {
    let reader = get_dynamic_reader_w_stdin(file_path_str)
        .map_err(|e| ExportError::FileRead(format!("{:#}", e)))?;
    parse_barcodes(reader)
}
