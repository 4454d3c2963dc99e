//! TSV decoding layer for reelnorm.
//!
//! The IMDb dumps are tab-separated, header-first, unquoted, and use a
//! literal `\N` token for missing values. This crate owns those facts so the
//! pipeline crates never touch a raw delimiter or sentinel:
//! - [`open_tsv`] opens a dump for typed, header-matched deserialization,
//! - [`ChunkedReader`] turns that into fixed-size row batches for the
//!   bounded-memory principals scan,
//! - [`create_table_writer`] opens a CSV output and writes its header row up
//!   front, so an empty table is still a valid header-only file.

pub mod error;
pub mod record;

pub use error::{Result, TableError};
pub use record::{NameRecord, PrincipalRecord, TitleRecord, MISSING_SENTINEL};

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Open an IMDb dump for reading.
///
/// A nonexistent path is the pipeline's single designed fatal condition and
/// maps to [`TableError::MissingInput`] with the path preserved for the
/// user-facing message.
pub fn open_tsv<P: AsRef<Path>>(path: P) -> Result<csv::Reader<File>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TableError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        // IMDb dumps are unquoted; a stray quote character is data.
        .quoting(false)
        // Larger internal buffer reduces syscalls on the multi-GB dumps.
        .buffer_capacity(1 << 20)
        .from_reader(file))
}

/// Open a CSV output table and write its header row immediately.
///
/// Rows are appended with `serialize`; because the header is written here and
/// the writer is built with `has_headers(false)`, a table that receives zero
/// rows still ends up as a header-only file rather than an empty one.
pub fn create_table_writer<P: AsRef<Path>>(
    path: P,
    header: &[&str],
) -> Result<csv::Writer<File>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    Ok(writer)
}

/// Iterator adapter yielding fixed-size batches of deserialized rows.
///
/// The final batch may be short; an exhausted source yields `None` rather
/// than a trailing empty batch. Peak memory is one batch of rows regardless
/// of total file size, which is the point.
pub struct ChunkedReader<R: Read, T: DeserializeOwned> {
    rows: csv::DeserializeRecordsIntoIter<R, T>,
    chunk_rows: usize,
}

impl<R: Read, T: DeserializeOwned> ChunkedReader<R, T> {
    pub fn new(reader: csv::Reader<R>, chunk_rows: usize) -> Self {
        Self {
            rows: reader.into_deserialize(),
            // A zero chunk size would never terminate; clamp rather than panic.
            chunk_rows: chunk_rows.max(1),
        }
    }
}

impl<R: Read, T: DeserializeOwned> Iterator for ChunkedReader<R, T> {
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.chunk_rows.min(1 << 16));
        while chunk.len() < self.chunk_rows {
            match self.rows.next() {
                Some(Ok(row)) => chunk.push(row),
                Some(Err(err)) => return Some(Err(err.into())),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(Ok(chunk))
        }
    }
}
