use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing a table.
///
/// `MissingInput` is the one condition the pipeline is designed around: it is
/// reported with the offending path and aborts the whole run. `Io`/`Csv`
/// cover everything else that makes a file unreadable mid-stream.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("required input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
