use std::path::PathBuf;

use thiserror::Error;

use crate::convert::FormatError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Format {
        row: usize,
        #[source]
        source: FormatError,
    },
}
