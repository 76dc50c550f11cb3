use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("missing field {index}: row has only {found} field(s)")]
    MissingField { index: usize, found: usize },
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("timestamp out of range: {0} seconds since epoch")]
    TimestampOutOfRange(i64),
}
