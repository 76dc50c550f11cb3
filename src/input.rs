use std::io::{BufRead, BufReader, Read};

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::ConvertError;

/// Reads every comma-separated row from `source` into memory.
///
/// Rows may have any number of fields. The csv parser drops blank lines, so a
/// blank first line is kept as an empty row: it is the row a header skip
/// removes.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<StringRecord>, ConvertError> {
    let mut source = BufReader::new(source);
    let leading_blank = matches!(source.fill_buf()?.first(), Some(b'\n' | b'\r'));

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    if leading_blank {
        rows.push(StringRecord::new());
    }
    for record in reader.records() {
        rows.push(record?);
    }

    debug!("read {} row(s)", rows.len());
    Ok(rows)
}
