//! Converts `timestamp_ms,lat,lon` CSV rows into a single-track GPX 1.1
//! document.

use std::io::{Read, Write};

use log::info;

pub mod config;
pub mod convert;
mod error;
pub mod gpx;
pub mod input;

pub use config::ConvertOptions;
pub use error::ConvertError;

/// Reads all of `source` and assembles the document without writing anything.
pub fn build_document<R: Read>(
    source: R,
    options: &ConvertOptions,
) -> Result<gpx::Gpx, ConvertError> {
    let rows = input::read_rows(source)?;
    convert::assemble_document(&rows, options.skip_first_line)
}

/// Converts `source` into a GPX document written to `sink`.
///
/// Nothing reaches `sink` unless every row converts.
pub fn convert<R: Read, W: Write>(
    source: R,
    sink: W,
    options: &ConvertOptions,
) -> Result<W, ConvertError> {
    let document = build_document(source, options)?;
    write_output(&document, sink, options)
}

/// Serializes an assembled document into `sink` and flushes it.
pub fn write_output<W: Write>(
    document: &gpx::Gpx,
    sink: W,
    options: &ConvertOptions,
) -> Result<W, ConvertError> {
    let mut sink = gpx::write_document(document, sink, options.write_options())?;
    sink.flush()?;

    info!("wrote {} track point(s)", document.points().len());
    Ok(sink)
}
