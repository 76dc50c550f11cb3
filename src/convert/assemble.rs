use csv::StringRecord;
use log::{debug, trace};

use super::point::track_point_from_row;
use crate::gpx::Gpx;
use crate::ConvertError;

/// Builds the single-track document from `rows`, in order.
///
/// With `skip_first_line` the first row is dropped whatever it holds. Rows
/// without fields produce no point. The first row that cannot be mapped
/// aborts the whole assembly.
pub fn assemble_document(
    rows: &[StringRecord],
    skip_first_line: bool,
) -> Result<Gpx, ConvertError> {
    let mut gpx = Gpx::new();

    for (index, row) in rows.iter().enumerate().skip(usize::from(skip_first_line)) {
        if row.is_empty() {
            trace!("row {}: empty, skipped", index + 1);
            continue;
        }
        let point = track_point_from_row(row).map_err(|source| ConvertError::Format {
            row: index + 1,
            source,
        })?;
        gpx.push_point(point);
    }

    debug!(
        "assembled {} point(s) from {} row(s)",
        gpx.points().len(),
        rows.len()
    );
    Ok(gpx)
}
