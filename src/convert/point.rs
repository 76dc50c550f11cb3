use csv::StringRecord;

use super::timestamp::millis_to_iso8601;
use super::FormatError;
use crate::gpx::TrackPoint;

const TIMESTAMP_FIELD: usize = 0;
const LAT_FIELD: usize = 1;
const LON_FIELD: usize = 2;

/// Builds a point from `timestamp_ms,lat,lon[,...]`. Coordinates are not
/// validated; fields past the third are ignored.
pub fn track_point_from_row(row: &StringRecord) -> Result<TrackPoint, FormatError> {
    let field = |index: usize| {
        row.get(index).ok_or(FormatError::MissingField {
            index,
            found: row.len(),
        })
    };

    let lat = field(LAT_FIELD)?.to_string();
    let lon = field(LON_FIELD)?.to_string();
    let time = millis_to_iso8601(field(TIMESTAMP_FIELD)?)?;

    Ok(TrackPoint { lat, lon, time })
}
