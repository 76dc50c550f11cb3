pub const GPX_VERSION: &str = "1.1";
pub const CREATOR: &str = "csv2gpx";
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str =
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd";

/// A GPX document with exactly one track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gpx {
    pub track: Track,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub segment: TrackSegment,
}

/// Points in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// Coordinates are kept as the text they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPoint {
    pub lat: String,
    pub lon: String,
    pub time: String,
}

impl Gpx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_point(&mut self, point: TrackPoint) {
        self.track.segment.points.push(point);
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.track.segment.points
    }
}
