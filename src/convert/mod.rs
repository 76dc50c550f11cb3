mod assemble;
mod error;
mod point;
mod timestamp;

pub use assemble::assemble_document;
pub use error::FormatError;
pub use point::track_point_from_row;
pub use timestamp::millis_to_iso8601;
