use crate::gpx::WriteOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Drop the first input row, usually a header.
    pub skip_first_line: bool,
    /// Indent the generated document.
    pub pretty: bool,
}

impl ConvertOptions {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            pretty: self.pretty,
        }
    }
}
