use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::types::{
    Gpx, TrackPoint, CREATOR, GPX_NAMESPACE, GPX_VERSION, SCHEMA_LOCATION, XSI_NAMESPACE,
};
use crate::ConvertError;

const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Indent nested elements instead of writing them back to back.
    pub pretty: bool,
}

/// Serializes `gpx` into `sink` and hands the sink back unflushed.
pub fn write_document<W: Write>(
    gpx: &Gpx,
    sink: W,
    options: WriteOptions,
) -> Result<W, ConvertError> {
    let mut writer = if options.pretty {
        Writer::new_with_indent(sink, b' ', INDENT_WIDTH)
    } else {
        Writer::new(sink)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if !options.pretty {
        writer.get_mut().write_all(b"\n")?;
    }

    let root = BytesStart::new("gpx").with_attributes([
        ("version", GPX_VERSION),
        ("creator", CREATOR),
        ("xmlns", GPX_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
    ]);
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("trk")))?;
    writer.write_event(Event::Start(BytesStart::new("trkseg")))?;

    for point in gpx.points() {
        write_point(&mut writer, point)?;
    }

    writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
    writer.write_event(Event::End(BytesEnd::new("trk")))?;
    writer.write_event(Event::End(BytesEnd::new("gpx")))?;

    let mut sink = writer.into_inner();
    sink.write_all(b"\n")?;
    Ok(sink)
}

fn write_point<W: Write>(writer: &mut Writer<W>, point: &TrackPoint) -> Result<(), ConvertError> {
    let trkpt = BytesStart::new("trkpt")
        .with_attributes([("lat", point.lat.as_str()), ("lon", point.lon.as_str())]);
    writer.write_event(Event::Start(trkpt))?;
    writer.write_event(Event::Start(BytesStart::new("time")))?;
    writer.write_event(Event::Text(BytesText::new(&point.time)))?;
    writer.write_event(Event::End(BytesEnd::new("time")))?;
    writer.write_event(Event::End(BytesEnd::new("trkpt")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: &str, lon: &str, time: &str) -> TrackPoint {
        TrackPoint {
            lat: lat.to_string(),
            lon: lon.to_string(),
            time: time.to_string(),
        }
    }

    fn render(gpx: &Gpx, pretty: bool) -> String {
        let out = write_document(gpx, Vec::new(), WriteOptions { pretty }).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_compact_document() {
        let mut gpx = Gpx::new();
        gpx.push_point(point("45.0", "7.0", "2021-01-01T00:00:00Z"));

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<gpx version=\"1.1\" creator=\"csv2gpx\" ",
            "xmlns=\"http://www.topografix.com/GPX/1/1\" ",
            "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
            "xsi:schemaLocation=\"http://www.topografix.com/GPX/1/1 ",
            "http://www.topografix.com/GPX/1/1/gpx.xsd\">",
            "<trk><trkseg>",
            "<trkpt lat=\"45.0\" lon=\"7.0\"><time>2021-01-01T00:00:00Z</time></trkpt>",
            "</trkseg></trk></gpx>\n",
        );
        assert_eq!(render(&gpx, false), expected);
    }

    #[test]
    fn writes_empty_segment() {
        let xml = render(&Gpx::new(), false);
        assert!(xml.contains("<trk><trkseg></trkseg></trk></gpx>"));
        assert!(!xml.contains("<trkpt"));
    }

    #[test]
    fn escapes_attribute_values() {
        let mut gpx = Gpx::new();
        gpx.push_point(point("4<5", "\"7\"&", "t"));

        let xml = render(&gpx, false);
        assert!(xml.contains("lat=\"4&lt;5\""));
        assert!(xml.contains("lon=\"&quot;7&quot;&amp;\""));
    }

    #[derive(Debug)]
    struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failure_is_io_error() {
        let err = write_document(&Gpx::new(), FullSink, WriteOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }

    #[test]
    fn pretty_output_indents_elements() {
        let mut gpx = Gpx::new();
        gpx.push_point(point("45.0", "7.0", "2021-01-01T00:00:00Z"));

        let xml = render(&gpx, true);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gpx "));
        assert!(xml.contains("\n  <trk>"));
        assert!(xml.contains("\n      <trkpt lat=\"45.0\" lon=\"7.0\">"));
        assert!(xml.contains("<time>2021-01-01T00:00:00Z</time>"));
        assert!(xml.ends_with("</gpx>\n"));
    }
}
