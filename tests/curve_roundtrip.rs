//! Integration tests for encoding and decoding animation curves.

use gmdata::core::{GmRecord, GmVersion};
use gmdata::io::{Reader, Source, StringTable, Writer};
use gmdata::model::{AnimationCurve, Channel, ChannelFunction, GraphType, Point};

use std::io::Write as _;
use tempfile::NamedTempFile;

fn sample_curve(strings: &mut StringTable) -> AnimationCurve {
    AnimationCurve {
        name: strings.intern("curve_walk_speed"),
        graph_type: GraphType::Unknown1,
        channels: vec![
            Channel {
                name: strings.intern("x"),
                function: ChannelFunction::Linear,
                iterations: 1,
                points: vec![
                    Point { x: 0.0, value: 0.25, bezier_x0: 0.1, bezier_y0: 0.2, bezier_x1: 0.3, bezier_y1: 0.4 },
                    Point { x: 0.5, value: 0.75, bezier_x0: 0.5, bezier_y0: 0.6, bezier_x1: 0.7, bezier_y1: 0.8 },
                ],
            },
            Channel {
                name: strings.intern("y"),
                function: ChannelFunction::Smooth,
                iterations: 3,
                points: vec![Point { x: 1.0, value: -1.0, bezier_x0: 0.9, ..Point::default() }],
            },
        ],
    }
}

#[test]
fn test_roundtrip_bezier_layout() {
    let mut strings = StringTable::new();
    let curve = sample_curve(&mut strings);
    let version = GmVersion::new(2, 3, 1);

    let mut writer = Writer::new(version);
    curve.write(&mut writer).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    let mut reader = Reader::new(&bytes, version);
    let back = AnimationCurve::read(&mut reader).expect("Failed to read curve");

    assert_eq!(back, curve);
    assert_eq!(reader.remaining(), 0, "Decode must consume every written byte");
}

#[test]
fn test_roundtrip_legacy_layout() {
    let mut strings = StringTable::new();
    let version = GmVersion::new(2, 0, 0);

    // Handles cannot survive a legacy round-trip; start from a curve
    // without them.
    let mut curve = sample_curve(&mut strings);
    for channel in &mut curve.channels {
        for point in &mut channel.points {
            *point = Point { x: point.x, value: point.value, ..Point::default() };
        }
    }

    let mut writer = Writer::new(version);
    curve.write(&mut writer).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    let mut reader = Reader::new(&bytes, version);
    let back = AnimationCurve::read(&mut reader).expect("Failed to read curve");

    assert_eq!(back, curve);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_roundtrip_without_name() {
    let mut strings = StringTable::new();
    let curve = AnimationCurve {
        name: gmdata::io::StringRef::default(),
        ..sample_curve(&mut strings)
    };
    let version = GmVersion::new(2, 3, 1);

    let mut writer = Writer::new(version);
    curve.write_opts(&mut writer, false).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    let mut reader = Reader::new(&bytes, version);
    let back = AnimationCurve::read_opts(&mut reader, false).expect("Failed to read curve");

    assert_eq!(back, curve);
}

#[test]
fn test_unknown_enum_values_roundtrip() {
    let mut strings = StringTable::new();
    let curve = AnimationCurve {
        name: strings.intern("odd"),
        graph_type: GraphType::Other(41),
        channels: vec![Channel {
            name: strings.intern("c"),
            function: ChannelFunction::Other(17),
            iterations: 0,
            points: vec![],
        }],
    };
    let version = GmVersion::new(2, 3, 1);

    let mut writer = Writer::new(version);
    curve.write(&mut writer).expect("Failed to write curve");

    let bytes = writer.into_bytes();
    let mut reader = Reader::new(&bytes, version);
    let back = AnimationCurve::read(&mut reader).expect("Failed to read curve");

    assert_eq!(back.graph_type, GraphType::Other(41));
    assert_eq!(back.channels[0].function, ChannelFunction::Other(17));
}

#[test]
fn test_scan_consumes_exactly_what_write_produced() {
    let mut strings = StringTable::new();
    let curve = sample_curve(&mut strings);
    let version = GmVersion::new(2, 3, 1);

    let mut writer = Writer::new(version);
    curve.write(&mut writer).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    // 1 curve + 2 channels + 3 points.
    let mut reader = Reader::new(&bytes, version);
    let total = AnimationCurve::scan(&mut reader).expect("Failed to scan curve");
    assert_eq!(total, 6);
    assert_eq!(reader.abs_position(), bytes.len() as u64);
}

#[test]
fn test_scan_then_decode_same_session() {
    let mut strings = StringTable::new();
    let curve = sample_curve(&mut strings);

    let mut writer = Writer::new(GmVersion::new(2, 3, 1));
    curve.write(&mut writer).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    // The pre-scan raises the session version (bezier_x0 of the first
    // point is non-zero), and the decode that follows sees the promotion.
    let mut reader = Reader::new(&bytes, GmVersion::new(2, 3, 0));
    AnimationCurve::scan(&mut reader).expect("Failed to scan curve");
    assert!(reader.version().is_at_least(2, 3, 1));

    reader.set_abs_position(0).expect("Failed to rewind");
    let back = AnimationCurve::read(&mut reader).expect("Failed to read curve");
    assert_eq!(back, curve);
}

#[test]
fn test_legacy_two_point_end_to_end() {
    // One channel, two points, legacy layout. The count-only pass sees the
    // zero placeholder, then the second point's non-zero x, and leaves the
    // version alone.
    let mut strings = StringTable::new();
    let curve = AnimationCurve {
        name: strings.intern("fade"),
        graph_type: GraphType::Unknown0,
        channels: vec![Channel {
            name: strings.intern("alpha"),
            function: ChannelFunction::Linear,
            iterations: 1,
            points: vec![
                Point { x: 0.25, value: 1.0, ..Point::default() },
                Point { x: 1.0, value: 0.0, ..Point::default() },
            ],
        }],
    };

    let mut writer = Writer::new(GmVersion::new(2, 0, 0));
    curve.write(&mut writer).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    let mut reader = Reader::new(&bytes, GmVersion::new(2, 0, 0));
    let total = AnimationCurve::scan(&mut reader).expect("Failed to scan curve");
    assert_eq!(total, 4, "1 curve + 1 channel + 2 points");
    assert_eq!(reader.abs_position(), bytes.len() as u64);
    assert_eq!(*reader.version(), GmVersion::new(2, 0, 0), "No promotion");

    reader.set_abs_position(0).expect("Failed to rewind");
    let back = AnimationCurve::read(&mut reader).expect("Failed to read curve");
    assert_eq!(back, curve);
}

#[test]
fn test_truncated_input_fails() {
    let mut strings = StringTable::new();
    let curve = sample_curve(&mut strings);
    let version = GmVersion::new(2, 3, 1);

    let mut writer = Writer::new(version);
    curve.write(&mut writer).expect("Failed to write curve");
    let bytes = writer.into_bytes();

    let truncated = &bytes[..bytes.len() - 5];
    let mut reader = Reader::new(truncated, version);
    let err = AnimationCurve::read(&mut reader).unwrap_err();
    assert!(matches!(err, gmdata::Error::UnexpectedEof(_)));
}

#[test]
fn test_parse_from_file_source() {
    let mut strings = StringTable::new();
    let curve = sample_curve(&mut strings);
    let version = GmVersion::new(2, 3, 1);

    let mut writer = Writer::new(version);
    curve.write(&mut writer).expect("Failed to write curve");

    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    temp.write_all(writer.as_bytes()).expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");

    let source = Source::open(temp.path()).expect("Failed to open source");
    let mut reader = Reader::new(&source, version);
    let back = AnimationCurve::read(&mut reader).expect("Failed to read curve");

    assert_eq!(back, curve);
}
