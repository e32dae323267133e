//! Decode/encode tests for the mount row format


use geometa_core::codec::{decode, encode, Header};
use geometa_core::error::{Error, ErrorKind};
use geometa_core::mount::Mount;
use geometa_core::types::{open_end, SpanEnd, OPEN_END};
use test_data_gen::*;

#[test]
fn test_decode_single_row() {
    let rows = rows_for(&["NZLD"]);
    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();

    assert_eq!(mounts.len(), 1);
    let m = &mounts[0];
    assert_eq!(m.reference.code, "NZLD");
    assert_eq!(m.reference.network, "LI");
    assert_eq!(m.reference.name, "Test Mount");
    assert_eq!(m.point.latitude, -41.2);
    assert_eq!(m.point.longitude, 173.3);
    assert_eq!(m.point.elevation, 25.5);
    assert_eq!(m.point.datum, "WGS84");
    assert_eq!(m.description, "concrete pillar");
    assert_eq!(m.span.start, ts(2000, 1, 1, 0, 0, 0));
    assert_eq!(m.span.end, SpanEnd::Open);
}

#[test]
fn test_decode_keeps_row_order() {
    let rows = rows_for(&["NZLD", "ALEX", "BLUF"]);
    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();
    assert_eq!(codes(&mounts), vec!["NZLD", "ALEX", "BLUF"]);
}

#[test]
fn test_header_only_and_empty_input() {
    let only_header = vec![header()];
    let mounts: Vec<Mount> = decode(&only_header, Header::Present).unwrap();
    assert!(mounts.is_empty());

    let empty: Vec<Vec<String>> = vec![];
    let mounts: Vec<Mount> = decode(&empty, Header::Present).unwrap();
    assert!(mounts.is_empty());
}

#[test]
fn test_headerless_input() {
    let rows = vec![row("ALEX"), row("BLUF")];
    let mounts: Vec<Mount> = decode(&rows, Header::Absent).unwrap();
    assert_eq!(codes(&mounts), vec!["ALEX", "BLUF"]);
}

#[test]
fn test_header_row_is_never_parsed() {
    // The header has text in the numeric columns; skipping it must not fail.
    let rows = vec![header(), row("ALEX")];
    assert!(decode::<Mount, _>(&rows, Header::Present).is_ok());
    assert!(decode::<Mount, _>(&rows, Header::Absent).is_err());
}

#[test]
fn test_strings_are_trimmed() {
    let rows = vec![
        header(),
        cells(&[
            "  NZLD ",
            " LI",
            "Nelson  ",
            "-41.2",
            "173.3",
            "25.5",
            " WGS84 ",
            "\troof pillar\t",
            "2000-01-01T00:00:00Z",
            "9999-01-01T00:00:00Z",
        ]),
    ];
    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();
    let m = &mounts[0];
    assert_eq!(m.reference.code, "NZLD");
    assert_eq!(m.reference.network, "LI");
    assert_eq!(m.reference.name, "Nelson");
    assert_eq!(m.point.datum, "WGS84");
    assert_eq!(m.description, "roof pillar");
}

#[test]
fn test_too_few_fields_rejected() {
    let mut short = row("BLUF");
    short.pop();
    let rows = vec![header(), row("ALEX"), short];

    let err = decode::<Mount, _>(&rows, Header::Present).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaArity);
    match err {
        Error::Arity {
            kind,
            row,
            expected,
            found,
        } => {
            assert_eq!(kind, "mount");
            assert_eq!(row, 3);
            assert_eq!(expected, 10);
            assert_eq!(found, 9);
        }
        other => panic!("Expected Arity error, got {:?}", other),
    }
}

#[test]
fn test_too_many_fields_rejected() {
    let mut long = row("BLUF");
    long.push("extra".to_string());
    let rows = vec![header(), long];

    let err = decode::<Mount, _>(&rows, Header::Present).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SchemaArity);
    assert!(err.to_string().contains("incorrect number of mount fields"));
}

#[test]
fn test_non_numeric_latitude_rejected_before_times() {
    // Both the latitude and the start time are bad; latitude must win.
    let mut bad = row("ALEX");
    bad[3] = "abc".to_string();
    bad[8] = "not a time".to_string();
    let rows = vec![header(), bad];

    let err = decode::<Mount, _>(&rows, Header::Present).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumericFormat);
    match err {
        Error::Numeric {
            row, column, value, ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Latitude");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected Numeric error, got {:?}", other),
    }
}

#[test]
fn test_numeric_fields_checked_in_order() {
    let mut bad = row("ALEX");
    bad[4] = "east".to_string();
    bad[5] = "high".to_string();
    let rows = vec![header(), bad];

    match decode::<Mount, _>(&rows, Header::Present).unwrap_err() {
        Error::Numeric { column, .. } => assert_eq!(column, "Longitude"),
        other => panic!("Expected Numeric error, got {:?}", other),
    }
}

#[test]
fn test_non_finite_numbers_rejected() {
    for value in ["inf", "-inf", "NaN", "infinity"] {
        let mut bad = row("ALEX");
        bad[5] = value.to_string();
        let rows = vec![header(), bad];
        let err = decode::<Mount, _>(&rows, Header::Present).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericFormat, "value {}", value);
    }
}

#[test]
fn test_out_of_range_coordinates_accepted() {
    let mut odd = row("ALEX");
    odd[3] = "123.5".to_string();
    odd[4] = "-720".to_string();
    let rows = vec![header(), odd];

    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();
    assert_eq!(mounts[0].point.latitude, 123.5);
    assert_eq!(mounts[0].point.longitude, -720.0);
}

#[test]
fn test_bad_timestamps_rejected() {
    let mut bad_start = row("ALEX");
    bad_start[8] = "2000-01-01 00:00:00".to_string();
    let err = decode::<Mount, _>(&[header(), bad_start], Header::Present).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TemporalFormat);
    match err {
        Error::Temporal { column, .. } => assert_eq!(column, "Start Time"),
        other => panic!("Expected Temporal error, got {:?}", other),
    }

    let mut bad_end = row("ALEX");
    bad_end[9] = "tomorrow".to_string();
    match decode::<Mount, _>(&[header(), bad_end], Header::Present).unwrap_err() {
        Error::Temporal { column, value, .. } => {
            assert_eq!(column, "End Time");
            assert_eq!(value, "tomorrow");
        }
        other => panic!("Expected Temporal error, got {:?}", other),
    }
}

#[test]
fn test_timestamps_must_match_layout_exactly() {
    for value in [
        "2000-1-1T0:0:0Z",
        " 2000-01-01T00:00:00Z",
        "2000-01-01T00:00:00Z ",
        "+2000-01-01T00:00:00Z",
        "2000-01-01T00:00:60Z",
    ] {
        let mut bad = row("ALEX");
        bad[8] = value.to_string();
        let err = decode::<Mount, _>(&[header(), bad], Header::Present).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TemporalFormat, "start {:?}", value);

        let mut bad = row("ALEX");
        bad[9] = value.to_string();
        match decode::<Mount, _>(&[header(), bad], Header::Present).unwrap_err() {
            Error::Temporal { column, .. } => assert_eq!(column, "End Time", "end {:?}", value),
            other => panic!("Expected Temporal error for {:?}, got {:?}", value, other),
        }
    }
}

#[test]
fn test_zero_padded_early_year_accepted() {
    let mut early = row("ALEX");
    early[8] = "0999-12-31T23:59:59Z".to_string();
    let mounts: Vec<Mount> = decode(&[header(), early.clone()], Header::Present).unwrap();
    assert_eq!(encode(&mounts)[1], early);
}

#[test]
fn test_failed_decode_returns_nothing() {
    let mut bad = row("ZZZZ");
    bad[3] = "abc".to_string();
    let rows = vec![header(), row("ALEX"), row("BLUF"), bad];

    let result: Result<Vec<Mount>, _> = decode(&rows, Header::Present);
    assert!(result.is_err());
}

#[test]
fn test_duplicate_codes_preserved() {
    let mut second = row("ALEX");
    second[8] = "2010-06-01T12:00:00Z".to_string();
    let rows = vec![header(), row("ALEX"), second];

    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();
    assert_eq!(codes(&mounts), vec!["ALEX", "ALEX"]);
    assert_eq!(mounts[1].span.start, ts(2010, 6, 1, 12, 0, 0));
}

#[test]
fn test_encode_header_and_rows() {
    let mounts = vec![open_mount("NZLD"), open_mount("ALEX")];
    let rows = encode(&mounts);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], header());
    assert_eq!(rows[1][0], "NZLD");
    assert_eq!(rows[2][0], "ALEX");
    assert_eq!(
        rows[1],
        cells(&[
            "NZLD",
            "LI",
            "NZLD Mount",
            "-41.2",
            "173.3",
            "25.5",
            "WGS84",
            "concrete pillar",
            "2000-01-01T00:00:00Z",
            "9999-01-01T00:00:00Z",
        ])
    );
}

#[test]
fn test_encode_empty_list_is_header_only() {
    let rows = encode::<Mount>(&[]);
    assert_eq!(rows, vec![header()]);
}

#[test]
fn test_encode_trims_strings() {
    let mut m = open_mount("ALEX");
    m.reference.code = " ALEX ".to_string();
    m.description = "  pillar\n".to_string();
    let rows = encode(&[m]);
    assert_eq!(rows[1][0], "ALEX");
    assert_eq!(rows[1][7], "pillar");
}

#[test]
fn test_floats_render_shortest_without_exponent() {
    let m = mount("ALEX", 0.1 + 0.2, 1e-7, 1e21, SpanEnd::Open);
    let rows = encode(&[m]);
    assert_eq!(rows[1][3], "0.30000000000000004");
    assert_eq!(rows[1][4], "0.0000001");
    assert_eq!(rows[1][5], "1000000000000000000000");
}

#[test]
fn test_round_trip() {
    let mounts = vec![
        mount("NZLD", -41.2, 173.3, 25.5, SpanEnd::Open),
        mount("ALEX", 0.1 + 0.2, -0.0, 1e300, SpanEnd::At(ts(2015, 3, 4, 5, 6, 7))),
        mount("BLUF", -46.5853, 168.2893, 5e-324, SpanEnd::At(ts(1999, 12, 31, 23, 59, 59))),
        mount("ALEX", 90.0, -180.0, -12.75, SpanEnd::Open),
    ];

    let decoded: Vec<Mount> = decode(&encode(&mounts), Header::Present).unwrap();
    assert_eq!(decoded, mounts);
    for (a, b) in decoded.iter().zip(&mounts) {
        assert_eq!(a.point.latitude.to_bits(), b.point.latitude.to_bits());
        assert_eq!(a.point.longitude.to_bits(), b.point.longitude.to_bits());
        assert_eq!(a.point.elevation.to_bits(), b.point.elevation.to_bits());
    }
}

#[test]
fn test_canonicalization_is_idempotent() {
    let rows = vec![
        header(),
        cells(&[
            " NZLD", "LI ", " Nelson ", "-41.20", "173.300", "+25.5", "WGS84 ", " pillar ",
            "2000-01-01T00:00:00Z", "2001-01-01T00:00:00Z",
        ]),
    ];
    let first: Vec<Mount> = decode(&rows, Header::Present).unwrap();
    let once = encode(&first);
    let second: Vec<Mount> = decode(&once, Header::Present).unwrap();
    let twice = encode(&second);

    assert_eq!(first, second);
    assert_eq!(once, twice);
    assert_eq!(once[1][3], "-41.2");
    assert_eq!(once[1][5], "25.5");
}

#[test]
fn test_open_span_sentinel_round_trips() {
    let rows = rows_for(&["ALEX"]);
    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();

    assert!(mounts[0].span.is_open());
    assert_eq!(mounts[0].span.end_time(), open_end());

    let encoded = encode(&mounts);
    assert_eq!(encoded[1][9], OPEN_END);
    assert_eq!(encoded, rows);
}

#[test]
fn test_closed_span_decodes_to_instant() {
    let mut closed = row("ALEX");
    closed[9] = "2012-02-29T10:20:30Z".to_string();
    let mounts: Vec<Mount> = decode(&[header(), closed], Header::Present).unwrap();

    assert!(!mounts[0].span.is_open());
    assert_eq!(mounts[0].span.end, SpanEnd::At(ts(2012, 2, 29, 10, 20, 30)));
}

#[test]
fn test_decode_accepts_str_cells() {
    let rows = vec![
        HEADER.to_vec(),
        vec![
            "ALEX", "LI", "Alexandra", "-45.2", "169.4", "300", "WGS84", "", "2000-01-01T00:00:00Z",
            "9999-01-01T00:00:00Z",
        ],
    ];
    let mounts: Vec<Mount> = decode(&rows, Header::Present).unwrap();
    assert_eq!(mounts[0].point.elevation, 300.0);
    assert_eq!(mounts[0].description, "");
}
