use proptest::prelude::*;

use hamlog::adif::{bands::BANDS, is_known_band, is_valid, modes::MODES, parse_adif};
use hamlog::{parse, read, serialize_adi, write, CodecConfig, Field, Record};

fn scenario_records() -> Vec<Record> {
    vec![
        Record::new()
            .with(Field::Call, "TEST123")
            .with(Field::QsoDate, "20120402")
            .with(Field::TimeOn, "1234")
            .with(Field::Freq, "145.500")
            .with(Field::Band, "2m")
            .with(Field::Mode, "FM")
            .with(Field::RstSent, "59")
            .with(Field::RstRcvd, "59"),
        Record::new()
            .with(Field::Call, "TEST123")
            .with(Field::QsoDate, "20130312")
            .with(Field::TimeOn, "0101")
            .with(Field::Freq, "145.750")
            .with(Field::Band, "2m")
            .with(Field::Mode, "FM"),
    ]
}

#[test]
fn adi_write_then_read() {
    let records = scenario_records();
    let mut buf = Vec::new();
    serialize_adi(&records, &mut buf).unwrap();
    assert_eq!(parse(&buf, false), records);
}

#[test]
fn adi_file_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.adi");
    let records = scenario_records();

    write(&records, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<eoh>\n"));
    assert_eq!(text.matches("<eor>\n").count(), 2);

    assert_eq!(read(&path, &CodecConfig::default()).unwrap(), records);
}

#[test]
fn merged_comment_survives_a_round_trip() {
    let input = "<call:4>TEST<notes:5>first<comment:6>second<eor>";
    let records = parse_adif(input, true);
    let mut buf = Vec::new();
    serialize_adi(&records, &mut buf).unwrap();
    assert_eq!(parse(&buf, false), records);
}

#[test]
fn boundary_characters_cut_values_on_read() {
    // NOTES may hold line breaks, but the reader ends a value at the first one
    for (notes, read_back) in [
        ("line one\nline two", "line one"),
        ("a\tb", "a"),
        ("x<y", "x"),
    ] {
        let records = vec![Record::new().with(Field::Call, "TEST").with(Field::Notes, notes)];
        let mut buf = Vec::new();
        serialize_adi(&records, &mut buf).unwrap();
        let parsed = parse(&buf, false);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].call(), Some("TEST"));
        assert_eq!(parsed[0].get(Field::Notes), Some(read_back));
    }
}

fn band_name() -> impl Strategy<Value = String> {
    prop::sample::select(BANDS.iter().map(|b| b.name).filter(|n| !n.is_empty()).collect::<Vec<_>>())
        .prop_map(str::to_string)
}

fn mode_name() -> impl Strategy<Value = String> {
    prop::sample::select(MODES.iter().map(|m| m.name).collect::<Vec<_>>()).prop_map(str::to_string)
}

fn date() -> impl Strategy<Value = String> {
    (1930i32..2100, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{:04}{:02}{:02}", y, m, d))
}

fn time() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}{:02}", h, m)),
        (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| format!("{:02}{:02}{:02}", h, m, s)),
    ]
}

prop_compose! {
    fn valid_record()(
        call in "[A-Z0-9/]{3,12}".prop_filter("NULL values are not written", |c| c != "NULL"),
        qso_date in prop::option::of(date()),
        time_on in prop::option::of(time()),
        freq in prop::option::of("[0-9]{1,4}\\.[0-9]{1,6}"),
        band in prop::option::of(band_name()),
        mode in prop::option::of(mode_name()),
        rst_sent in prop::option::of("[1-5][1-9][1-9]?"),
        // Free text avoids `<`, tabs and line breaks; see boundary_characters_cut_values_on_read
        name in prop::option::of("[a-z][a-z ]{0,19}"),
        dxcc in prop::option::of("[0-9]{1,3}"),
    ) -> Record {
        let mut record = Record::new().with(Field::Call, call);
        let optional = [
            (Field::QsoDate, qso_date),
            (Field::TimeOn, time_on),
            (Field::Freq, freq),
            (Field::Band, band),
            (Field::Mode, mode),
            (Field::RstSent, rst_sent),
            (Field::Name, name),
            (Field::Dxcc, dxcc),
        ];
        for (field, value) in optional {
            if let Some(value) = value {
                record.set(field, value);
            }
        }
        record
    }
}

proptest! {
    #[test]
    fn parse_of_serialize_is_identity(records in prop::collection::vec(valid_record(), 0..8)) {
        let mut buf = Vec::new();
        serialize_adi(&records, &mut buf).unwrap();
        prop_assert_eq!(parse(&buf, false), records);
    }

    #[test]
    fn parsed_records_hold_invariants(input in "(<(call|band|mode|qso_date|time_on|freq|foo):[0-9]{1,2}>[A-Za-z0-9.]{0,10}|<eor>|<eoh>| ){0,40}") {
        for record in parse(input.as_bytes(), false) {
            prop_assert!(!record.is_empty());
            if let Some(call) = record.call() {
                prop_assert_eq!(call.to_uppercase(), call);
            }
            if let Some(mode) = record.mode() {
                prop_assert_eq!(mode.to_uppercase(), mode);
                prop_assert!(is_valid("MODE", mode, Field::Mode.data_type()));
            }
            if let Some(band) = record.band() {
                prop_assert_eq!(band.to_lowercase(), band);
                prop_assert!(is_known_band(band));
            }
            for (field, value) in record.iter() {
                prop_assert!(is_valid(field.name(), value, field.data_type()));
            }
        }
    }
}

#[test]
fn validate_boundaries() {
    use hamlog::{validate, DataType};

    assert!(!validate("QSO_DATE", "19291231", DataType::Date));
    assert!(validate("QSO_DATE", "19300101", DataType::Date));
    assert!(validate("QSO_DATE", "20200229", DataType::Date));
    assert!(!validate("QSO_DATE", "20210229", DataType::Date));
    assert!(validate("TIME_ON", "2359", DataType::Time));
    assert!(!validate("TIME_ON", "2360", DataType::Time));
    assert!(validate("TIME_ON", "235959", DataType::Time));
    assert!(!validate("TIME_ON", "235960", DataType::Time));
}
