// ADIF Writer
// Emits ADI text: a free-text prelude, header fields, <eoh>, then one block per record

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use super::record::{Field, Record};

pub const ADIF_VERSION: &str = "3.1.4";
pub const PROGRAM_ID: &str = "hamlog";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write records to ADI format
pub fn write_adif<W: Write>(records: &[Record], out: &mut W) -> io::Result<()> {
    write_adif_at(records, out, Utc::now())
}

/// Write records to an ADI string
pub fn adif_to_string(records: &[Record]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_adif(records, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_adif_at<W: Write>(records: &[Record], out: &mut W, created: DateTime<Utc>) -> io::Result<()> {
    write_header(out, records.len(), created)?;
    for record in records {
        write_record(out, record)?;
    }
    out.flush()
}

fn write_header<W: Write>(out: &mut W, count: usize, created: DateTime<Utc>) -> io::Result<()> {
    writeln!(
        out,
        "Amateur radio log file. Generated on {}. Contains {} QSO(s).",
        created.format("%Y-%m-%d %H:%M:%S UTC"),
        count
    )?;
    write_field(out, "adif_ver", ADIF_VERSION)?;
    write_field(out, "programid", PROGRAM_ID)?;
    write_field(out, "programversion", PROGRAM_VERSION)?;
    write_field(out, "created_timestamp", &created.format("%Y%m%d %H%M%S").to_string())?;
    writeln!(out, "<eoh>")
}

/// Format a single QSO record as ADIF, fields in canonical order
fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    for field in Field::ALL {
        match record.get(field) {
            Some(value) if !value.is_empty() && value != "NULL" => {
                write_field(out, &field.name().to_lowercase(), value)?;
            }
            _ => {}
        }
    }
    writeln!(out, "<eor>")
}

/// `<name:LEN>VALUE` where LEN is the byte length of VALUE.
///
/// VALUE is written raw. A value holding `<`, a tab or a line break is cut at
/// that character when read back.
fn write_field<W: Write>(out: &mut W, name: &str, value: &str) -> io::Result<()> {
    writeln!(out, "<{}:{}>{}", name, value.len(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adif::parser::parse_adif;
    use chrono::TimeZone;

    fn render(records: &[Record]) -> String {
        let created = Utc.with_ymd_and_hms(2013, 3, 22, 19, 55, 0).unwrap();
        let mut buf = Vec::new();
        write_adif_at(records, &mut buf, created).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        let text = render(&[]);
        let expected = format!(
            "Amateur radio log file. Generated on 2013-03-22 19:55:00 UTC. Contains 0 QSO(s).\n\
             <adif_ver:5>3.1.4\n\
             <programid:6>hamlog\n\
             <programversion:{}>{}\n\
             <created_timestamp:15>20130322 195500\n\
             <eoh>\n",
            PROGRAM_VERSION.len(),
            PROGRAM_VERSION
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_record_fields_in_canonical_order() {
        let rec = Record::new()
            .with(Field::Mode, "FM")
            .with(Field::Call, "TEST123")
            .with(Field::Freq, "145.500")
            .with(Field::QsoDate, "20120402");
        let text = render(&[rec]);
        let body = text.split("<eoh>\n").nth(1).unwrap();
        assert_eq!(
            body,
            "<call:7>TEST123\n<qso_date:8>20120402\n<freq:7>145.500\n<mode:2>FM\n<eor>\n"
        );
    }

    #[test]
    fn test_empty_and_null_values_are_skipped() {
        let rec = Record::new()
            .with(Field::Call, "TEST")
            .with(Field::Name, "")
            .with(Field::Notes, "NULL");
        let text = render(&[rec]);
        assert!(text.contains("<call:4>TEST\n"));
        assert!(!text.contains("<name"));
        assert!(!text.contains("<notes"));
    }

    #[test]
    fn test_length_is_in_bytes() {
        let rec = Record::new().with(Field::Name, "José");
        let text = render(&[rec]);
        assert!(text.contains("<name:5>José\n"));
    }

    #[test]
    fn test_output_parses_back() {
        let records = vec![
            Record::new().with(Field::Call, "AB1CD").with(Field::Band, "20m"),
            Record::new().with(Field::Call, "EF2GH").with(Field::Mode, "SSB").with(Field::Submode, "USB"),
        ];
        assert_eq!(parse_adif(&adif_to_string(&records), false), records);
    }
}
