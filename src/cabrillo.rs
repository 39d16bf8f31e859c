// Cabrillo Writer
// Reference: https://wwrof.org/cabrillo/cabrillo-specification-v3/
//
// Writes contest submissions in Cabrillo v3 from ADIF records. Malformed
// record fields produce best-effort output rather than an error.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::adif::record::{Field, Record};
use crate::adif::types::DataType;
use crate::adif::validate::is_valid;
use crate::adif::writer::{PROGRAM_ID, PROGRAM_VERSION};

pub const CABRILLO_VERSION: &str = "3.0";

/// Transmitter ID written on every QSO line
pub const DEFAULT_TRANSMITTER_ID: u8 = 0;

/// Write records as a Cabrillo log
pub fn write_cabrillo<W: Write>(
    records: &[Record],
    out: &mut W,
    contest: &str,
    mycall: &str,
) -> io::Result<()> {
    writeln!(out, "START-OF-LOG: {}", CABRILLO_VERSION)?;
    writeln!(out, "CREATED-BY: {} {}", PROGRAM_ID, PROGRAM_VERSION)?;
    writeln!(out, "CALLSIGN: {}", mycall)?;
    writeln!(out, "CONTEST: {}", contest)?;
    for record in records {
        writeln!(out, "{}", qso_line(record, mycall))?;
    }
    writeln!(out, "END-OF-LOG:")?;
    out.flush()
}

/// Write records to a Cabrillo string
pub fn cabrillo_to_string(records: &[Record], contest: &str, mycall: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_cabrillo(records, &mut buf, contest, mycall);
    String::from_utf8_lossy(&buf).into_owned()
}

fn qso_line(record: &Record, mycall: &str) -> String {
    format!(
        "QSO: {:>9} {} {:<10} {:<4} {:<13} {:<3} {:<13} {:<3} {}",
        frequency_column(record),
        mode_code(record.mode().unwrap_or_default()),
        format_date(record.qso_date().unwrap_or_default()),
        format_time(record.time_on().unwrap_or_default()),
        mycall,
        record.get(Field::RstSent).unwrap_or_default(),
        record.call().unwrap_or_default(),
        record.get(Field::RstRcvd).unwrap_or_default(),
        DEFAULT_TRANSMITTER_ID,
    )
}

/// FREQ in kHz, or blank unless it is an ADIF number (`inf`, `NaN` and `1e3` are not)
fn frequency_column(record: &Record) -> String {
    record
        .get(Field::Freq)
        .filter(|v| is_valid(Field::Freq.name(), v, DataType::Number))
        .and_then(|v| v.parse().ok())
        .map(format_khz)
        .unwrap_or_default()
}

/// Two-letter Cabrillo mode code for an ADIF mode
pub fn mode_code(mode: &str) -> &'static str {
    match mode.to_uppercase().as_str() {
        "SSB" => "PH",
        "CW" => "CW",
        "FM" => "FM",
        _ => "RY",
    }
}

/// MHz to kHz, with at least one decimal place: 145.55 -> "145550.0"
pub fn format_khz(freq_mhz: f64) -> String {
    let khz = (freq_mhz * 1_000_000.0).round() / 1000.0;
    let mut s = format!("{:.3}", khz);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

/// YYYYMMDD to YYYY-MM-DD; anything unparseable is passed through
fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y%m%d") {
        Ok(d) => d.format("%Y-%m-%d").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Cabrillo times are HHMM
fn format_time(time: &str) -> &str {
    time.get(..4).unwrap_or(time)
}
