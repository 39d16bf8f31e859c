// HamLog Library
// ADIF (ADI) import/export and Cabrillo export for amateur radio contact logs

pub mod adif;
pub mod cabrillo;
pub mod codec;
pub mod config;
pub mod error;

pub use adif::{DataType, Field, Record};
pub use codec::{read, read_or_empty, write, write_cabrillo};
pub use config::CodecConfig;
pub use error::{CodecError, Result};

use std::io::Write;

/// Parse ADI bytes into records
pub fn parse(bytes: &[u8], merge_comment: bool) -> Vec<Record> {
    adif::parse_adif_bytes(bytes, merge_comment)
}

/// Serialize records as ADI into `writer`
pub fn serialize_adi<W: Write>(records: &[Record], writer: &mut W) -> Result<()> {
    Ok(adif::write_adif(records, writer)?)
}

/// Serialize records as a Cabrillo log into `writer`
pub fn serialize_cabrillo<W: Write>(records: &[Record], writer: &mut W, contest: &str, mycall: &str) -> Result<()> {
    Ok(cabrillo::write_cabrillo(records, writer, contest, mycall)?)
}

/// Check a value against a declared data type
pub fn validate(field_name: &str, value: &str, data_type: DataType) -> bool {
    adif::is_valid(field_name, value, data_type)
}
