//! File-level ADIF and Cabrillo operations
//!
//! This module handles:
//! - read / read_or_empty: Import records from an ADI file
//! - write: Export records to an ADI file
//! - write_cabrillo: Export records to a Cabrillo contest log

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::adif::{parse_adif_bytes, write_adif, Record};
use crate::cabrillo;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// Read all records from an ADI file
pub fn read(path: impl AsRef<Path>, config: &CodecConfig) -> Result<Vec<Record>> {
    let path = path.as_ref();
    log::info!("Importing ADIF from: {}", path.display());

    let bytes = fs::read(path).map_err(|e| CodecError::io(path, e))?;
    let records = parse_adif_bytes(&bytes, config.merge_comment);

    if records.is_empty() && !bytes.is_empty() {
        log::warn!("No records found in {}; the format may be unrecognized", path.display());
    }
    log::info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read all records from an ADI file, logging any failure and returning no records
pub fn read_or_empty(path: impl AsRef<Path>, config: &CodecConfig) -> Vec<Record> {
    match read(path, config) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Could not read log: {}", e);
            Vec::new()
        }
    }
}

/// Replace the file at `path` with the records in ADI format
pub fn write(records: &[Record], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    log::info!("Exporting ADIF to: {}", path.display());

    let file = File::create(path).map_err(|e| CodecError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_adif(records, &mut out).map_err(|e| CodecError::io(path, e))?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Replace the file at `path` with the records as a Cabrillo log
pub fn write_cabrillo(records: &[Record], path: impl AsRef<Path>, contest: &str, mycall: &str) -> Result<()> {
    let path = path.as_ref();
    log::info!("Exporting Cabrillo log for {} to: {}", contest, path.display());

    let file = File::create(path).map_err(|e| CodecError::io(path, e))?;
    let mut out = BufWriter::new(file);
    cabrillo::write_cabrillo(records, &mut out, contest, mycall).map_err(|e| CodecError::io(path, e))?;

    log::info!("Wrote {} QSO lines to {}", records.len(), path.display());
    Ok(())
}
