// Error types for codec operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to callers. Bad field data is never an error; it is logged and dropped.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Opening, reading or writing a file failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing to an output sink failed
    #[error("write error: {0}")]
    Write(#[from] io::Error),
    /// A configuration file could not be parsed
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CodecError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CodecError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
