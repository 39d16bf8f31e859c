// Codec configuration
//
// A single option is recognized. It can be loaded from a TOML file:
//
//     merge_comment = true

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Fold a record's COMMENT into its NOTES on import
    pub merge_comment: bool,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path).map_err(|e| CodecError::io(path, e))?;
        Self::from_toml(&toml_str).map_err(|source| CodecError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
