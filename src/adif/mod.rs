// ADIF (Amateur Data Interchange Format) Parser and Writer
// Reference: https://adif.org/

pub mod bands;
pub mod modes;
pub mod parser;
pub mod record;
pub mod types;
pub mod validate;
pub mod writer;

pub use bands::{band_range, freq_to_band, is_known_band};
pub use modes::{canonicalize_mode, is_deprecated_mode, is_known_mode, is_known_submode};
pub use parser::{parse_adif, parse_adif_bytes};
pub use record::{Field, Record};
pub use types::DataType;
pub use validate::{is_valid, is_valid_strict};
pub use writer::{adif_to_string, write_adif};
