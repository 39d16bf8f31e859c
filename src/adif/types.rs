// ADIF Data Types
// Reference: https://adif.org/314/ADIF_314.htm#Data_Types

/// ADIF data type indicator, as written after the length in `<NAME:LEN:TYPE>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Award list (comma-separated award identifiers)
    AwardList,
    /// Boolean (Y/N)
    Boolean,
    /// Number (optional sign, digits, at most one decimal point)
    Number,
    /// String (ASCII)
    String,
    /// International string (any code points)
    IntlString,
    /// Date (YYYYMMDD)
    Date,
    /// Time (HHMM or HHMMSS)
    Time,
    /// Multiline string
    MultilineString,
    /// International multiline string
    IntlMultilineString,
    /// Location (XDDD MM.MMM)
    Location,
    /// Enumeration
    Enumeration,
}

impl DataType {
    pub const ALL: [DataType; 11] = [
        DataType::AwardList,
        DataType::Boolean,
        DataType::Number,
        DataType::String,
        DataType::IntlString,
        DataType::Date,
        DataType::Time,
        DataType::MultilineString,
        DataType::IntlMultilineString,
        DataType::Location,
        DataType::Enumeration,
    ];

    /// Parse a data type indicator character (case-insensitive)
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(DataType::AwardList),
            'B' => Some(DataType::Boolean),
            'N' => Some(DataType::Number),
            'S' => Some(DataType::String),
            'I' => Some(DataType::IntlString),
            'D' => Some(DataType::Date),
            'T' => Some(DataType::Time),
            'M' => Some(DataType::MultilineString),
            'G' => Some(DataType::IntlMultilineString),
            'L' => Some(DataType::Location),
            'E' => Some(DataType::Enumeration),
            _ => None,
        }
    }

    /// Parse a type indicator as it appears in a tag, e.g. the `d` in `<qso_date:8:d>`
    pub fn from_tag(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            DataType::AwardList => 'A',
            DataType::Boolean => 'B',
            DataType::Number => 'N',
            DataType::String => 'S',
            DataType::IntlString => 'I',
            DataType::Date => 'D',
            DataType::Time => 'T',
            DataType::MultilineString => 'M',
            DataType::IntlMultilineString => 'G',
            DataType::Location => 'L',
            DataType::Enumeration => 'E',
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
