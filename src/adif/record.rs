// ADIF Record Model
//
// One QSO as a fixed set of optional string fields. Values are kept as
// strings; typed interpretation happens in the accessors after validation.

use serde::Serialize;

use super::types::DataType;

/// The recognized ADIF fields, in canonical write order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Call,
    QsoDate,
    TimeOn,
    Freq,
    Band,
    Mode,
    Submode,
    TxPwr,
    RstSent,
    RstRcvd,
    QslSent,
    QslRcvd,
    Notes,
    Name,
    Address,
    State,
    Country,
    Dxcc,
    Cqz,
    Ituz,
    Iota,
}

impl Field {
    /// Canonical field ordering used by the writers
    pub const ALL: [Field; 21] = [
        Field::Call,
        Field::QsoDate,
        Field::TimeOn,
        Field::Freq,
        Field::Band,
        Field::Mode,
        Field::Submode,
        Field::TxPwr,
        Field::RstSent,
        Field::RstRcvd,
        Field::QslSent,
        Field::QslRcvd,
        Field::Notes,
        Field::Name,
        Field::Address,
        Field::State,
        Field::Country,
        Field::Dxcc,
        Field::Cqz,
        Field::Ituz,
        Field::Iota,
    ];

    /// Upper-case ADIF field name
    pub fn name(self) -> &'static str {
        match self {
            Field::Call => "CALL",
            Field::QsoDate => "QSO_DATE",
            Field::TimeOn => "TIME_ON",
            Field::Freq => "FREQ",
            Field::Band => "BAND",
            Field::Mode => "MODE",
            Field::Submode => "SUBMODE",
            Field::TxPwr => "TX_PWR",
            Field::RstSent => "RST_SENT",
            Field::RstRcvd => "RST_RCVD",
            Field::QslSent => "QSL_SENT",
            Field::QslRcvd => "QSL_RCVD",
            Field::Notes => "NOTES",
            Field::Name => "NAME",
            Field::Address => "ADDRESS",
            Field::State => "STATE",
            Field::Country => "COUNTRY",
            Field::Dxcc => "DXCC",
            Field::Cqz => "CQZ",
            Field::Ituz => "ITUZ",
            Field::Iota => "IOTA",
        }
    }

    /// Declared data type of the field
    pub fn data_type(self) -> DataType {
        match self {
            Field::QsoDate => DataType::Date,
            Field::TimeOn => DataType::Time,
            Field::Freq | Field::TxPwr | Field::Dxcc | Field::Cqz | Field::Ituz => DataType::Number,
            Field::Band | Field::Mode | Field::Submode => DataType::Enumeration,
            Field::Notes => DataType::MultilineString,
            // IOTA carries the legacy code 'C', which is not an ADIF data type
            _ => DataType::String,
        }
    }

    /// Look up a field by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single ADIF record (one QSO)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qso_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_pwr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rst_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rst_rcvd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qsl_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qsl_rcvd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dxcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cqz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ituz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iota: Option<String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Call => &self.call,
            Field::QsoDate => &self.qso_date,
            Field::TimeOn => &self.time_on,
            Field::Freq => &self.freq,
            Field::Band => &self.band,
            Field::Mode => &self.mode,
            Field::Submode => &self.submode,
            Field::TxPwr => &self.tx_pwr,
            Field::RstSent => &self.rst_sent,
            Field::RstRcvd => &self.rst_rcvd,
            Field::QslSent => &self.qsl_sent,
            Field::QslRcvd => &self.qsl_rcvd,
            Field::Notes => &self.notes,
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::State => &self.state,
            Field::Country => &self.country,
            Field::Dxcc => &self.dxcc,
            Field::Cqz => &self.cqz,
            Field::Ituz => &self.ituz,
            Field::Iota => &self.iota,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Call => &mut self.call,
            Field::QsoDate => &mut self.qso_date,
            Field::TimeOn => &mut self.time_on,
            Field::Freq => &mut self.freq,
            Field::Band => &mut self.band,
            Field::Mode => &mut self.mode,
            Field::Submode => &mut self.submode,
            Field::TxPwr => &mut self.tx_pwr,
            Field::RstSent => &mut self.rst_sent,
            Field::RstRcvd => &mut self.rst_rcvd,
            Field::QslSent => &mut self.qsl_sent,
            Field::QslRcvd => &mut self.qsl_rcvd,
            Field::Notes => &mut self.notes,
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::State => &mut self.state,
            Field::Country => &mut self.country,
            Field::Dxcc => &mut self.dxcc,
            Field::Cqz => &mut self.cqz,
            Field::Ituz => &mut self.ituz,
            Field::Iota => &mut self.iota,
        }
    }

    /// Get a field value
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Get a field value by name (case-insensitive lookup)
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        Field::from_name(name).and_then(|f| self.get(f))
    }

    /// Set a field value, returning the previous one
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Option<String> {
        self.slot_mut(field).replace(value.into())
    }

    /// Remove a field value, returning it
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.slot_mut(field).take()
    }

    /// Builder-style setter
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Check if a field exists
    pub fn has(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    /// Present fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn call(&self) -> Option<&str> { self.get(Field::Call) }
    pub fn band(&self) -> Option<&str> { self.get(Field::Band) }
    pub fn mode(&self) -> Option<&str> { self.get(Field::Mode) }
    pub fn qso_date(&self) -> Option<&str> { self.get(Field::QsoDate) }
    pub fn time_on(&self) -> Option<&str> { self.get(Field::TimeOn) }
    pub fn freq(&self) -> Option<f64> {
        self.get(Field::Freq).and_then(|s| s.parse().ok())
    }
    pub fn dxcc(&self) -> Option<i64> {
        self.get(Field::Dxcc).and_then(|s| s.parse().ok())
    }
    pub fn cqz(&self) -> Option<i64> {
        self.get(Field::Cqz).and_then(|s| s.parse().ok())
    }
    pub fn ituz(&self) -> Option<i64> {
        self.get(Field::Ituz).and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), 21);
        assert_eq!(names[0], "CALL");
        assert_eq!(names[1], "QSO_DATE");
        assert_eq!(names[20], "IOTA");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Field::from_name("call"), Some(Field::Call));
        assert_eq!(Field::from_name("Qso_Date"), Some(Field::QsoDate));
        assert_eq!(Field::from_name("GRIDSQUARE"), None);
        assert_eq!(Field::from_name("COMMENT"), None);
    }

    #[test]
    fn test_declared_types() {
        assert_eq!(Field::QsoDate.data_type(), DataType::Date);
        assert_eq!(Field::TimeOn.data_type(), DataType::Time);
        assert_eq!(Field::Freq.data_type(), DataType::Number);
        assert_eq!(Field::Mode.data_type(), DataType::Enumeration);
        assert_eq!(Field::Notes.data_type(), DataType::MultilineString);
        assert_eq!(Field::Call.data_type(), DataType::String);
    }

    #[test]
    fn test_get_set() {
        let mut rec = Record::new();
        assert!(rec.is_empty());
        assert_eq!(rec.set(Field::Call, "W1ABC"), None);
        assert_eq!(rec.set(Field::Call, "N2XYZ"), Some("W1ABC".to_string()));
        assert_eq!(rec.call(), Some("N2XYZ"));
        assert_eq!(rec.get_by_name("call"), Some("N2XYZ"));
        assert!(rec.has(Field::Call));
        assert_eq!(rec.remove(Field::Call), Some("N2XYZ".to_string()));
        assert!(!rec.has(Field::Call));
    }

    #[test]
    fn test_typed_accessors() {
        let rec = Record::new()
            .with(Field::Freq, "14.074")
            .with(Field::Dxcc, "291")
            .with(Field::Cqz, "abc");
        assert_eq!(rec.freq(), Some(14.074));
        assert_eq!(rec.dxcc(), Some(291));
        assert_eq!(rec.cqz(), None);
        assert_eq!(rec.ituz(), None);
    }

    #[test]
    fn test_iter_is_canonical() {
        let rec = Record::new()
            .with(Field::Mode, "CW")
            .with(Field::Call, "TEST")
            .with(Field::Band, "40m");
        let fields: Vec<Field> = rec.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Call, Field::Band, Field::Mode]);
        assert_eq!(rec.len(), 3);
    }

    #[test]
    fn test_serialize_json() {
        let rec = Record::new().with(Field::Call, "TEST").with(Field::QsoDate, "20130322");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json, serde_json::json!({"CALL": "TEST", "QSO_DATE": "20130322"}));
    }
}
