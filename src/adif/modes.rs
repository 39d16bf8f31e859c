// ADIF Mode Registry
// Modes and submodes from the ADIF 3.1.4 specification
// Reference: https://adif.org/314/ADIF_314.htm#Mode_Enumeration

use std::collections::HashMap;
use std::sync::OnceLock;

/// A mode and its submodes. The empty submode is implied for every mode.
#[derive(Debug, Clone, Copy)]
pub struct Mode {
    pub name: &'static str,
    pub submodes: &'static [&'static str],
}

const fn mode(name: &'static str, submodes: &'static [&'static str]) -> Mode {
    Mode { name, submodes }
}

/// All valid ADIF modes with their submodes
pub const MODES: &[Mode] = &[
    mode("AM", &[]),
    mode("ARDOP", &[]),
    mode("ATV", &[]),
    mode("C4FM", &[]),
    mode("CHIP", &["CHIP64", "CHIP128"]),
    mode("CLO", &[]),
    mode("CONTESTI", &[]),
    mode("CW", &["PCW"]),
    mode("DIGITALVOICE", &[]),
    mode("DOMINO", &["DOMINOEX", "DOMINOF"]),
    mode("DSTAR", &[]),
    mode("FAX", &[]),
    mode("FM", &[]),
    mode("FSK441", &[]),
    mode("FT8", &[]),
    mode("HELL", &["FMHELL", "FSKHELL", "HELL80", "HFSK", "PSKHELL"]),
    mode("ISCAT", &["ISCAT-A", "ISCAT-B"]),
    mode("JT4", &["JT4A", "JT4B", "JT4C", "JT4D", "JT4E", "JT4F", "JT4G"]),
    mode("JT6M", &[]),
    mode("JT9", &["JT9-1", "JT9-2", "JT9-5", "JT9-10", "JT9-30"]),
    mode("JT44", &[]),
    mode("JT65", &["JT65A", "JT65B", "JT65B2", "JT65C", "JT65C2"]),
    mode(
        "MFSK",
        &[
            "FT4", "FST4", "FST4W", "JS8", "MFSK4", "MFSK8", "MFSK11", "MFSK16", "MFSK22",
            "MFSK31", "MFSK32", "MFSK64", "MFSK128", "Q65",
        ],
    ),
    mode("MSK144", &[]),
    mode("MT63", &[]),
    mode(
        "OLIVIA",
        &[
            "OLIVIA 4/125", "OLIVIA 4/250", "OLIVIA 8/250", "OLIVIA 8/500", "OLIVIA 16/500",
            "OLIVIA 16/1000", "OLIVIA 32/1000",
        ],
    ),
    mode("OPERA", &["OPERA-BEACON", "OPERA-QSO"]),
    mode("PAC", &["PAC2", "PAC3", "PAC4"]),
    mode("PAX", &["PAX2"]),
    mode("PKT", &[]),
    mode(
        "PSK",
        &[
            "FSK31", "PSK10", "PSK31", "PSK63", "PSK63F", "PSK125", "PSK250", "PSK500",
            "PSK1000", "PSKAM10", "PSKAM31", "PSKAM50", "PSKFEC31", "QPSK31", "QPSK63",
            "QPSK125", "QPSK250", "QPSK500", "SIM31",
        ],
    ),
    mode("PSK2K", &[]),
    mode("Q15", &[]),
    mode("QRA64", &["QRA64A", "QRA64B", "QRA64C", "QRA64D", "QRA64E"]),
    mode("ROS", &["ROS-EME", "ROS-HF", "ROS-MF"]),
    mode("RTTY", &["ASCI"]),
    mode("RTTYM", &[]),
    mode("SSB", &["LSB", "USB"]),
    mode("SSTV", &[]),
    mode("T10", &[]),
    mode("THOR", &[]),
    mode("THRB", &["THRBX"]),
    mode("TOR", &["AMTORFEC", "GTOR"]),
    mode("V4", &[]),
    mode("VOI", &[]),
    mode("WINMOR", &[]),
    mode("WSPR", &[]),
];

/// Mode tokens from earlier ADIF versions, now expressed as a submode of a current mode.
/// Accepted on import only.
pub const DEPRECATED_MODES: &[&str] = &[
    "AMTORFEC", "ASCI", "CHIP64", "CHIP128", "DOMINOF", "FMHELL", "FSK31", "GTOR", "HELL80",
    "HFSK", "JT4A", "JT4B", "JT4C", "JT4D", "JT4E", "JT4F", "JT4G", "JT65A", "JT65B", "JT65C",
    "MFSK8", "MFSK16", "PAC2", "PAC3", "PAX2", "PCW", "PSK10", "PSK31", "PSK63", "PSK63F",
    "PSK125", "PSK250", "PSKAM10", "PSKAM31", "PSKAM50", "PSKFEC31", "PSKHELL", "QPSK31",
    "QPSK63", "QPSK125", "QPSK250", "THRBX",
];

/// Lazily-initialized map from submode to its parent mode
static SUBMODE_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn get_submode_map() -> &'static HashMap<&'static str, &'static str> {
    SUBMODE_MAP.get_or_init(|| {
        let mut map = HashMap::new();
        for m in MODES {
            for submode in m.submodes {
                map.insert(*submode, m.name);
            }
        }
        map
    })
}

fn find_mode(token: &str) -> Option<&'static Mode> {
    MODES.iter().find(|m| m.name.eq_ignore_ascii_case(token))
}

/// Normalize a mode string to standard ADIF format
pub fn normalize_mode(mode: &str) -> String {
    mode.trim().to_uppercase()
}

/// Check if a token is a current ADIF mode
pub fn is_known_mode(token: &str) -> bool {
    find_mode(token).is_some()
}

/// Check if a token is a deprecated mode
pub fn is_deprecated_mode(token: &str) -> bool {
    DEPRECATED_MODES.iter().any(|m| m.eq_ignore_ascii_case(token))
}

/// Check if a token is a submode of the given mode. The empty submode is valid for every mode.
pub fn is_known_submode(mode: &str, token: &str) -> bool {
    match find_mode(mode) {
        Some(m) => token.is_empty() || m.submodes.iter().any(|s| s.eq_ignore_ascii_case(token)),
        None => false,
    }
}

/// Get the submodes of a mode, the empty submode first
pub fn submodes_of(mode: &str) -> Vec<&'static str> {
    let mut submodes = vec![""];
    if let Some(m) = find_mode(mode) {
        submodes.extend_from_slice(m.submodes);
    }
    submodes
}

/// Map a mode token to a current (mode, submode) pair.
/// Deprecated tokens map to their parent mode; anything else is returned as `(token, "")`.
pub fn canonicalize_mode(token: &str) -> (String, String) {
    if is_deprecated_mode(token) {
        let upper = normalize_mode(token);
        if let Some(parent) = get_submode_map().get(upper.as_str()) {
            return (parent.to_string(), upper);
        }
    }
    (token.to_string(), String::new())
}
