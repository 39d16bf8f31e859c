// Amateur Radio Band Definitions
// Reference: ADIF 3.1.4 Band Enumeration
//
// This module provides the band table, band lookups and frequency-to-band conversion.

/// A named band with inclusive frequency bounds in MHz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// ADIF band name (lower-case)
    pub name: &'static str,
    /// Inclusive (lower, upper) bounds in MHz; `None` for the empty sentinel band
    pub range: Option<(f64, f64)>,
}

const fn band(name: &'static str, lower: f64, upper: f64) -> Band {
    Band { name, range: Some((lower, upper)) }
}

/// All ADIF bands in ascending frequency order, preceded by the "" sentinel
pub const BANDS: &[Band] = &[
    Band { name: "", range: None },
    band("2190m", 0.1357, 0.1378),
    band("630m", 0.472, 0.479),
    band("560m", 0.501, 0.504),
    // HF Bands
    band("160m", 1.8, 2.0),
    band("80m", 3.5, 4.0),
    band("60m", 5.06, 5.45),
    band("40m", 7.0, 7.3),
    band("30m", 10.1, 10.15),
    band("20m", 14.0, 14.35),
    band("17m", 18.068, 18.168),
    band("15m", 21.0, 21.45),
    band("12m", 24.890, 24.99),
    band("10m", 28.0, 29.7),
    // VHF/UHF Bands
    band("6m", 50.0, 54.0),
    band("4m", 70.0, 71.0),
    band("2m", 144.0, 148.0),
    band("1.25m", 222.0, 225.0),
    band("70cm", 420.0, 450.0),
    band("33cm", 902.0, 928.0),
    band("23cm", 1240.0, 1300.0),
    // Microwave
    band("13cm", 2300.0, 2450.0),
    band("9cm", 3300.0, 3500.0),
    band("6cm", 5650.0, 5925.0),
    band("3cm", 10000.0, 10500.0),
    band("1.25cm", 24000.0, 24250.0),
    band("6mm", 47000.0, 47200.0),
    band("4mm", 75500.0, 81000.0),
    band("2.5mm", 119980.0, 120020.0),
    band("2mm", 142000.0, 149000.0),
    band("1mm", 241000.0, 250000.0),
];

fn find_band(token: &str) -> Option<&'static Band> {
    BANDS.iter().find(|b| b.name.eq_ignore_ascii_case(token))
}

/// Check if a band name is in the band table (the "" sentinel included)
pub fn is_known_band(token: &str) -> bool {
    find_band(token).is_some()
}

/// Get the inclusive (lower, upper) bounds in MHz of a band
pub fn band_range(token: &str) -> Option<(f64, f64)> {
    find_band(token).and_then(|b| b.range)
}

/// Returns the ADIF band name for a given frequency in MHz
pub fn freq_to_band(freq_mhz: f64) -> Option<&'static str> {
    BANDS
        .iter()
        .find(|b| matches!(b.range, Some((lo, hi)) if (lo..=hi).contains(&freq_mhz)))
        .map(|b| b.name)
}
