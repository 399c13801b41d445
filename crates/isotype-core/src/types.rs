//! Core domain types for the unit chart

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// An opaque RGB fill color.
///
/// Parsed from and rendered to CSS hex notation (`#rgb` or `#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a string is not a CSS hex color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());

        match hex.len() {
            // #rgb expands each nibble: #ccc == #cccccc
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(err()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Risk keys
// ─────────────────────────────────────────────────────────────────────────────

/// Categorical outcome a population group is exposed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKey {
    Healthydc,
    LocalCut,
    FederalWork,
    FederalUninsured,
    FederalLow,
}

impl RiskKey {
    /// Every declared key, in dataset order
    pub const ALL: [RiskKey; 5] = [
        RiskKey::Healthydc,
        RiskKey::LocalCut,
        RiskKey::FederalWork,
        RiskKey::FederalUninsured,
        RiskKey::FederalLow,
    ];

    /// The identifier used in step names and data files
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskKey::Healthydc => "healthydc",
            RiskKey::LocalCut => "local_cut",
            RiskKey::FederalWork => "federal_work",
            RiskKey::FederalUninsured => "federal_uninsured",
            RiskKey::FederalLow => "federal_low",
        }
    }

    /// Exact (case-sensitive) match against the declared identifiers
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == id)
    }
}

impl fmt::Display for RiskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rows and units
// ─────────────────────────────────────────────────────────────────────────────

/// One aggregate row of the source dataset
///
/// `count` is a real-world population count, not a unit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub group: String,
    pub risk: RiskKey,
    pub count: u64,
}

impl AggregateRow {
    pub fn new(group: impl Into<String>, risk: RiskKey, count: u64) -> Self {
        Self {
            group: group.into(),
            risk,
            count,
        }
    }
}

/// One discrete visual atom representing a fixed population quantum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Stable 0-based position in the full generated sequence
    pub index: usize,
    pub group: String,
    pub risk: RiskKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse_long_form() {
        let color: Color = "#ff8a8a".parse().unwrap();
        assert_eq!(color, Color::rgb(0xff, 0x8a, 0x8a));
    }

    #[test]
    fn test_color_parse_short_form_expands() {
        let short: Color = "#ccc".parse().unwrap();
        let long: Color = "#cccccc".parse().unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        assert!("ccc".parse::<Color>().is_err());
        assert!("#cc".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_hex_roundtrip_is_lowercase() {
        let color: Color = "#FFC107".parse().unwrap();
        assert_eq!(color.to_hex(), "#ffc107");
        assert_eq!(color.to_string(), "#ffc107");
    }

    #[test]
    fn test_risk_key_ids() {
        assert_eq!(RiskKey::from_id("federal_low"), Some(RiskKey::FederalLow));
        assert_eq!(RiskKey::from_id("Federal_Low"), None);
        assert_eq!(RiskKey::from_id("all"), None);
        for key in RiskKey::ALL {
            assert_eq!(RiskKey::from_id(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_risk_key_serde_matches_ids() {
        let json = serde_json::to_string(&RiskKey::FederalUninsured).unwrap();
        assert_eq!(json, "\"federal_uninsured\"");
    }
}
