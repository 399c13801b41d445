//! Fixed literal configuration: the D.C. Medicaid dataset and the risk catalog
//!
//! Descriptions carry authored totals. They are not computed from the rows
//! and are kept verbatim even where they disagree with the data.

use std::collections::BTreeMap;
use std::num::NonZeroU64;

use tracing::warn;

use crate::types::{AggregateRow, Color, RiskKey};

/// Population represented by one unit
pub const UNIT_SIZE: NonZeroU64 = match NonZeroU64::new(500) {
    Some(size) => size,
    None => panic!("unit size must be non-zero"),
};

/// Fill for units outside the active highlight (`#ccc`)
pub const NEUTRAL: Color = Color::rgb(0xcc, 0xcc, 0xcc);

/// Fill used when a risk key has no catalog entry
pub const PLACEHOLDER: Color = Color::rgb(0x99, 0x99, 0x99);

/// Display attributes for one risk key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskStyle {
    pub color: Color,
    pub description: String,
}

/// Risk key to color/description lookup
///
/// The default catalog is total over [`RiskKey::ALL`]. Lookups on a catalog
/// built without some key degrade to [`PLACEHOLDER`] and the key's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskCatalog {
    entries: BTreeMap<RiskKey, RiskStyle>,
}

impl RiskCatalog {
    pub fn new(entries: impl IntoIterator<Item = (RiskKey, RiskStyle)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, key: RiskKey) -> Option<&RiskStyle> {
        self.entries.get(&key)
    }

    /// Display color for `key`
    pub fn color(&self, key: RiskKey) -> Color {
        match self.entries.get(&key) {
            Some(style) => style.color,
            None => {
                warn!("No color configured for risk key {}, using placeholder", key);
                PLACEHOLDER
            }
        }
    }

    /// Human-readable description for `key`
    pub fn description(&self, key: RiskKey) -> String {
        match self.entries.get(&key) {
            Some(style) => style.description.clone(),
            None => {
                warn!("No description configured for risk key {}", key);
                key.as_str().to_string()
            }
        }
    }

    /// Description for an arbitrary identifier
    ///
    /// Known risk keys resolve to their description; anything else is echoed
    /// back unchanged.
    pub fn describe(&self, id: &str) -> String {
        match RiskKey::from_id(id) {
            Some(key) => self.description(key),
            None => id.to_string(),
        }
    }
}

impl Default for RiskCatalog {
    fn default() -> Self {
        let style = |hex: Color, description: &str| RiskStyle {
            color: hex,
            description: description.to_string(),
        };

        Self::new([
            (
                RiskKey::Healthydc,
                style(
                    Color::rgb(0xff, 0xc1, 0x07),
                    "Moved to Healthy DC plan: 25,000",
                ),
            ),
            (
                RiskKey::LocalCut,
                style(
                    Color::rgb(0xff, 0x00, 0x00),
                    "Removed from subsidized coverage: 3,000",
                ),
            ),
            (
                RiskKey::FederalWork,
                style(
                    Color::rgb(0xff, 0x8a, 0x8a),
                    "Subject to federal work requirements: 98,656",
                ),
            ),
            (
                RiskKey::FederalUninsured,
                style(
                    Color::rgb(0x75, 0x00, 0x00),
                    "Maybe uninsured in the next decade: 32,000",
                ),
            ),
            (
                RiskKey::FederalLow,
                style(
                    Color::rgb(0x00, 0x80, 0x00),
                    // Published copy ends in a stray space; trimmed here
                    "Statutorily exempted from Medicaid cuts: 145,593",
                ),
            ),
        ])
    }
}

/// The D.C. Medicaid enrollment rows, in display order
pub fn dc_medicaid() -> Vec<AggregateRow> {
    vec![
        AggregateRow::new(
            "Childless adults, parents and caretaker (138% - 200% FPL)",
            RiskKey::Healthydc,
            25_000,
        ),
        AggregateRow::new(
            "Childless adults, parent & caretaker (>200% FPL)",
            RiskKey::LocalCut,
            3_000,
        ),
        AggregateRow::new(
            "Childless adults, parent & caretaker (<138% FPL)",
            RiskKey::FederalWork,
            66_656,
        ),
        AggregateRow::new(
            "Childless adults, parent & caretaker (<138% FPL)",
            RiskKey::FederalUninsured,
            32_000,
        ),
        AggregateRow::new(
            "Children (Children's Health Insurance Program)",
            RiskKey::FederalLow,
            73_725,
        ),
        AggregateRow::new("Children (non-CHIP)", RiskKey::FederalLow, 17_486),
        AggregateRow::new("Aged, disabled and others", RiskKey::FederalLow, 54_382),
    ]
}
