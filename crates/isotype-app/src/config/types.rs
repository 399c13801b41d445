//! Configuration types
//!
//! Every section falls back to its defaults when absent, so a partial
//! `config.toml` only overrides what it names.

use std::num::NonZeroU64;
use std::time::Duration;

use isotype_core::UNIT_SIZE;
use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::highlight::INTRO_STEP;
use crate::narrative::DEFAULT_OFFSET;

/// Application settings (.isotype/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub chart: ChartSettings,

    #[serde(default)]
    pub resize: ResizeSettings,

    #[serde(default)]
    pub narrative: NarrativeSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Chart settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartSettings {
    /// People represented by one unit
    #[serde(default = "default_unit_size")]
    pub unit_size: NonZeroU64,

    /// Fill transition for the intro step, in milliseconds
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

impl ChartSettings {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            unit_size: default_unit_size(),
            transition_ms: default_transition_ms(),
        }
    }
}

/// Resize settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResizeSettings {
    /// Quiet period before a resize triggers relayout
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// A narrative step: the id dispatched to the highlight machine and its prose
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StepConfig {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

impl StepConfig {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Narrative settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NarrativeSettings {
    /// Trigger line position as a fraction of the narrative height
    #[serde(default = "default_offset")]
    pub offset: f64,

    #[serde(default = "default_steps")]
    pub steps: Vec<StepConfig>,
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            steps: default_steps(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Canvas pixels per terminal column when deriving the container width
    #[serde(default = "default_px_per_column")]
    pub px_per_column: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            px_per_column: default_px_per_column(),
        }
    }
}

fn default_unit_size() -> NonZeroU64 {
    UNIT_SIZE
}

fn default_transition_ms() -> u64 {
    600
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_offset() -> f64 {
    DEFAULT_OFFSET
}

fn default_px_per_column() -> u16 {
    15
}

fn default_steps() -> Vec<StepConfig> {
    vec![
        StepConfig::new(
            INTRO_STEP,
            "Each dot stands for 500 people enrolled in D.C. Medicaid.",
        ),
        StepConfig::new(
            "all",
            "Enrollees face different changes depending on their eligibility group.",
        ),
        StepConfig::new(
            "healthydc",
            "Adults between 138% and 200% of the poverty line move to the Healthy DC plan.",
        ),
        StepConfig::new(
            "local_cut",
            "Adults above 200% of the poverty line lose subsidized coverage under local cuts.",
        ),
        StepConfig::new(
            "federal_combined",
            "Adults below 138% of the poverty line become subject to federal work requirements.",
        ),
        StepConfig::new(
            "federal_split",
            "Some of them may lose coverage entirely over the next decade.",
        ),
        StepConfig::new(
            "federal_low",
            "Children, aged and disabled enrollees are exempted from the federal cuts.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.chart.unit_size.get(), 500);
        assert_eq!(settings.chart.transition(), Duration::from_millis(600));
        assert_eq!(settings.resize.debounce_ms, 180);
        assert_eq!(settings.narrative.offset, 0.3);
        assert_eq!(settings.narrative.steps.len(), 7);
        assert_eq!(settings.narrative.steps[0].id, "intro_allblue");
        assert_eq!(settings.ui.px_per_column, 15);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[chart]\ntransition_ms = 250\n").unwrap();
        assert_eq!(settings.chart.transition_ms, 250);
        assert_eq!(settings.chart.unit_size.get(), 500);
        assert_eq!(settings.resize, ResizeSettings::default());
    }

    #[test]
    fn test_zero_unit_size_rejected() {
        let result: Result<Settings, _> = toml::from_str("[chart]\nunit_size = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_steps_table_array() {
        let config = r#"
[[narrative.steps]]
id = "all"
text = "Everyone"

[[narrative.steps]]
id = "federal_low"
"#;
        let settings: Settings = toml::from_str(config).unwrap();
        assert_eq!(
            settings.narrative.steps,
            vec![StepConfig::new("all", "Everyone"), StepConfig::new("federal_low", "")]
        );
        assert_eq!(settings.narrative.offset, 0.3);
    }
}
