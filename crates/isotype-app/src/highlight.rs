//! Highlight state machine
//!
//! A step identifier selects a coloring rule and an annotation. Identifiers
//! are resolved through [`STEP_RULES`] in order, so the named narrative
//! steps always win over the literal risk-key rule, and anything left over
//! lands on [`Step::Unknown`].

use std::collections::HashSet;
use std::time::Duration;

use isotype_core::{Color, RiskCatalog, RiskKey, Unit, NEUTRAL};
use tracing::{debug, warn};

/// Step shown before the reader has scrolled anywhere
pub const INTRO_STEP: &str = "intro_allblue";

/// Number of trailing `federal_uninsured` units emphasized by `federal_split`
pub const SPLIT_EMPHASIS_COUNT: usize = 72;

/// Shared fill for the federal-risk groups in the combined/split steps
pub const FEDERAL_SHARED: Color = Color::rgb(0xff, 0x8a, 0x8a);

/// Fill for the emphasized subset in the split step
pub const FEDERAL_EMPHASIS: Color = Color::rgb(0x75, 0x00, 0x00);

/// Default fill transition for the intro step
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(600);

const INTRO_ANNOTATION: &str = "Total enrollment in D.C. Medicaid: 272,249";
const ALL_ANNOTATION: &str = "All groups";
const FEDERAL_COMBINED_ANNOTATION: &str = "Subject to federal work requirements: 98,656";
// Authored total; does not match the 32,000 quoted for federal_uninsured.
const FEDERAL_SPLIT_ANNOTATION: &str = "Maybe uninsured in the next decade: 36,000";

/// A resolved step identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Everything neutral, total enrollment annotation
    Intro,
    /// Every unit in its own risk color
    All,
    /// Both federal-risk groups in the shared color
    FederalCombined,
    /// Federal groups shared, trailing uninsured units emphasized
    FederalSplit,
    /// A single risk key in its own color
    Risk(RiskKey),
    /// Unrecognized identifier; renders as no highlight
    Unknown(String),
}

type StepRule = fn(&str) -> Option<Step>;

fn intro_rule(id: &str) -> Option<Step> {
    (id == INTRO_STEP).then_some(Step::Intro)
}

fn all_rule(id: &str) -> Option<Step> {
    (id == "all").then_some(Step::All)
}

fn federal_combined_rule(id: &str) -> Option<Step> {
    (id == "federal_combined").then_some(Step::FederalCombined)
}

fn federal_split_rule(id: &str) -> Option<Step> {
    (id == "federal_split").then_some(Step::FederalSplit)
}

fn risk_key_rule(id: &str) -> Option<Step> {
    RiskKey::from_id(id).map(Step::Risk)
}

/// Ordered dispatch table; the first rule that matches wins
pub const STEP_RULES: [StepRule; 5] = [
    intro_rule,
    all_rule,
    federal_combined_rule,
    federal_split_rule,
    risk_key_rule,
];

impl Step {
    /// Resolve an identifier through [`STEP_RULES`]
    pub fn parse(id: &str) -> Self {
        STEP_RULES
            .iter()
            .find_map(|rule| rule(id))
            .unwrap_or_else(|| Step::Unknown(id.to_string()))
    }
}

/// Output of a step transition
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Fill for each unit, parallel to the unit slice
    pub colors: Vec<Color>,
    pub annotation: String,
    /// Fill transition to animate, if any
    pub transition: Option<Duration>,
}

/// Sequence indices of the `federal_uninsured` units that `federal_split` emphasizes
///
/// Keeps the [`SPLIT_EMPHASIS_COUNT`] largest stored indices, independent
/// of slice order.
pub fn split_emphasis_indices(units: &[Unit]) -> HashSet<usize> {
    let mut indices: Vec<usize> = units
        .iter()
        .filter(|u| u.risk == RiskKey::FederalUninsured)
        .map(|u| u.index)
        .collect();
    indices.sort_unstable();
    let skip = indices.len().saturating_sub(SPLIT_EMPHASIS_COUNT);
    indices.into_iter().skip(skip).collect()
}

/// Owns the current step and the annotation text it produced
#[derive(Debug, Clone)]
pub struct HighlightMachine {
    current: String,
    annotation: String,
    catalog: RiskCatalog,
    transition: Duration,
}

impl HighlightMachine {
    pub fn new(catalog: RiskCatalog) -> Self {
        Self {
            current: INTRO_STEP.to_string(),
            annotation: String::new(),
            catalog,
            transition: DEFAULT_TRANSITION,
        }
    }

    /// Override the intro fill transition
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// The persisted step identifier
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set_current(&mut self, step_id: impl Into<String>) {
        self.current = step_id.into();
    }

    /// The annotation produced by the most recent transition
    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    pub fn catalog(&self) -> &RiskCatalog {
        &self.catalog
    }

    /// Transition to `step_id`, persisting it and updating the annotation
    pub fn apply_step(&mut self, step_id: &str, units: &[Unit]) -> Highlight {
        self.set_current(step_id);
        let highlight = self.compute(&Step::parse(step_id), units);
        self.annotation.clone_from(&highlight.annotation);
        debug!(
            "Applied step {:?} to {} units: {}",
            step_id,
            units.len(),
            highlight.annotation
        );
        highlight
    }

    /// Re-run the persisted step, e.g. after a re-render
    pub fn reapply(&mut self, units: &[Unit]) -> Highlight {
        let current = self.current.clone();
        self.apply_step(&current, units)
    }

    fn compute(&self, step: &Step, units: &[Unit]) -> Highlight {
        let fill_all = |color: Color| vec![color; units.len()];
        let instant = |colors: Vec<Color>, annotation: String| Highlight {
            colors,
            annotation,
            transition: None,
        };

        match step {
            Step::Intro => Highlight {
                colors: fill_all(NEUTRAL),
                annotation: INTRO_ANNOTATION.to_string(),
                transition: Some(self.transition),
            },
            Step::All => instant(
                units.iter().map(|u| self.catalog.color(u.risk)).collect(),
                ALL_ANNOTATION.to_string(),
            ),
            Step::FederalCombined => instant(
                units
                    .iter()
                    .map(|u| match u.risk {
                        RiskKey::FederalWork | RiskKey::FederalUninsured => FEDERAL_SHARED,
                        _ => NEUTRAL,
                    })
                    .collect(),
                FEDERAL_COMBINED_ANNOTATION.to_string(),
            ),
            Step::FederalSplit => {
                let emphasized = split_emphasis_indices(units);
                instant(
                    units
                        .iter()
                        .map(|u| match u.risk {
                            RiskKey::FederalWork => FEDERAL_SHARED,
                            RiskKey::FederalUninsured if emphasized.contains(&u.index) => {
                                FEDERAL_EMPHASIS
                            }
                            RiskKey::FederalUninsured => FEDERAL_SHARED,
                            _ => NEUTRAL,
                        })
                        .collect(),
                    FEDERAL_SPLIT_ANNOTATION.to_string(),
                )
            }
            Step::Risk(key) => {
                let color = self.catalog.color(*key);
                instant(
                    units
                        .iter()
                        .map(|u| if u.risk == *key { color } else { NEUTRAL })
                        .collect(),
                    self.catalog.description(*key),
                )
            }
            Step::Unknown(id) => {
                warn!("Unknown step {:?}, rendering without highlight", id);
                instant(fill_all(NEUTRAL), self.catalog.describe(id))
            }
        }
    }
}

impl Default for HighlightMachine {
    fn default() -> Self {
        Self::new(RiskCatalog::default())
    }
}
