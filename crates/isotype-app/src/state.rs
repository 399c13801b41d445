//! Application state (Model in TEA pattern)

use isotype_core::{compute_layout, dc_medicaid, generate, RiskCatalog, Unit};
use tracing::info;

use crate::config::Settings;
use crate::highlight::HighlightMachine;
use crate::message::Viewport;
use crate::narrative::{Narrative, Scroller, StepTracker};
use crate::scene::RenderPipeline;
use crate::tooltip::TooltipController;

/// Lifecycle of the interactive chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Generated once at startup, never mutated
    pub units: Vec<Unit>,

    /// Scene plus the tooltip that receives its pointer events
    pub pipeline: RenderPipeline<TooltipController>,

    /// Current step and annotation
    pub highlight: HighlightMachine,

    pub narrative: Narrative,
    pub scroller: Scroller,

    /// Viewport the current scene was laid out for
    pub viewport: Viewport,

    /// Most recent raw resize, not yet settled
    pub pending_viewport: Option<Viewport>,
}

impl AppState {
    /// Build state for the D.C. Medicaid dataset and lay it out for `viewport`
    pub fn new(settings: Settings, viewport: Viewport) -> Self {
        let units = generate(&dc_medicaid(), settings.chart.unit_size);
        Self::with_units(settings, units, viewport)
    }

    /// Build state for an arbitrary unit sequence
    pub fn with_units(settings: Settings, units: Vec<Unit>, viewport: Viewport) -> Self {
        let catalog = RiskCatalog::default();
        let highlight =
            HighlightMachine::new(catalog.clone()).with_transition(settings.chart.transition());
        let narrative = Narrative::new(&settings.narrative.steps);
        let scroller = Scroller::new(narrative.len(), settings.narrative.offset);

        info!(
            "Generated {} units from {} narrative steps",
            units.len(),
            narrative.len()
        );

        let mut state = Self {
            phase: AppPhase::Running,
            settings,
            units,
            pipeline: RenderPipeline::new(TooltipController::new(catalog)),
            highlight,
            narrative,
            scroller,
            viewport,
            pending_viewport: None,
        };
        state.relayout(viewport);
        state
    }

    /// Re-run layout and render for `viewport`, then resize the step tracker
    pub fn relayout(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        relayout(
            &self.units,
            &mut self.pipeline,
            &mut self.highlight,
            &mut self.scroller,
            viewport,
        );
    }

    /// Id of the narrative step at `index`
    pub fn step_id(&self, index: usize) -> Option<&str> {
        self.narrative.get(index).map(|m| m.id.as_str())
    }

    pub fn annotation(&self) -> &str {
        self.highlight.annotation()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

/// Layout, render with the persisted step, then notify the tracker, in that order
pub(crate) fn relayout<T: StepTracker>(
    units: &[Unit],
    pipeline: &mut RenderPipeline<TooltipController>,
    highlight: &mut HighlightMachine,
    tracker: &mut T,
    viewport: Viewport,
) {
    let geometry = compute_layout(viewport.container_width, units.len());
    pipeline.render(units, geometry, highlight);
    tracker.resize(viewport.narrative_rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::INTRO_STEP;
    use crate::narrative::MockStepTracker;
    use mockall::predicate::eq;

    fn viewport(width: f64) -> Viewport {
        Viewport {
            container_width: width,
            narrative_rows: 20,
        }
    }

    #[test]
    fn test_new_renders_every_unit() {
        let state = AppState::new(Settings::default(), viewport(300.0));

        assert_eq!(state.units.len(), 544);
        assert_eq!(state.pipeline.len(), 544);
        assert_eq!(state.pipeline.geometry().num_cols, 16);
        assert_eq!(state.pipeline.geometry().num_rows, 34);
        assert_eq!(state.highlight.current(), INTRO_STEP);
        assert_eq!(state.annotation(), "Total enrollment in D.C. Medicaid: 272,249");
        assert_eq!(state.scroller.resize_count(), 1);
    }

    #[test]
    fn test_step_id_lookup() {
        let state = AppState::new(Settings::default(), viewport(800.0));
        assert_eq!(state.step_id(0), Some(INTRO_STEP));
        assert_eq!(state.step_id(5), Some("federal_split"));
        assert_eq!(state.step_id(99), None);
    }

    #[test]
    fn test_relayout_resizes_tracker_after_render() {
        let mut state = AppState::new(Settings::default(), viewport(300.0));
        let renders_before = state.pipeline.render_count();

        let mut tracker = MockStepTracker::new();
        tracker.expect_resize().with(eq(33u16)).times(1).return_const(());

        relayout(
            &state.units,
            &mut state.pipeline,
            &mut state.highlight,
            &mut tracker,
            Viewport {
                container_width: 1000.0,
                narrative_rows: 33,
            },
        );

        assert_eq!(state.pipeline.render_count(), renders_before + 1);
        assert_eq!(state.pipeline.geometry().num_cols, 45);
        assert_eq!(state.pipeline.len(), 544);
    }

    #[test]
    fn test_should_quit() {
        let mut state = AppState::new(Settings::default(), viewport(300.0));
        assert!(!state.should_quit());
        state.phase = AppPhase::Quitting;
        assert!(state.should_quit());
    }
}
