//! Narrative scrolling and step transitions

use crate::message::{Direction, Message};
use crate::narrative::StepEnter;
use crate::state::AppState;
use tracing::{debug, warn};

use super::UpdateResult;

/// Turn a tracker report into a `StepEntered` follow-up
fn entered(state: &AppState, enter: Option<StepEnter>) -> UpdateResult {
    let Some(StepEnter { index, direction }) = enter else {
        return UpdateResult::none();
    };
    match state.step_id(index) {
        Some(step) => UpdateResult::message(Message::StepEntered {
            index,
            step: step.to_string(),
            direction,
        }),
        None => {
            warn!("Tracker entered step {} with no narrative marker", index);
            UpdateResult::none()
        }
    }
}

pub fn handle_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    let enter = state.scroller.scroll_by(delta);
    entered(state, enter)
}

pub fn handle_jump_to_step(state: &mut AppState, index: usize) -> UpdateResult {
    let enter = state.scroller.scroll_to_step(index);
    entered(state, enter)
}

pub fn handle_next_step(state: &mut AppState) -> UpdateResult {
    let next = state.scroller.active().map_or(0, |i| i + 1);
    handle_jump_to_step(state, next)
}

pub fn handle_prev_step(state: &mut AppState) -> UpdateResult {
    let prev = state.scroller.active().unwrap_or(0).saturating_sub(1);
    handle_jump_to_step(state, prev)
}

/// Report the step under the trigger line after geometry changed
pub fn sync_tracker(state: &mut AppState) -> UpdateResult {
    let enter = state.scroller.sync();
    entered(state, enter)
}

/// Activate the entered marker and apply its highlight
pub fn handle_step_entered(
    state: &mut AppState,
    index: usize,
    step: &str,
    direction: Direction,
) -> UpdateResult {
    debug!("Entered step {} ({:?}) scrolling {:?}", index, step, direction);
    state.narrative.activate(index);
    handle_highlight(state, step)
}

/// Apply a step directly, without touching the narrative
pub fn handle_highlight(state: &mut AppState, step: &str) -> UpdateResult {
    let highlight = state.highlight.apply_step(step, &state.units);
    state.pipeline.apply(&highlight);
    UpdateResult::none()
}
