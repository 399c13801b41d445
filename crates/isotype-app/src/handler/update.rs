//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::debug;

use super::{keys::handle_key, steps, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Narrative Messages
        // ─────────────────────────────────────────────────────────
        Message::Scroll(delta) => steps::handle_scroll(state, delta),
        Message::NextStep => steps::handle_next_step(state),
        Message::PrevStep => steps::handle_prev_step(state),
        Message::JumpToStep(index) => steps::handle_jump_to_step(state, index),
        Message::StepEntered {
            index,
            step,
            direction,
        } => steps::handle_step_entered(state, index, &step, direction),
        Message::Highlight(step) => steps::handle_highlight(state, &step),

        // ─────────────────────────────────────────────────────────
        // Resize Messages
        // ─────────────────────────────────────────────────────────
        Message::Resize(viewport) => {
            state.pending_viewport = Some(viewport);
            UpdateResult::action(UpdateAction::ScheduleResize(viewport))
        }

        Message::ResizeSettled(viewport) => {
            if state
                .pending_viewport
                .is_some_and(|pending| pending != viewport)
            {
                debug!("Ignoring superseded resize {:?}", viewport);
                return UpdateResult::none();
            }
            state.pending_viewport = None;
            state.relayout(viewport);
            steps::sync_tracker(state)
        }

        // ─────────────────────────────────────────────────────────
        // Pointer Messages
        // ─────────────────────────────────────────────────────────
        Message::PointerMoved { x, y } => {
            state.pipeline.pointer_move(x, y);
            UpdateResult::none()
        }

        Message::PointerLeft => {
            state.pipeline.pointer_leave();
            UpdateResult::none()
        }
    }
}
