//! Message processing and action dispatch
//!
//! Drives the TEA update loop until no follow-up message remains and hands
//! each resulting action to the event loop's side-effect owners.

use tokio::sync::mpsc;
use tracing::trace;

use crate::debounce::Debouncer;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Must be called from within a tokio runtime when the message can lead to a
/// scheduled resize.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    debouncer: &mut Debouncer,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, debouncer);
        }

        msg = result.message;
    }
}

fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, debouncer: &mut Debouncer) {
    match action {
        UpdateAction::ScheduleResize(viewport) => {
            trace!("Debouncing resize to {:?}", viewport);
            debouncer.schedule(Message::ResizeSettled(viewport), msg_tx.clone());
        }
    }
}
