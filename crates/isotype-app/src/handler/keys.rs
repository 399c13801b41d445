//! Key bindings for the chart view

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key press into a message
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    let page = i32::from(state.viewport.narrative_rows / 2).max(1);
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('j') | InputKey::Down => Some(Message::Scroll(1)),
        InputKey::Char('k') | InputKey::Up => Some(Message::Scroll(-1)),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::Scroll(page)),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::Scroll(-page)),

        InputKey::Char('n' | ' ') | InputKey::Tab | InputKey::Enter => Some(Message::NextStep),
        InputKey::Char('p') => Some(Message::PrevStep),
        InputKey::Home | InputKey::Char('g') => Some(Message::JumpToStep(0)),
        InputKey::End | InputKey::Char('G') => Some(Message::JumpToStep(usize::MAX)),
        InputKey::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|d| Message::JumpToStep(d as usize - 1)),

        _ => None,
    }
}
