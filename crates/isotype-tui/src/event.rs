//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEvent, MouseEventKind};
use isotype_app::state::AppState;
use isotype_app::{InputKey, Message};
use isotype_core::prelude::*;
use ratatui::layout::Rect;
use std::time::Duration;

use crate::layout;
use crate::widgets::GridMapping;

/// Narrative rows moved per mouse wheel notch
const WHEEL_ROWS: i32 = 1;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event over a screen of `screen` into a pointer or scroll message
pub fn mouse_event_to_message(
    mouse: MouseEvent,
    screen: Rect,
    state: &AppState,
) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let chart = layout::create(screen).chart_inner();
            let mapping = GridMapping::new(chart, *state.pipeline.geometry());
            Some(match mapping.to_canvas(mouse.column, mouse.row) {
                Some((x, y)) => Message::PointerMoved { x, y },
                None => Message::PointerLeft,
            })
        }
        MouseEventKind::ScrollDown => Some(Message::Scroll(WHEEL_ROWS)),
        MouseEventKind::ScrollUp => Some(Message::Scroll(-WHEEL_ROWS)),
        _ => None,
    }
}

/// Convert any terminal event into a message
pub fn event_to_message(event: Event, screen: Rect, state: &AppState) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, screen, state),
        Event::Resize(width, height) => Some(Message::Resize(layout::viewport_for(
            Rect::new(0, 0, width, height),
            state.settings.ui.px_per_column,
            state.units.len(),
        ))),
        Event::FocusLost => Some(Message::PointerLeft),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(screen: Rect, state: &AppState) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(event_to_message(event::read()?, screen, state))
    } else {
        Ok(Some(Message::Tick))
    }
}
