//! Terminal-independent key events
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the update loop can be driven from tests without a terminal.

/// A key press the chart reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Plain character key
    Char(char),
    /// Character pressed with Ctrl
    CharCtrl(char),
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Esc,
    Tab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
        assert_eq!(InputKey::Char('j'), InputKey::Char('j'));
    }
}
