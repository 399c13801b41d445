//! Header bar widget
//!
//! App title on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

const TITLE: &str = " isotype ";
const KEY_HINTS: &str = "j/k scroll  n/p step  1-9 jump  q quit ";

/// Main header showing the chart title and keybindings
pub struct MainHeader<'a> {
    subtitle: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(subtitle: &'a str) -> Self {
        Self { subtitle }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let title = Line::from(vec![
            Span::styled(TITLE, styles::accent_bold()),
            Span::styled(self.subtitle, styles::text_primary()),
        ]);
        buf.set_line(area.x, area.y, &title, area.width);

        // Hints only when they fit beside the title
        let used = (TITLE.width() + self.subtitle.width() + 2) as u16;
        let hints_width = KEY_HINTS.width() as u16;
        if used + hints_width <= area.width {
            buf.set_string(
                area.right() - hints_width,
                area.y,
                KEY_HINTS,
                styles::text_muted(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("D.C. Medicaid"), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "isotype"));
        assert!(term.line_contains(0, "D.C. Medicaid"));
        assert!(term.line_contains(0, "q quit"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(MainHeader::new("D.C. Medicaid"), Rect::new(0, 0, 40, 1));

        assert!(term.line_contains(0, "isotype"));
        assert!(!term.line_contains(0, "q quit"));
    }
}
