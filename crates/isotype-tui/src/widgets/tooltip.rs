//! Tooltip overlay
//!
//! Draws the tooltip panel as a floating box near the pointer, shifted back
//! inside the screen when it would overflow.

use isotype_app::{plain_text, TooltipPanel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

use super::GridMapping;

pub struct TooltipOverlay<'a> {
    panel: &'a TooltipPanel,
    mapping: GridMapping,
}

impl<'a> TooltipOverlay<'a> {
    pub fn new(panel: &'a TooltipPanel, mapping: GridMapping) -> Self {
        Self { panel, mapping }
    }

    /// Where the panel lands on a screen of `screen`
    pub fn placement(&self, screen: Rect) -> Rect {
        let lines = plain_text(&self.panel.html);
        let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let width = (content_width as u16).saturating_add(2).min(screen.width);
        let height = (lines.len() as u16).saturating_add(2).min(screen.height);

        let (x, y) = self.mapping.to_terminal(self.panel.left, self.panel.top);
        let x = x.min(screen.right().saturating_sub(width)).max(screen.x);
        let y = y.min(screen.bottom().saturating_sub(height)).max(screen.y);
        Rect::new(x, y, width, height)
    }
}

impl Widget for TooltipOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.panel.is_visible() {
            return;
        }
        let rect = self.placement(area);

        let lines: Vec<Line> = plain_text(&self.panel.html)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    Line::styled(text, styles::text_primary().add_modifier(Modifier::BOLD))
                } else {
                    Line::styled(text, styles::text_primary())
                }
            })
            .collect();

        Clear.render(rect, buf);
        Paragraph::new(lines)
            .block(styles::popup_block())
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use isotype_core::compute_layout;

    fn panel(left: f64, top: f64, opacity: f64) -> TooltipPanel {
        TooltipPanel {
            html: "<strong>Children (non-CHIP)</strong><br/>Risk: Exempt".to_string(),
            left,
            top,
            opacity,
        }
    }

    fn mapping() -> GridMapping {
        GridMapping::new(Rect::new(1, 1, 40, 20), compute_layout(300.0, 100))
    }

    #[test]
    fn test_placement_follows_pointer() {
        let p = panel(23.0, 23.0, 1.0);
        let overlay = TooltipOverlay::new(&p, mapping());
        // "Children (non-CHIP)" is 19 wide, plus borders
        assert_eq!(overlay.placement(Rect::new(0, 0, 80, 24)), Rect::new(2, 2, 21, 4));
    }

    #[test]
    fn test_placement_stays_on_screen() {
        let p = panel(380.0, 180.0, 1.0);
        let overlay = TooltipOverlay::new(&p, mapping());
        let rect = overlay.placement(Rect::new(0, 0, 30, 12));
        assert_eq!(rect, Rect::new(9, 8, 21, 4));
    }

    #[test]
    fn test_renders_plain_lines() {
        let p = panel(23.0, 23.0, 1.0);
        let mut term = TestTerminal::new();
        term.render_widget(TooltipOverlay::new(&p, mapping()), term.area());

        assert!(term.line_contains(3, "Children (non-CHIP)"));
        assert!(term.line_contains(4, "Risk: Exempt"));
        assert!(!term.buffer_contains("<strong>"));
    }

    #[test]
    fn test_hidden_panel_draws_nothing() {
        let p = panel(23.0, 23.0, 0.0);
        let mut term = TestTerminal::new();
        term.render_widget(TooltipOverlay::new(&p, mapping()), term.area());
        assert!(!term.buffer_contains("Children"));
    }
}
