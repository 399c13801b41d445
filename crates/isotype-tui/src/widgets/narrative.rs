//! Narrative pane widget
//!
//! Shows the slice of the narrative the scroll tracker is positioned on.
//! Every step owns a section of `section_rows` rows: a heading line, then
//! its wrapped prose. The trigger line is marked on the right edge.

use isotype_app::{Narrative, Scroller};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const ACTIVE_BAR: &str = "┃ ";
const INACTIVE_BAR: &str = "  ";
const TRIGGER_MARK: &str = "◂";

pub struct NarrativePane<'a> {
    narrative: &'a Narrative,
    scroller: &'a Scroller,
}

impl<'a> NarrativePane<'a> {
    pub fn new(narrative: &'a Narrative, scroller: &'a Scroller) -> Self {
        Self {
            narrative,
            scroller,
        }
    }

    /// Lines of the section for step `index`, heading first
    fn section_lines(&self, index: usize, width: usize) -> Vec<String> {
        let Some(marker) = self.narrative.get(index) else {
            return Vec::new();
        };
        let mut lines = vec![format!("{}. {}", index + 1, marker.id)];
        lines.extend(wrap_text(&marker.text, width));
        lines
    }
}

impl Widget for NarrativePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        let section = self.scroller.section_rows() as usize;
        // leave room for the bar and the trigger mark
        let text_width = usize::from(area.width).saturating_sub(3);
        let trigger = self.scroller.trigger_row();
        let mut cache: Option<(usize, Vec<String>)> = None;

        for dy in 0..area.height {
            let content_row = self.scroller.position() as usize + usize::from(dy);
            let index = content_row / section;
            if index >= self.narrative.len() {
                break;
            }

            if cache.as_ref().map(|(i, _)| *i) != Some(index) {
                cache = Some((index, self.section_lines(index, text_width)));
            }
            let lines = cache.as_ref().map(|(_, l)| l.as_slice()).unwrap_or(&[]);
            let offset = content_row % section;

            let active = self.narrative.get(index).is_some_and(|m| m.active);
            let (bar, style) = match (active, offset) {
                (true, 0) => (ACTIVE_BAR, styles::accent_bold()),
                (true, _) => (ACTIVE_BAR, styles::text_primary()),
                (false, _) => (INACTIVE_BAR, styles::text_muted()),
            };

            let text = lines.get(offset).map(String::as_str).unwrap_or("");
            let line = Line::from(vec![
                Span::styled(bar, styles::accent_bold()),
                Span::styled(text, style),
            ]);
            buf.set_line(area.x, area.y + dy, &line, area.width.saturating_sub(1));

            if u32::from(dy) == trigger {
                buf.set_string(
                    area.right().saturating_sub(1),
                    area.y + dy,
                    TRIGGER_MARK,
                    styles::text_muted(),
                );
            }
        }
    }
}

/// Greedy word wrap to `width` display columns; overlong words are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = split_at_width(&word, width);
            let rest = word.split_off(split);
            lines.push(word);
            word = rest;
        }

        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte index where the prefix of `word` reaches `width` columns
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in word.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            return i.max(c.len_utf8());
        }
        used += w;
    }
    word.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use isotype_app::config::StepConfig;
    use isotype_app::StepTracker;

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("Every dot stands for 500 people", 10),
            vec!["Every dot", "stands for", "500 people"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("anything", 0).is_empty());
        assert!(wrap_text("", 8).is_empty());
    }

    #[test]
    fn test_renders_active_step_and_trigger() {
        let steps = vec![
            StepConfig::new("intro_allblue", "Each dot is 500 people."),
            StepConfig::new("all", "Groups differ."),
        ];
        let mut narrative = Narrative::new(&steps);
        narrative.activate(0);
        let mut scroller = Scroller::new(2, 0.3);
        scroller.resize(10);

        let mut term = TestTerminal::with_size(30, 10);
        term.render_widget(NarrativePane::new(&narrative, &scroller), term.area());

        // 10 rows: sections of 8, trigger at row 3
        assert!(term.line_contains(0, "┃ 1. intro_allblue"));
        assert!(term.line_contains(1, "Each dot is 500 people."));
        assert!(term.line_contains(3, TRIGGER_MARK));
        assert!(term.line_contains(8, "2. all"));
        assert!(!term.line_contains(8, ACTIVE_BAR));
    }
}
