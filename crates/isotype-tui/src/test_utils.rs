//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.

use isotype_app::config::Settings;
use isotype_app::state::AppState;
use isotype_core::{dc_medicaid, generate};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use crate::layout;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one line
    pub fn buffer_contains(&self, text: &str) -> bool {
        let buffer = self.buffer();
        (0..buffer.area.height).any(|y| line_content(buffer, y).contains(text))
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Number of cells showing exactly `symbol`
    pub fn count_symbol(&self, symbol: &str) -> usize {
        self.buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == symbol)
            .count()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState laid out for the standard test terminal
pub fn create_test_state() -> AppState {
    create_test_state_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// AppState laid out for a `width` x `height` terminal
pub fn create_test_state_sized(width: u16, height: u16) -> AppState {
    let settings = Settings::default();
    let units = generate(&dc_medicaid(), settings.chart.unit_size);
    let viewport = layout::viewport_for(
        Rect::new(0, 0, width, height),
        settings.ui.px_per_column,
        units.len(),
    );
    AppState::with_units(settings, units, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::compact();
        term.render_widget(Paragraph::new("first\nsecond"), term.area());

        assert!(term.line_contains(0, "first"));
        assert!(term.line_contains(1, "second"));
        assert!(!term.line_contains(0, "second"));
        assert!(term.buffer_contains("second"));
        assert_eq!(term.count_symbol("f"), 1);
    }

    #[test]
    fn test_test_state_fits_standard_terminal() {
        let state = create_test_state();
        let inner = layout::create(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT)).chart_inner();
        let geometry = state.pipeline.geometry();
        assert!(geometry.num_cols <= usize::from(inner.width));
        assert!(geometry.num_rows <= usize::from(inner.height));
    }
}
