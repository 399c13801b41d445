//! Screen layout definitions for the TUI
//!
//! The chart and the narrative sit side by side between a one-line header
//! and a one-line annotation bar. Both panes carry a border.

use isotype_app::Viewport;
use isotype_core::{compute_layout, BREAKPOINTS};
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::{debug, warn};

use crate::widgets::GridMapping;

/// Narrative pane width, including its border
pub const NARRATIVE_WIDTH: u16 = 34;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title and key hints
    pub header: Rect,

    /// Bordered chart pane
    pub chart: Rect,

    /// Bordered narrative pane
    pub narrative: Rect,

    /// Current annotation
    pub annotation: Rect,
}

impl ScreenAreas {
    /// Chart area inside its border
    pub fn chart_inner(&self) -> Rect {
        inner(self.chart)
    }

    /// Narrative area inside its border
    pub fn narrative_inner(&self) -> Rect {
        inner(self.narrative)
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, annotation] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [chart, narrative] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(NARRATIVE_WIDTH)]).areas(body);

    ScreenAreas {
        header,
        chart,
        narrative,
        annotation,
    }
}

/// Chart container width and narrative height for a terminal of `area`
///
/// The width is the chart pane scaled by `px_per_column`. If that layout
/// would leave some of `unit_count` units off the pane, the widest column
/// bucket that shows all of them is used instead.
pub fn viewport_for(area: Rect, px_per_column: u16, unit_count: usize) -> Viewport {
    let areas = create(area);
    let chart = areas.chart_inner();
    let natural = f64::from(chart.width) * f64::from(px_per_column);

    let visible = |width: f64| {
        let mapping = GridMapping::new(chart, compute_layout(width, unit_count));
        unit_count - mapping.hidden(unit_count)
    };

    // Natural width first, then bucket lower bounds from most to fewest columns
    let mut candidates = vec![natural];
    candidates.extend(BREAKPOINTS.iter().rev().map(|(bound, _)| *bound));
    candidates.push(0.0);

    let container_width = match candidates.iter().copied().find(|&w| visible(w) == unit_count) {
        Some(width) => {
            if width != natural {
                debug!(
                    "Chart pane {}x{} too small at {}px, using {}px",
                    chart.width, chart.height, natural, width
                );
            }
            width
        }
        None => {
            let best = candidates
                .iter()
                .copied()
                .max_by_key(|&w| visible(w))
                .unwrap_or(natural);
            warn!(
                "Chart pane {}x{} cannot show all {} units, {} hidden",
                chart.width,
                chart.height,
                unit_count,
                unit_count - visible(best)
            );
            best
        }
    };

    Viewport {
        container_width,
        narrative_rows: areas.narrative_inner().height,
    }
}

fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let areas = create(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.header, Rect::new(0, 0, 80, 1));
        assert_eq!(areas.annotation, Rect::new(0, 23, 80, 1));
        assert_eq!(areas.chart, Rect::new(0, 1, 46, 22));
        assert_eq!(areas.narrative, Rect::new(46, 1, 34, 22));
        assert_eq!(areas.chart_inner(), Rect::new(1, 2, 44, 20));
    }

    #[test]
    fn test_viewport_scales_chart_columns() {
        let viewport = viewport_for(Rect::new(0, 0, 80, 24), 10, 544);
        assert_eq!(viewport.container_width, 440.0);
        assert_eq!(viewport.narrative_rows, 20);

        let wide = viewport_for(Rect::new(0, 0, 160, 40), 10, 544);
        assert_eq!(wide.container_width, 1240.0);
        assert_eq!(wide.narrative_rows, 36);
    }

    #[test]
    fn test_viewport_falls_back_to_a_bucket_that_fits() {
        // 44 columns of pane at 30px would pick 45 grid columns
        let viewport = viewport_for(Rect::new(0, 0, 80, 24), 30, 544);
        assert_eq!(viewport.container_width, 640.0);
        assert_eq!(compute_layout(viewport.container_width, 544).num_cols, 40);
    }

    #[test]
    fn test_viewport_keeps_every_unit_on_narrow_terminals() {
        for width in [60, 70, 80, 100] {
            let area = Rect::new(0, 0, width, 24);
            let viewport = viewport_for(area, 15, 544);
            let mapping = GridMapping::new(
                create(area).chart_inner(),
                compute_layout(viewport.container_width, 544),
            );
            assert_eq!(mapping.hidden(544), 0, "terminal {width}x24");
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let viewport = viewport_for(Rect::new(0, 0, 4, 2), 10, 544);
        assert_eq!(viewport.narrative_rows, 0);
    }
}
