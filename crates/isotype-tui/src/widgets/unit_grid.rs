//! Unit grid widget
//!
//! Draws one symbol per unit, one terminal cell per grid cell. When the grid
//! has more rows than the pane, each terminal cell carries two grid rows as a
//! half block (upper unit in the foreground, lower unit in the background).
//! The [`GridMapping`] translates between terminal cells and canvas points so
//! mouse events can be hit-tested against the scene.

use isotype_app::Scene;
use isotype_core::GridGeometry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Glyph drawn for each unit
pub const UNIT_SYMBOL: &str = "●";

/// Glyph for a terminal cell holding two units stacked vertically
pub const HALF_UNIT_SYMBOL: &str = "▀";

/// Correspondence between the chart pane and the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMapping {
    /// Terminal area the grid is drawn into
    pub area: Rect,
    pub geometry: GridGeometry,
    /// Grid rows per terminal row, 1 or 2
    pub rows_per_cell: u16,
}

impl GridMapping {
    pub fn new(area: Rect, geometry: GridGeometry) -> Self {
        let rows_per_cell = if geometry.num_rows > usize::from(area.height) {
            2
        } else {
            1
        };
        Self {
            area,
            geometry,
            rows_per_cell,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.rows_per_cell > 1
    }

    /// Terminal cell of sequence index `i`, if it fits in the area
    pub fn cell_for(&self, i: usize) -> Option<(u16, u16)> {
        let (col, row) = self.geometry.cell_of(i);
        let row = row / usize::from(self.rows_per_cell);
        let col = u16::try_from(col).ok().filter(|c| *c < self.area.width)?;
        let row = u16::try_from(row).ok().filter(|r| *r < self.area.height)?;
        Some((self.area.x + col, self.area.y + row))
    }

    /// Units among the first `unit_count` that have no terminal cell
    pub fn hidden(&self, unit_count: usize) -> usize {
        (0..unit_count).filter(|&i| self.cell_for(i).is_none()).count()
    }

    /// Canvas point at the center of the grid cell under terminal cell `(column, row)`
    ///
    /// In compact mode the upper of the two stacked units is targeted.
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let inside = column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom();
        if !inside {
            return None;
        }
        let g = &self.geometry;
        let half = g.cell_size / 2.0;
        let grid_row = (row - self.area.y) * self.rows_per_cell;
        Some((
            g.margins.left + f64::from(column - self.area.x) * g.cell_size + half,
            g.margins.top + f64::from(grid_row) * g.cell_size + half,
        ))
    }

    /// Terminal cell for a canvas point, clamped into the area
    pub fn to_terminal(&self, x: f64, y: f64) -> (u16, u16) {
        let g = &self.geometry;
        let col = ((x - g.margins.left) / g.cell_size).floor().max(0.0);
        let row = ((y - g.margins.top) / g.cell_size).floor().max(0.0);
        let row = row / f64::from(self.rows_per_cell);
        let clamp = |v: f64, len: u16| (v as u16).min(len.saturating_sub(1));
        (
            self.area.x + clamp(col, self.area.width),
            self.area.y + clamp(row, self.area.height),
        )
    }
}

/// Draws every primitive of a scene
pub struct UnitGrid<'a> {
    scene: &'a Scene,
    hovered: Option<usize>,
}

impl<'a> UnitGrid<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            hovered: None,
        }
    }

    /// Emphasize the primitive under the pointer
    pub fn hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }
}

impl Widget for UnitGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mapping = GridMapping::new(area, self.scene.geometry);
        let mut hidden = 0usize;

        for (i, primitive) in self.scene.primitives.iter().enumerate() {
            let Some((x, y)) = mapping.cell_for(i) else {
                hidden += 1;
                continue;
            };
            let color = palette::chart_color(primitive.fill);
            let cell = &mut buf[(x, y)];

            if mapping.is_compact() {
                let (_, row) = mapping.geometry.cell_of(i);
                if row % 2 == 0 {
                    cell.set_symbol(HALF_UNIT_SYMBOL).set_fg(color);
                } else {
                    cell.set_bg(color);
                }
                if self.hovered == Some(i) {
                    let emphasis = Modifier::BOLD | Modifier::UNDERLINED;
                    cell.set_style(Style::default().add_modifier(emphasis));
                }
                continue;
            }

            let mut style = Style::default().fg(color);
            if self.hovered == Some(i) {
                style = style.bg(palette::BORDER_ACTIVE).add_modifier(Modifier::BOLD);
            }
            cell.set_symbol(UNIT_SYMBOL).set_style(style);
        }

        if hidden > 0 && area.height > 0 {
            let label = format!("+{hidden} hidden");
            let width = u16::try_from(label.len()).unwrap_or(u16::MAX).min(area.width);
            buf.set_stringn(
                area.right() - width,
                area.bottom() - 1,
                &label,
                usize::from(width),
                styles::accent_bold(),
            );
        }
    }
}
