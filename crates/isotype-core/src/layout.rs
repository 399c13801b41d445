//! Responsive grid layout for the unit chart
//!
//! Column count comes from a breakpoint table on the container width; every
//! other dimension is a fixed constant. The result is a pure function of
//! `(container_width, unit_count)`.

use serde::Serialize;
use tracing::warn;

/// Side length of one grid cell in canvas units
pub const CELL_SIZE: f64 = 10.0;

/// Radius of a unit circle in canvas units
pub const RADIUS: f64 = 3.2;

/// Canvas margins around the grid
pub const MARGINS: Margins = Margins {
    top: 8.0,
    right: 8.0,
    bottom: 12.0,
    left: 8.0,
};

/// Width breakpoints: `(exclusive upper bound, columns)`, ascending
pub const BREAKPOINTS: [(f64, usize); 3] = [(420.0, 16), (640.0, 20), (900.0, 40)];

/// Columns used when the width clears every breakpoint
pub const WIDE_COLUMNS: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Canvas extent (`0 0 width height`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

/// Derived grid geometry, recomputed on every layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridGeometry {
    pub num_cols: usize,
    pub num_rows: usize,
    pub cell_size: f64,
    pub radius: f64,
    pub margins: Margins,
    pub view_box: ViewBox,
}

/// Column count for a container width
///
/// First matching upper bound wins; a width equal to a bound falls into the
/// next bucket. Negative or non-finite widths are treated as zero.
pub fn columns_for_width(container_width_px: f64) -> usize {
    let width = sanitize_width(container_width_px);
    BREAKPOINTS
        .iter()
        .find(|(bound, _)| width < *bound)
        .map(|(_, cols)| *cols)
        .unwrap_or(WIDE_COLUMNS)
}

fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width >= 0.0 {
        width
    } else {
        warn!("Invalid container width {}, treating as 0", width);
        0.0
    }
}

/// Compute grid geometry for `unit_count` units in a container `container_width_px` wide
pub fn compute_layout(container_width_px: f64, unit_count: usize) -> GridGeometry {
    let num_cols = columns_for_width(container_width_px);
    // num_cols is always one of the table's non-zero constants
    let num_rows = unit_count.div_ceil(num_cols);

    if unit_count == 0 {
        warn!("Laying out an empty unit set, canvas collapses to margins");
    }

    let view_box = ViewBox {
        width: num_cols as f64 * CELL_SIZE + MARGINS.left + MARGINS.right,
        height: num_rows as f64 * CELL_SIZE + MARGINS.top + MARGINS.bottom,
    };

    GridGeometry {
        num_cols,
        num_rows,
        cell_size: CELL_SIZE,
        radius: RADIUS,
        margins: MARGINS,
        view_box,
    }
}

impl GridGeometry {
    /// Grid `(col, row)` of sequence index `i`
    pub fn cell_of(&self, i: usize) -> (usize, usize) {
        (i % self.num_cols, i / self.num_cols)
    }

    /// Circle center of sequence index `i`
    pub fn cell_center(&self, i: usize) -> (f64, f64) {
        let (col, row) = self.cell_of(i);
        let half = self.cell_size / 2.0;
        (
            self.margins.left + col as f64 * self.cell_size + half,
            self.margins.top + row as f64 * self.cell_size + half,
        )
    }

    /// Sequence index whose cell contains the canvas point `(x, y)`
    ///
    /// Returns `None` for points in the margins or past `unit_count`.
    pub fn cell_at(&self, x: f64, y: f64, unit_count: usize) -> Option<usize> {
        let gx = x - self.margins.left;
        let gy = y - self.margins.top;
        if !(gx >= 0.0 && gy >= 0.0) {
            return None;
        }
        let col = (gx / self.cell_size).floor() as usize;
        let row = (gy / self.cell_size).floor() as usize;
        if col >= self.num_cols || row >= self.num_rows {
            return None;
        }
        let index = row * self.num_cols + col;
        (index < unit_count).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_breakpoint_table() {
        assert_eq!(columns_for_width(0.0), 16);
        assert_eq!(columns_for_width(419.9), 16);
        assert_eq!(columns_for_width(420.0), 20);
        assert_eq!(columns_for_width(639.0), 20);
        assert_eq!(columns_for_width(640.0), 40);
        assert_eq!(columns_for_width(899.0), 40);
        assert_eq!(columns_for_width(900.0), 45);
        assert_eq!(columns_for_width(4000.0), 45);
    }

    #[test]
    fn test_invalid_widths_use_smallest_bucket() {
        assert_eq!(columns_for_width(-5.0), 16);
        assert_eq!(columns_for_width(f64::NAN), 16);
        assert_eq!(columns_for_width(f64::INFINITY), 16);
    }

    #[test]
    fn test_layout_narrow_container() {
        let geometry = compute_layout(300.0, 544);
        assert_eq!(geometry.num_cols, 16);
        assert_eq!(geometry.num_rows, 34);
        assert_eq!(geometry.view_box.width, 16.0 * 10.0 + 16.0);
        assert_eq!(geometry.view_box.height, 34.0 * 10.0 + 20.0);
    }

    #[test]
    fn test_layout_wide_container() {
        let geometry = compute_layout(1200.0, 544);
        assert_eq!(geometry.num_cols, 45);
        assert_eq!(geometry.num_rows, 13); // ceil(544 / 45)
    }

    #[test]
    fn test_layout_empty_collapses_to_margins() {
        let geometry = compute_layout(0.0, 0);
        assert_eq!(geometry.num_rows, 0);
        assert_eq!(geometry.view_box.height, MARGINS.top + MARGINS.bottom);
        assert_eq!(
            geometry.view_box.width,
            16.0 * CELL_SIZE + MARGINS.left + MARGINS.right
        );
    }

    #[test]
    fn test_cell_center() {
        let geometry = compute_layout(300.0, 544);
        assert_eq!(geometry.cell_center(0), (13.0, 13.0));
        assert_eq!(geometry.cell_center(15), (163.0, 13.0));
        assert_eq!(geometry.cell_center(16), (13.0, 23.0));
    }

    #[test]
    fn test_cell_at_hit_testing() {
        let geometry = compute_layout(300.0, 20);
        assert_eq!(geometry.cell_at(13.0, 13.0, 20), Some(0));
        assert_eq!(geometry.cell_at(17.9, 8.0, 20), Some(0));
        assert_eq!(geometry.cell_at(18.0, 8.0, 20), Some(1));
        assert_eq!(geometry.cell_at(13.0, 23.0, 20), Some(16));
        // Second row only holds indices 16..20
        assert_eq!(geometry.cell_at(63.0, 23.0, 20), None);
        // Margins
        assert_eq!(geometry.cell_at(2.0, 13.0, 20), None);
        assert_eq!(geometry.cell_at(13.0, -1.0, 20), None);
        assert_eq!(geometry.cell_at(f64::NAN, 13.0, 20), None);
    }

    proptest! {
        #[test]
        fn prop_rows_cover_units(width in 0.0f64..3000.0, count in 0usize..5000) {
            let geometry = compute_layout(width, count);
            let cols = columns_for_width(width);
            prop_assert_eq!(geometry.num_cols, cols);
            prop_assert_eq!(geometry.num_rows, (count + cols - 1) / cols);
            prop_assert!(geometry.view_box.width >= 0.0);
            prop_assert!(geometry.view_box.height >= 0.0);
        }

        #[test]
        fn prop_centers_round_trip_through_hit_test(width in 0.0f64..3000.0, count in 1usize..2000) {
            let geometry = compute_layout(width, count);
            let i = count - 1;
            let (x, y) = geometry.cell_center(i);
            prop_assert_eq!(geometry.cell_at(x, y, count), Some(i));
        }
    }
}
