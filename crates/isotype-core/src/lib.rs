//! # isotype-core - Core Domain Types
//!
//! Foundation crate for the isotype unit chart. Provides domain types, the
//! fixed dataset, unit generation, grid layout, error handling, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AggregateRow`] - One `(group, risk, count)` row of the source data
//! - [`RiskKey`] - Closed set of risk categories
//! - [`Unit`] - One discrete visual atom with its stable sequence index
//! - [`Color`] - RGB fill parsed from CSS hex
//!
//! ### Dataset (`dataset`)
//! - [`dc_medicaid()`] - The literal enrollment rows
//! - [`RiskCatalog`] - Risk key to color/description lookup
//!
//! ### Unit Generation (`units`)
//! - [`generate()`] - Expand rows into units with per-row rounding
//!
//! ### Layout (`layout`)
//! - [`compute_layout()`] - Breakpoint-driven grid geometry
//! - [`GridGeometry`] - Columns, rows, cell size, margins and view box
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use isotype_core::prelude::*;
//! ```

pub mod dataset;
pub mod error;
pub mod layout;
pub mod logging;
pub mod types;
pub mod units;

/// Prelude for common imports used throughout all isotype crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use dataset::{dc_medicaid, RiskCatalog, RiskStyle, NEUTRAL, PLACEHOLDER, UNIT_SIZE};
pub use error::{Error, Result, ResultExt};
pub use layout::{
    columns_for_width, compute_layout, GridGeometry, Margins, ViewBox, BREAKPOINTS, CELL_SIZE,
    MARGINS, RADIUS, WIDE_COLUMNS,
};
pub use types::{AggregateRow, Color, ParseColorError, RiskKey, Unit};
pub use units::{count_by_group, count_by_risk, generate, units_for_count};
