//! Theme for the chart view.
//!
//! This module provides:
//! - `palette` - Raw color constants and chart color conversion
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;
