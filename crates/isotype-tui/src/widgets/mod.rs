//! Custom widget components

mod annotation;
mod header;
mod narrative;
mod tooltip;
mod unit_grid;

pub use annotation::AnnotationBar;
pub use header::MainHeader;
pub use narrative::{wrap_text, NarrativePane};
pub use tooltip::TooltipOverlay;
pub use unit_grid::{GridMapping, UnitGrid, HALF_UNIT_SYMBOL, UNIT_SYMBOL};
