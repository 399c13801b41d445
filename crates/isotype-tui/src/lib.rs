//! isotype-tui - Terminal UI for the isotype unit chart
//!
//! This crate provides the ratatui-based terminal host. The terminal plays
//! the page: its width sets the chart container width, mouse motion is the
//! pointer, and a keyboard-scrolled narrative pane drives the step events.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
