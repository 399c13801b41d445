//! Configuration file parsing for the unit chart
//!
//! Supports:
//! - `.isotype/config.toml` - Chart, resize, narrative and UI settings

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from, read_settings, CONFIG_FILENAME, ISOTYPE_DIR};
pub use types::*;
