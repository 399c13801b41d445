//! isotype-app - Application state and orchestration for the isotype unit chart
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, plus the highlight state machine, render pipeline, tooltip,
//! resize debouncer, scroll tracker, settings loading and headless export.

pub mod config;
pub mod debounce;
pub mod export;
pub mod handler;
pub mod highlight;
pub mod input_key;
pub mod message;
pub mod narrative;
pub mod process;
pub mod scene;
pub mod signals;
pub mod state;
pub mod tooltip;

// Re-export primary types
pub use config::Settings;
pub use debounce::Debouncer;
pub use export::{render_scene, summary, to_json, to_svg, write_export, ExportedScene};
pub use handler::{update, UpdateAction, UpdateResult};
pub use highlight::{Highlight, HighlightMachine, Step, INTRO_STEP};
pub use input_key::InputKey;
pub use message::{Direction, Message, Viewport};
pub use narrative::{Narrative, Scroller, StepTracker};
pub use process::process_message;
pub use scene::{PointerHandler, Primitive, RenderPipeline, Scene};
pub use state::{AppPhase, AppState};
pub use tooltip::{plain_text, TooltipController, TooltipPanel};
