//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Which way the reader was scrolling when a step was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Space available to the chart and the narrative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Chart container width in canvas pixels
    pub container_width: f64,
    /// Visible height of the narrative, in rows
    pub narrative_rows: u16,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Narrative Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the narrative by a number of rows (negative = up)
    Scroll(i32),
    /// Jump the narrative to the start of the next step
    NextStep,
    /// Jump the narrative to the start of the previous step
    PrevStep,
    /// Jump the narrative to the start of a step (clamped to the last one)
    JumpToStep(usize),
    /// The scroll tracker reports that a step crossed the trigger line
    StepEntered {
        index: usize,
        step: String,
        direction: Direction,
    },
    /// Highlight a step directly, without moving the narrative
    Highlight(String),

    // ─────────────────────────────────────────────────────────
    // Resize Messages
    // ─────────────────────────────────────────────────────────
    /// Raw viewport resize signal (debounced before relayout)
    Resize(Viewport),
    /// Debounce window elapsed; relayout with the last viewport
    ResizeSettled(Viewport),

    // ─────────────────────────────────────────────────────────
    // Pointer Messages
    // ─────────────────────────────────────────────────────────
    /// Pointer moved to a canvas point
    PointerMoved { x: f64, y: f64 },
    /// Pointer left the chart area
    PointerLeft,
}
