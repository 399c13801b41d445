//! Narrative steps and the scroll tracker that turns scroll position into step events
//!
//! Each step is a section of the narrative whose height follows the
//! viewport. A step is "entered" when its section crosses the trigger line,
//! placed at `offset` of the viewport height from the top.

use tracing::{debug, warn};

use crate::config::StepConfig;
use crate::message::Direction;

/// Default trigger line position, as a fraction of the viewport height
pub const DEFAULT_OFFSET: f64 = 0.3;

/// Section height as a fraction of the viewport height
const SECTION_FRACTION: f64 = 0.8;

/// Smallest section height in rows
const MIN_SECTION_ROWS: u32 = 3;

/// One narrative beat and whether it is the active one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMarker {
    pub id: String,
    pub text: String,
    pub active: bool,
}

/// The ordered narrative step markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    markers: Vec<StepMarker>,
}

impl Narrative {
    pub fn new(steps: &[StepConfig]) -> Self {
        Self {
            markers: steps
                .iter()
                .map(|s| StepMarker {
                    id: s.id.clone(),
                    text: s.text.clone(),
                    active: false,
                })
                .collect(),
        }
    }

    /// Mark exactly one marker active; an out-of-range index deactivates all
    pub fn activate(&mut self, index: usize) {
        if index >= self.markers.len() {
            warn!(
                "Step index {} out of range ({} steps)",
                index,
                self.markers.len()
            );
        }
        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.active = i == index;
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.markers.iter().position(|m| m.active)
    }

    pub fn markers(&self) -> &[StepMarker] {
        &self.markers
    }

    pub fn get(&self, index: usize) -> Option<&StepMarker> {
        self.markers.get(index)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// A step crossing the trigger line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEnter {
    pub index: usize,
    pub direction: Direction,
}

/// Position tracker notified when layout geometry changes
#[cfg_attr(test, mockall::automock)]
pub trait StepTracker {
    /// Recalculate section offsets for a viewport `viewport_rows` tall
    fn resize(&mut self, viewport_rows: u16);
}

/// Maps a scroll position over equally tall sections to step events
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    step_count: usize,
    offset: f64,
    viewport_rows: u16,
    section_rows: u32,
    position: u32,
    active: Option<usize>,
    resizes: usize,
}

impl Scroller {
    pub fn new(step_count: usize, offset: f64) -> Self {
        let offset = if (0.0..=1.0).contains(&offset) {
            offset
        } else {
            warn!("Scroll offset {} outside 0..=1, using {}", offset, DEFAULT_OFFSET);
            DEFAULT_OFFSET
        };
        let mut scroller = Self {
            step_count,
            offset,
            viewport_rows: 0,
            section_rows: MIN_SECTION_ROWS,
            position: 0,
            active: None,
            resizes: 0,
        };
        scroller.recalculate(0);
        scroller
    }

    /// Resize sections, keeping the trigger line at the same relative spot
    /// inside the active section
    fn recalculate(&mut self, viewport_rows: u16) {
        let anchor = self.active.map(|index| {
            let start = self.section_rows * index as u32;
            let line = self.position + self.trigger_row();
            let within = line.saturating_sub(start).min(self.section_rows - 1);
            (index, f64::from(within) / f64::from(self.section_rows))
        });

        self.viewport_rows = viewport_rows;
        let scaled = (f64::from(viewport_rows) * SECTION_FRACTION).floor() as u32;
        self.section_rows = scaled.max(MIN_SECTION_ROWS);

        if let Some((index, fraction)) = anchor {
            let within = ((fraction * f64::from(self.section_rows)).floor() as u32)
                .min(self.section_rows - 1);
            let line = self.section_rows * index as u32 + within;
            self.position = line.saturating_sub(self.trigger_row());
        }
        self.position = self.position.min(self.max_position());
    }

    /// Rows from the top of the viewport to the trigger line
    pub fn trigger_row(&self) -> u32 {
        (f64::from(self.viewport_rows) * self.offset).floor() as u32
    }

    pub fn section_rows(&self) -> u32 {
        self.section_rows
    }

    /// Total narrative height in rows
    pub fn content_rows(&self) -> u32 {
        self.section_rows * self.step_count as u32
    }

    /// Largest scroll position that keeps the trigger line on content
    pub fn max_position(&self) -> u32 {
        self.content_rows()
            .saturating_sub(self.trigger_row() + 1)
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Index of the step whose section is under the trigger line
    pub fn step_at_trigger(&self) -> Option<usize> {
        if self.step_count == 0 {
            return None;
        }
        let line = self.position + self.trigger_row();
        Some(((line / self.section_rows) as usize).min(self.step_count - 1))
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Scroll by `delta` rows and report a newly entered step
    pub fn scroll_by(&mut self, delta: i32) -> Option<StepEnter> {
        let target = i64::from(self.position) + i64::from(delta);
        self.position = target.clamp(0, i64::from(self.max_position())) as u32;
        self.sync()
    }

    /// Scroll so the trigger line sits at the top of step `index`
    pub fn scroll_to_step(&mut self, index: usize) -> Option<StepEnter> {
        let start = self.section_rows * index.min(self.step_count.saturating_sub(1)) as u32;
        self.position = start
            .saturating_sub(self.trigger_row())
            .min(self.max_position());
        self.sync()
    }

    /// Report the step under the trigger line if it differs from the active one
    pub fn sync(&mut self) -> Option<StepEnter> {
        let current = self.step_at_trigger()?;
        if self.active == Some(current) {
            return None;
        }
        let direction = match self.active {
            Some(previous) if current < previous => Direction::Up,
            _ => Direction::Down,
        };
        self.active = Some(current);
        Some(StepEnter {
            index: current,
            direction,
        })
    }

    /// How many times the tracker has been resized
    pub fn resize_count(&self) -> usize {
        self.resizes
    }
}

impl StepTracker for Scroller {
    fn resize(&mut self, viewport_rows: u16) {
        self.resizes += 1;
        self.recalculate(viewport_rows);
        debug!(
            "Step tracker resized: viewport {} rows, sections {} rows",
            viewport_rows, self.section_rows
        );
    }
}
