//! Render pipeline: one positioned circle per unit
//!
//! The pipeline owns the primitive list and routes pointer events to an
//! injected [`PointerHandler`]. Rendering always starts from an empty list,
//! so repeated renders (one per settled resize) never accumulate primitives.

use std::time::Duration;

use isotype_core::{compute_layout, Color, GridGeometry, Unit, NEUTRAL};
use serde::Serialize;
use tracing::debug;

use crate::highlight::{Highlight, HighlightMachine};

/// Opacity every primitive is created with
pub const INITIAL_OPACITY: f64 = 0.9;

/// Fill every primitive is created with, before the highlight is applied
pub const INITIAL_FILL: Color = NEUTRAL;

/// Receives pointer events for rendered units
#[cfg_attr(test, mockall::automock)]
pub trait PointerHandler {
    /// Pointer moved over the primitive for `unit`, at canvas point `(x, y)`
    fn on_hover(&mut self, x: f64, y: f64, unit: &Unit);

    /// Pointer left the primitive it was over
    fn on_leave(&mut self);
}

/// A rendered unit circle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    pub unit: Unit,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Color,
    pub opacity: f64,
}

impl Primitive {
    /// Whether the canvas point lies inside the circle
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// The current visual scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub geometry: GridGeometry,
    pub primitives: Vec<Primitive>,
    /// Fill transition requested by the last highlight
    #[serde(skip)]
    pub transition: Option<Duration>,
}

impl Scene {
    fn empty() -> Self {
        Self {
            geometry: compute_layout(0.0, 0),
            primitives: Vec::new(),
            transition: None,
        }
    }
}

/// Builds the scene and dispatches pointer events over it
#[derive(Debug)]
pub struct RenderPipeline<H> {
    scene: Scene,
    handler: H,
    hovered: Option<usize>,
    render_count: usize,
}

impl<H: PointerHandler> RenderPipeline<H> {
    pub fn new(handler: H) -> Self {
        Self {
            scene: Scene::empty(),
            handler,
            hovered: None,
            render_count: 0,
        }
    }

    /// Rebuild every primitive, then reapply the persisted highlight step
    pub fn render(&mut self, units: &[Unit], geometry: GridGeometry, highlight: &mut HighlightMachine) {
        self.scene.primitives.clear();
        self.hovered = None;
        self.scene.geometry = geometry;

        self.scene
            .primitives
            .extend(units.iter().enumerate().map(|(i, unit)| {
                let (cx, cy) = geometry.cell_center(i);
                Primitive {
                    unit: unit.clone(),
                    cx,
                    cy,
                    r: geometry.radius,
                    fill: INITIAL_FILL,
                    opacity: INITIAL_OPACITY,
                }
            }));

        self.render_count += 1;
        debug!(
            "Rendered {} primitives in a {}x{} grid (render #{})",
            self.scene.primitives.len(),
            geometry.num_cols,
            geometry.num_rows,
            self.render_count
        );

        let restored = highlight.reapply(units);
        self.apply(&restored);
    }

    /// Set primitive fills from a highlight
    pub fn apply(&mut self, highlight: &Highlight) {
        for (primitive, color) in self.scene.primitives.iter_mut().zip(&highlight.colors) {
            primitive.fill = *color;
        }
        self.scene.transition = highlight.transition;
    }

    /// Pointer moved to canvas point `(x, y)`
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let hit = self
            .scene
            .geometry
            .cell_at(x, y, self.scene.primitives.len())
            .filter(|&i| self.scene.primitives[i].contains(x, y));

        if self.hovered.is_some() && self.hovered != hit {
            self.hovered = None;
            self.handler.on_leave();
        }

        if let Some(i) = hit {
            self.hovered = Some(i);
            self.handler.on_hover(x, y, &self.scene.primitives[i].unit);
        }
    }

    /// Pointer left the canvas entirely
    pub fn pointer_leave(&mut self) {
        if self.hovered.take().is_some() {
            self.handler.on_leave();
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.scene.geometry
    }

    /// Number of live primitives
    pub fn len(&self) -> usize {
        self.scene.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.primitives.is_empty()
    }

    /// Sequence index of the primitive under the pointer
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Total renders since construction
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}
