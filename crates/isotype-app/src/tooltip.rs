//! Floating tooltip panel that tracks the pointer
//!
//! The panel is created on first use and then only repositioned and faded;
//! hiding never destroys it.

use isotype_core::{RiskCatalog, Unit};

use crate::scene::PointerHandler;

/// Pixel offset of the panel from the pointer
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// The single tooltip panel
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPanel {
    pub html: String,
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
}

impl TooltipPanel {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Owns the lazily created tooltip panel
#[derive(Debug, Clone, Default)]
pub struct TooltipController {
    panel: Option<TooltipPanel>,
    created: usize,
    catalog: RiskCatalog,
}

impl TooltipController {
    pub fn new(catalog: RiskCatalog) -> Self {
        Self {
            panel: None,
            created: 0,
            catalog,
        }
    }

    /// Show `html` next to `(x, y)`, creating the panel on first use
    pub fn show(&mut self, x: f64, y: f64, html: &str) {
        let created = &mut self.created;
        let panel = self.panel.get_or_insert_with(|| {
            *created += 1;
            tracing::trace!("Creating tooltip panel");
            TooltipPanel {
                html: String::new(),
                left: 0.0,
                top: 0.0,
                opacity: 0.0,
            }
        });
        panel.html.clear();
        panel.html.push_str(html);
        panel.left = x + TOOLTIP_OFFSET;
        panel.top = y + TOOLTIP_OFFSET;
        panel.opacity = 1.0;
    }

    /// Fade the panel out, keeping it for reuse
    pub fn hide(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            panel.opacity = 0.0;
        }
    }

    pub fn panel(&self) -> Option<&TooltipPanel> {
        self.panel.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.panel.as_ref().is_some_and(TooltipPanel::is_visible)
    }

    /// How many panels have ever been created (never more than one)
    pub fn created_count(&self) -> usize {
        self.created
    }
}

impl PointerHandler for TooltipController {
    fn on_hover(&mut self, x: f64, y: f64, unit: &Unit) {
        let html = unit_tooltip_html(unit, &self.catalog);
        self.show(x, y, &html);
    }

    fn on_leave(&mut self) {
        self.hide();
    }
}

/// Tooltip markup for a unit: group name verbatim plus its risk description
pub fn unit_tooltip_html(unit: &Unit, catalog: &RiskCatalog) -> String {
    format!(
        "<strong>{}</strong><br/>Risk: {}",
        unit.group,
        catalog.description(unit.risk)
    )
}

/// Render tooltip markup as plain lines for text-only hosts
///
/// Only the tags the tooltip emits are interpreted; group names such as
/// `(<138% FPL)` pass through untouched.
pub fn plain_text(html: &str) -> Vec<String> {
    html.replace("<strong>", "")
        .replace("</strong>", "")
        .split("<br/>")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use isotype_core::RiskKey;

    fn uninsured_unit() -> Unit {
        Unit {
            index: 200,
            group: "Childless adults, parent & caretaker (<138% FPL)".to_string(),
            risk: RiskKey::FederalUninsured,
        }
    }

    #[test]
    fn test_show_creates_panel_once() {
        let mut tooltip = TooltipController::default();
        assert!(tooltip.panel().is_none());

        tooltip.show(100.0, 50.0, "first");
        tooltip.show(120.0, 60.0, "second");

        assert_eq!(tooltip.created_count(), 1);
        let panel = tooltip.panel().unwrap();
        assert_eq!(panel.html, "second");
        assert_eq!((panel.left, panel.top), (130.0, 70.0));
        assert_eq!(panel.opacity, 1.0);
    }

    #[test]
    fn test_hide_keeps_panel() {
        let mut tooltip = TooltipController::default();
        tooltip.show(0.0, 0.0, "x");
        tooltip.hide();

        assert!(!tooltip.is_visible());
        assert!(tooltip.panel().is_some());

        tooltip.show(5.0, 5.0, "y");
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.created_count(), 1);
    }

    #[test]
    fn test_hide_before_show_is_noop() {
        let mut tooltip = TooltipController::default();
        tooltip.hide();
        assert!(tooltip.panel().is_none());
        assert_eq!(tooltip.created_count(), 0);
    }

    #[test]
    fn test_unit_tooltip_html() {
        let html = unit_tooltip_html(&uninsured_unit(), &RiskCatalog::default());
        assert_eq!(
            html,
            "<strong>Childless adults, parent & caretaker (<138% FPL)</strong><br/>Risk: Maybe uninsured in the next decade: 32,000"
        );
    }

    #[test]
    fn test_pointer_handler_drives_panel() {
        let mut tooltip = TooltipController::default();
        tooltip.on_hover(40.0, 20.0, &uninsured_unit());
        assert!(tooltip.is_visible());
        assert!(tooltip.panel().unwrap().html.contains("<138% FPL"));

        tooltip.on_leave();
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_plain_text_keeps_angle_brackets_in_names() {
        let html = unit_tooltip_html(&uninsured_unit(), &RiskCatalog::default());
        assert_eq!(
            plain_text(&html),
            vec![
                "Childless adults, parent & caretaker (<138% FPL)".to_string(),
                "Risk: Maybe uninsured in the next decade: 32,000".to_string(),
            ]
        );
    }
}
