//! Headless scene export
//!
//! Renders the chart for a fixed width and step without a terminal and
//! serializes it as an SVG document or a JSON scene description.

use isotype_core::prelude::*;
use isotype_core::{
    compute_layout, count_by_group, count_by_risk, dc_medicaid, generate, RiskCatalog, RiskKey,
    Unit,
};
use serde::Serialize;
use std::path::Path;

use crate::config::Settings;
use crate::highlight::HighlightMachine;
use crate::scene::{RenderPipeline, Scene};
use crate::tooltip::TooltipController;

/// The single accessible label carried by the chart
pub const ARIA_LABEL: &str = "Unit chart grid";

/// A rendered scene together with the step and annotation that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedScene {
    pub step: String,
    pub annotation: String,
    /// Requested fill transition in milliseconds
    pub transition_ms: Option<u64>,
    #[serde(flatten)]
    pub scene: Scene,
}

/// Render the D.C. Medicaid chart at `width` with `step` applied
pub fn render_scene(settings: &Settings, width: f64, step: &str) -> ExportedScene {
    let units = generate(&dc_medicaid(), settings.chart.unit_size);
    render_units(settings, &units, width, step)
}

/// Render an arbitrary unit sequence at `width` with `step` applied
pub fn render_units(settings: &Settings, units: &[Unit], width: f64, step: &str) -> ExportedScene {
    let catalog = RiskCatalog::default();
    let mut highlight =
        HighlightMachine::new(catalog.clone()).with_transition(settings.chart.transition());
    highlight.set_current(step);

    let mut pipeline = RenderPipeline::new(TooltipController::new(catalog));
    pipeline.render(units, compute_layout(width, units.len()), &mut highlight);

    let scene = pipeline.scene().clone();
    info!(
        "Exported step {:?}: {} primitives, view box {}x{}",
        step,
        scene.primitives.len(),
        scene.geometry.view_box.width,
        scene.geometry.view_box.height
    );

    ExportedScene {
        step: step.to_string(),
        annotation: highlight.annotation().to_string(),
        transition_ms: scene
            .transition
            .map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
        scene,
    }
}

/// Serialize as a standalone SVG document that scales to its container
pub fn to_svg(export: &ExportedScene) -> String {
    let view_box = export.scene.geometry.view_box;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" \
         preserveAspectRatio=\"xMidYMid meet\" style=\"width:100%;height:auto\" \
         role=\"img\" aria-label=\"{}\">\n",
        view_box.width, view_box.height, ARIA_LABEL
    );

    if let Some(ms) = export.transition_ms {
        svg.push_str(&format!(
            "  <style>circle.unit {{ transition: fill {ms}ms; }}</style>\n"
        ));
    }
    svg.push_str(&format!("  <desc>{}</desc>\n", escape_xml(&export.annotation)));

    for p in &export.scene.primitives {
        svg.push_str(&format!(
            "  <circle class=\"unit\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"/>\n",
            p.cx, p.cy, p.r, p.fill, p.opacity
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Serialize as pretty-printed JSON
pub fn to_json(export: &ExportedScene) -> Result<String> {
    Ok(serde_json::to_string_pretty(export)?)
}

/// Write serialized output to `path`
pub fn write_export(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Unit counts per risk key and per group, one line each
pub fn summary(units: &[Unit], catalog: &RiskCatalog) -> String {
    let by_risk = count_by_risk(units);
    let mut out = String::from("Units by risk:\n");
    for key in RiskKey::ALL {
        let count = by_risk.get(&key).copied().unwrap_or(0);
        out.push_str(&format!(
            "  {:<18} {:>4}  {}\n",
            key.as_str(),
            count,
            catalog.description(key)
        ));
    }

    out.push_str("Units by group:\n");
    for (group, count) in count_by_group(units) {
        out.push_str(&format!("  {count:>4}  {group}\n"));
    }

    out.push_str(&format!("Total: {} units\n", units.len()));
    out
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::INTRO_STEP;

    fn tiny_units() -> Vec<Unit> {
        [RiskKey::Healthydc, RiskKey::LocalCut, RiskKey::FederalLow]
            .into_iter()
            .enumerate()
            .map(|(index, risk)| Unit {
                index,
                group: format!("group {index}"),
                risk,
            })
            .collect()
    }

    #[test]
    fn test_svg_tiny_scene() {
        let export = render_units(&Settings::default(), &tiny_units(), 300.0, "all");

        insta::assert_snapshot!(to_svg(&export), @r##"
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 176 30" preserveAspectRatio="xMidYMid meet" style="width:100%;height:auto" role="img" aria-label="Unit chart grid">
          <desc>All groups</desc>
          <circle class="unit" cx="13" cy="13" r="3.2" fill="#ffc107" opacity="0.9"/>
          <circle class="unit" cx="23" cy="13" r="3.2" fill="#ff0000" opacity="0.9"/>
          <circle class="unit" cx="33" cy="13" r="3.2" fill="#008000" opacity="0.9"/>
        </svg>
        "##);
    }

    #[test]
    fn test_svg_intro_carries_transition() {
        let export = render_units(&Settings::default(), &tiny_units(), 300.0, INTRO_STEP);
        let svg = to_svg(&export);

        assert!(svg.contains("transition: fill 600ms"));
        assert_eq!(svg.matches("fill=\"#cccccc\"").count(), 3);
    }

    #[test]
    fn test_svg_escapes_annotation() {
        let export = render_units(&Settings::default(), &tiny_units(), 300.0, "a<b&c");
        assert!(to_svg(&export).contains("<desc>a&lt;b&amp;c</desc>"));
    }

    #[test]
    fn test_render_scene_full_dataset() {
        let export = render_scene(&Settings::default(), 1000.0, "federal_combined");

        assert_eq!(export.scene.primitives.len(), 544);
        assert_eq!(export.scene.geometry.num_cols, 45);
        assert_eq!(export.annotation, "Subject to federal work requirements: 98,656");
        assert_eq!(export.transition_ms, None);
    }

    #[test]
    fn test_json_export_shape() {
        let export = render_units(&Settings::default(), &tiny_units(), 500.0, "local_cut");
        let value: serde_json::Value = serde_json::from_str(&to_json(&export).unwrap()).unwrap();

        assert_eq!(value["step"], "local_cut");
        assert_eq!(value["annotation"], "Removed from subsidized coverage: 3,000");
        assert_eq!(value["geometry"]["num_cols"], 20);
        assert_eq!(value["primitives"].as_array().unwrap().len(), 3);
        assert_eq!(value["primitives"][1]["fill"], "#ff0000");
        assert_eq!(value["primitives"][0]["fill"], "#cccccc");
        assert_eq!(value["primitives"][1]["unit"]["risk"], "local_cut");
    }

    #[test]
    fn test_write_export_reports_io_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("scene.json");
        write_export(&path, "{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        let err = write_export(&temp.path().join("no/such/dir.svg"), "").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_summary_counts() {
        let units = generate(&dc_medicaid(), isotype_core::UNIT_SIZE);
        let text = summary(&units, &RiskCatalog::default());

        assert!(text.contains("  federal_low         291  Statutorily exempted from Medicaid cuts: 145,593"));
        assert!(text.contains("   197  Childless adults, parent & caretaker (<138% FPL)"));
        assert!(text.ends_with("Total: 544 units\n"));
    }
}
