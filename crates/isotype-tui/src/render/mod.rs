//! Main render/view function (View in TEA pattern)


use super::{layout, widgets};
use isotype_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{palette, styles};

const SUBTITLE: &str = "D.C. Medicaid enrollment";

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(widgets::MainHeader::new(SUBTITLE), areas.header);

    // Chart pane
    let scene = state.pipeline.scene();
    let title = format!(
        " {} units · {}×{} ",
        scene.primitives.len(),
        scene.geometry.num_cols,
        scene.geometry.num_rows
    );
    frame.render_widget(
        styles::glass_block(state.pipeline.hovered().is_some()).title(title),
        areas.chart,
    );
    let chart_inner = areas.chart_inner();
    frame.render_widget(
        widgets::UnitGrid::new(scene).hovered(state.pipeline.hovered()),
        chart_inner,
    );

    // Narrative pane
    frame.render_widget(styles::glass_block(true).title(" story "), areas.narrative);
    frame.render_widget(
        widgets::NarrativePane::new(&state.narrative, &state.scroller),
        areas.narrative_inner(),
    );

    frame.render_widget(
        widgets::AnnotationBar::new(state.annotation(), state.highlight.current()),
        areas.annotation,
    );

    // Tooltip floats above everything
    if let Some(panel) = state.pipeline.handler().panel() {
        let mapping = widgets::GridMapping::new(chart_inner, scene.geometry);
        frame.render_widget(widgets::TooltipOverlay::new(panel, mapping), area);
    }
}
