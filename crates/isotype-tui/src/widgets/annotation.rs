//! Annotation bar showing the text produced by the current step

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct AnnotationBar<'a> {
    annotation: &'a str,
    step: &'a str,
}

impl<'a> AnnotationBar<'a> {
    pub fn new(annotation: &'a str, step: &'a str) -> Self {
        Self { annotation, step }
    }
}

impl Widget for AnnotationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, styles::annotation());
        buf.set_span(
            area.x + 1,
            area.y,
            &Span::styled(self.annotation, styles::annotation()),
            area.width.saturating_sub(1),
        );

        let step_width = self.step.width() as u16 + 1;
        let annotation_end = self.annotation.width() as u16 + 2;
        if annotation_end + step_width < area.width {
            buf.set_string(
                area.right() - step_width,
                area.y,
                self.step,
                styles::text_muted(),
            );
        }
    }
}
