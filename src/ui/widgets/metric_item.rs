//! System metric: label/value row over a progress gauge

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Gauge, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::truncate;
use crate::settings::MetricRecord;
use crate::ui::theme::ThemeProvider;

pub struct MetricItem<'a> {
    record: &'a MetricRecord,
    theme: &'a ThemeProvider,
}

impl<'a> MetricItem<'a> {
    pub fn new(record: &'a MetricRecord, theme: &'a ThemeProvider) -> Self {
        Self { record, theme }
    }

    pub const HEIGHT: u16 = 2;

    /// Gauge fill, clamped to 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        f64::from(self.record.percent.min(100)) / 100.0
    }
}

impl Widget for MetricItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let body = self.theme.font("body").style().fg(self.theme.color("text_dark"));
        let value_style = self.theme.resolve_style(self.record.style);
        let value_width = self.record.value.width() as u16;
        let label_width = area.width.saturating_sub(value_width + 1) as usize;

        buf.set_string(area.x, area.y, truncate(self.record.label, label_width), body);
        if value_width <= area.width {
            buf.set_string(area.right() - value_width, area.y, self.record.value, value_style);
        }

        if area.height > 1 {
            let bar = Rect::new(area.x, area.y + 1, area.width, 1);
            Gauge::default()
                .gauge_style(value_style.bg(self.theme.color("border_light")))
                .ratio(self.ratio())
                .label(Span::raw(""))
                .render(bar, buf);
        }
    }
}
