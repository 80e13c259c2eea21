//! Statistics card: icon, value, title and subtitle on a tag-colored panel

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};

use super::{fill, truncate};
use crate::settings::StatRecord;
use crate::ui::theme::ThemeProvider;

pub struct StatCard<'a> {
    record: &'a StatRecord,
    theme: &'a ThemeProvider,
}

impl<'a> StatCard<'a> {
    pub fn new(record: &'a StatRecord, theme: &'a ThemeProvider) -> Self {
        Self { record, theme }
    }

    /// Rows needed to show every line plus vertical padding
    pub fn height(theme: &ThemeProvider) -> u16 {
        4 + 2 * theme.size("card_padding")
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = self.theme.resolve_inverse(self.record.style);
        fill(area, buf, base);

        let padding = self.theme.size("card_padding");
        let x = area.x + padding;
        let width = area.width.saturating_sub(padding * 2) as usize;
        if width == 0 {
            return;
        }

        let value_style = base.patch(self.theme.font("stat_value").style());
        let title_style = base.patch(self.theme.font("heading_small").style());
        let lines = [
            (self.theme.icon(self.record.icon), base),
            (self.record.value, value_style),
            (self.record.title, title_style),
            (self.record.subtitle, base.add_modifier(Modifier::ITALIC)),
        ];

        let max_y = area.bottom();
        for (offset, (text, style)) in lines.into_iter().enumerate() {
            let y = area.y + padding + offset as u16;
            if y >= max_y {
                break;
            }
            buf.set_string(x, y, truncate(text, width), style);
        }
    }
}
