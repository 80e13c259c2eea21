//! Activity log entry: status dot, text and timestamp

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::truncate;
use crate::settings::ActivityRecord;
use crate::ui::theme::ThemeProvider;

pub struct ActivityItem<'a> {
    record: &'a ActivityRecord,
    theme: &'a ThemeProvider,
}

impl<'a> ActivityItem<'a> {
    pub fn new(record: &'a ActivityRecord, theme: &'a ThemeProvider) -> Self {
        Self { record, theme }
    }

    pub const HEIGHT: u16 = 2;
}

impl Widget for ActivityItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        buf.set_string(
            area.x,
            area.y,
            "●",
            self.theme.resolve_style(self.record.status),
        );

        let text_x = area.x + 2;
        let width = (area.width - 2) as usize;
        let body = self.theme.font("body").style().fg(self.theme.color("text_dark"));
        buf.set_string(text_x, area.y, truncate(self.record.text, width), body);

        if area.height > 1 {
            buf.set_string(
                text_x,
                area.y + 1,
                truncate(self.record.time, width),
                self.theme.muted(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RECENT_ACTIVITIES;
    use crate::ui::widgets::test_support::row_text;

    #[test]
    fn test_item_lines() {
        let theme = ThemeProvider::default();
        let area = Rect::new(0, 0, 40, ActivityItem::HEIGHT);
        let mut buf = Buffer::empty(area);
        ActivityItem::new(&RECENT_ACTIVITIES[2], &theme).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "● Service 'Redis' restarted");
        assert_eq!(row_text(&buf, 1), "  1 hour ago");
        assert_eq!(buf.cell((0, 0)).and_then(|c| c.style().fg), Some(theme.color("warning")));
    }

    #[test]
    fn test_single_row_skips_time() {
        let theme = ThemeProvider::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        ActivityItem::new(&RECENT_ACTIVITIES[0], &theme).render(area, &mut buf);
        assert_eq!(row_text(&buf, 0), "● Database backup completed");
    }
}
