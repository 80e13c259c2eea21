//! Page header: title, breadcrumb and the static action chips

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::router::DASHBOARD;
use crate::ui::theme::{StyleTag, ThemeProvider};
use crate::ui::widgets::{fill, truncate};

pub const DASHBOARD_TITLE: &str = "Dashboard Overview";
pub const DASHBOARD_BREADCRUMB: &str = "Home / Dashboard";

/// Chips shown on the right: (icon, label, style)
const CHIPS: &[(&str, &str, StyleTag)] = &[
    ("search", "Search", StyleTag::Info),
    ("alert", "Alerts (3)", StyleTag::Warning),
    ("profile", "Profile", StyleTag::Primary),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    title: String,
    breadcrumb: String,
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DASHBOARD_TITLE, DASHBOARD_BREADCRUMB)
    }
}

impl Header {
    pub fn new(title: impl Into<String>, breadcrumb: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            breadcrumb: breadcrumb.into(),
        }
    }

    /// Header text for a view name
    pub fn for_view(name: &str) -> Self {
        if name == DASHBOARD {
            Self::default()
        } else {
            Self::new(name, format!("Home / {name}"))
        }
    }

    /// Replace the title, and the breadcrumb when one is given. The next
    /// frame draws the new text.
    pub fn update_title(&mut self, title: &str, breadcrumb: Option<&str>) {
        self.title = title.to_string();
        if let Some(breadcrumb) = breadcrumb {
            self.breadcrumb = breadcrumb.to_string();
        }
    }

    /// Point the header at the view now mounted
    pub fn show_view(&mut self, name: &str) {
        let Header { title, breadcrumb } = Self::for_view(name);
        self.update_title(&title, Some(&breadcrumb));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeProvider) {
        let base = Style::default()
            .fg(theme.color("text_light"))
            .bg(theme.color("bg_header"));
        fill(area, buf, base);
        if area.height < 2 || area.width < 4 {
            return;
        }

        let pad = theme.gap("lg");
        let x = area.x + pad;

        // Chips are right-aligned and dropped from the left when space runs out
        let chips: Vec<(String, StyleTag)> = CHIPS
            .iter()
            .map(|(icon, label, style)| (format!(" {} ", theme.with_icon(icon, label)), *style))
            .collect();
        let mut right = area.right().saturating_sub(pad);
        let title_y = area.y + area.height / 2 - 1;
        for (chip, style) in chips.iter().rev() {
            let width = chip.width() as u16;
            if right < x + width + 20 {
                break;
            }
            right -= width;
            buf.set_string(right, title_y, chip, theme.resolve_inverse(*style));
            right = right.saturating_sub(1);
        }

        let width = right.saturating_sub(x) as usize;
        buf.set_string(
            x,
            title_y,
            truncate(&self.title, width),
            base.patch(theme.font("heading_large").style()),
        );
        buf.set_string(
            x,
            title_y + 1,
            truncate(&self.breadcrumb, width),
            base.fg(theme.color("text_sidebar")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::buffer_text;

    #[test]
    fn test_titles_per_view() {
        assert_eq!(Header::for_view("Dashboard").title(), "Dashboard Overview");
        let settings = Header::for_view("Settings");
        assert_eq!(settings.title(), "Settings");
        assert_eq!(settings.breadcrumb(), "Home / Settings");
    }

    #[test]
    fn test_update_reaches_next_frame() {
        let theme = ThemeProvider::default();
        let area = Rect::new(0, 0, 90, 4);
        let mut header = Header::default();

        let mut before = Buffer::empty(area);
        header.render(area, &mut before, &theme);
        assert!(buffer_text(&before).contains("Dashboard Overview"));

        header.update_title("Backups", Some("Home / Backups"));
        let mut after = Buffer::empty(area);
        header.render(area, &mut after, &theme);
        let text = buffer_text(&after);
        assert!(text.contains("Backups"));
        assert!(text.contains("Home / Backups"));
        assert!(!text.contains("Dashboard Overview"));
    }

    #[test]
    fn test_update_without_breadcrumb_keeps_it() {
        let mut header = Header::default();
        header.update_title("Reports", None);
        assert_eq!(header.title(), "Reports");
        assert_eq!(header.breadcrumb(), DASHBOARD_BREADCRUMB);
    }

    #[test]
    fn test_chips_drawn_when_wide() {
        let theme = ThemeProvider::default();
        let area = Rect::new(0, 0, 90, 4);
        let mut buf = Buffer::empty(area);
        Header::default().render(area, &mut buf, &theme);
        let text = buffer_text(&buf);
        assert!(text.contains("Alerts (3)"));
        assert!(text.contains("Profile"));
    }

    #[test]
    fn test_narrow_header_drops_chips() {
        let theme = ThemeProvider::default();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);
        Header::default().render(area, &mut buf, &theme);
        let text = buffer_text(&buf);
        assert!(!text.contains("Profile"));
        assert!(text.contains("Dashboard"));
    }
}
