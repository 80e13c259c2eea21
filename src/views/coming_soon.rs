//! Fallback view for features that have no real content yet

use ratatui::{buffer::Buffer, layout::Rect};
use unicode_width::UnicodeWidthStr;

use super::{Control, RenderContext, SectionKind, View};
use crate::action::Action;
use crate::router::{ViewName, DASHBOARD};
use crate::ui::layout::centered;
use crate::ui::theme::StyleTag;
use crate::ui::widgets::truncate;

pub const COMING_SOON: &str = "This feature is coming soon!";
pub const DESCRIPTION: [&str; 2] = [
    "We're working hard to bring you this functionality.",
    "Stay tuned for updates!",
];
pub const BACK_LABEL: &str = "← Back to Dashboard";

/// Rows: icon, gap, title, gap, message, two description lines, gap, button
const HEIGHT: u16 = 9;

pub struct ComingSoonView {
    name: ViewName,
    controls: [Control; 1],
}

impl ComingSoonView {
    pub fn new(name: &ViewName) -> Self {
        Self {
            name: name.clone(),
            controls: [Control::new(BACK_LABEL, StyleTag::Primary, Action::navigate(DASHBOARD))],
        }
    }

    pub fn boxed(name: &ViewName) -> Box<dyn View> {
        Box::new(Self::new(name))
    }
}

impl View for ComingSoonView {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn sections(&self) -> Vec<SectionKind> {
        vec![SectionKind::ComingSoon]
    }

    fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;
        let widest = DESCRIPTION
            .iter()
            .map(|line| line.width())
            .chain([self.name.as_str().width(), COMING_SOON.width()])
            .max()
            .unwrap_or(0) as u16;
        let frame = centered(area, widest + 4, HEIGHT);
        if frame.width == 0 || frame.height == 0 {
            return;
        }

        let body = theme.font("body").style().fg(theme.color("text_dark"));
        let lines = [
            (0, theme.icon("construction"), body),
            (
                2,
                self.name.as_str(),
                theme
                    .font("heading_large")
                    .style()
                    .fg(theme.color("text_dark")),
            ),
            (4, COMING_SOON, theme.muted()),
            (5, DESCRIPTION[0], body),
            (6, DESCRIPTION[1], body),
        ];
        for (row, text, style) in lines {
            if row >= frame.height {
                break;
            }
            let text = truncate(text, frame.width as usize);
            let x = frame.x + frame.width.saturating_sub(text.width() as u16) / 2;
            buf.set_string(x, frame.y + row, &text, style);
        }

        if HEIGHT <= frame.height {
            let back = &self.controls[0];
            let width = (back.text(theme).width() as u16 + 2).min(frame.width);
            let x = frame.x + (frame.width - width) / 2;
            back.render(
                x,
                frame.y + HEIGHT - 1,
                width,
                buf,
                theme,
                ctx.focused == Some(0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeProvider;
    use crate::ui::widgets::test_support::buffer_text;

    #[test]
    fn test_single_back_control() {
        let view = ComingSoonView::new(&ViewName::new("Settings"));
        assert_eq!(view.name(), "Settings");
        assert_eq!(view.sections(), vec![SectionKind::ComingSoon]);
        assert_eq!(view.controls().len(), 1);
        assert_eq!(view.controls()[0].action, Action::navigate("Dashboard"));
    }

    #[test]
    fn test_render_shows_name_and_message() {
        let theme = ThemeProvider::default();
        let view = ComingSoonView::new(&ViewName::new("Backups"));
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &RenderContext { theme: &theme, focused: Some(0) });

        let text = buffer_text(&buf);
        assert!(text.contains("Backups"));
        assert!(text.contains(COMING_SOON));
        assert!(text.contains("Stay tuned for updates!"));
        assert!(text.contains(BACK_LABEL));
    }

    #[test]
    fn test_render_is_deterministic() {
        let theme = ThemeProvider::default();
        let view = ComingSoonView::new(&ViewName::new("Alerts"));
        let area = Rect::new(0, 0, 60, 12);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);
        let ctx = RenderContext { theme: &theme, focused: None };
        view.render(area, &mut first, &ctx);
        view.render(area, &mut second, &ctx);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let theme = ThemeProvider::default();
        let view = ComingSoonView::new(&ViewName::new("Alerts"));
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &RenderContext { theme: &theme, focused: None });
    }

    #[test]
    fn test_wide_glyph_name_in_narrow_area() {
        let theme = ThemeProvider::default();
        let view = ComingSoonView::new(&ViewName::new("⚙\u{fe0f}".repeat(30)));
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &RenderContext { theme: &theme, focused: None });
        assert!(buffer_text(&buf).contains('…'));
    }
}
