use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::router::MountOrigin;

/// Draw the status bar: key hints on the left, focus hint and view on the right
pub(super) fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let style = Style::default()
        .fg(theme.color("text_muted"))
        .bg(theme.color("bg_white"));

    let hints = if app.sidebar().is_filtering() {
        format!(
            " /{}: {} matches | ESC: clear | Enter: open | Ctrl+C: quit",
            app.sidebar().filter_text(),
            app.sidebar().entries().len() - 2
        )
    } else {
        " ↑↓: move | Tab: focus | Enter: open | /: filter | q: quit".to_string()
    };
    f.render_widget(Paragraph::new(hints).style(style), area);

    let router = app.router();
    let breadcrumb = app.header().breadcrumb();
    let mut right = match router.origin() {
        MountOrigin::Registered => breadcrumb.to_string(),
        MountOrigin::Fallback => format!("{} (placeholder)", router.active()),
    };
    if let Some(tooltip) = app.tooltip() {
        right = format!("{tooltip} | {right}");
    }
    let right = format!("{right} ");
    let width = right.width() as u16;
    if width < area.width / 2 {
        let x = area.right() - width;
        f.buffer_mut().set_string(x, area.y, &right, style);
    }
}
