//! Drawing functions for the TUI
//!
//! One frame is drawn from `App` state alone:
//! - sidebar and header chrome
//! - the mounted view in the content area
//! - `status` - key hints and the focus tooltip

mod status;

use ratatui::{layout::Rect, Frame};

use crate::app::{App, Focus};
use crate::ui::layout::ShellAreas;
use crate::ui::widgets::fill;
use crate::views::RenderContext;

use status::draw_status_bar;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let areas = ShellAreas::compute(f.area(), theme);

    let sidebar_focused = app.focus() == Focus::Sidebar;
    app.sidebar()
        .render(areas.sidebar, f.buffer_mut(), theme, sidebar_focused);
    app.header().render(areas.header, f.buffer_mut(), theme);
    draw_content(f, app, areas.content);
    draw_status_bar(f, app, areas.status);

    if let Some(position) = app.sidebar().cursor_position(areas.sidebar, theme) {
        f.set_cursor_position(position);
    }
}

/// Content surface with the mounted view inset by the large gap
fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    fill(area, f.buffer_mut(), theme.surface());

    let pad = theme.gap("lg");
    let inner = Rect {
        x: area.x + pad,
        y: area.y + 1,
        width: area.width.saturating_sub(pad * 2),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let ctx = RenderContext {
        theme,
        focused: app.focused_control(),
    };
    app.router().view().render(inner, f.buffer_mut(), &ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::Config;
    use crate::ui::theme::ThemeProvider;
    use crate::ui::widgets::test_support::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_dashboard_frame() {
        let app = App::new(&Config::default(), ThemeProvider::default());
        let text = render(&app);
        assert!(text.contains("DB Manager"));
        assert!(text.contains("Dashboard Overview"));
        assert!(text.contains("Welcome back, Administrator!"));
        assert!(text.contains("Quick Actions"));
    }

    #[test]
    fn test_placeholder_frame() {
        let mut app = App::new(&Config::default(), ThemeProvider::default());
        app.dispatch(Action::navigate("Backups"));
        let text = render(&app);
        assert!(text.contains("This feature is coming soon!"));
        assert!(text.contains("Home / Backups"));
        assert!(!text.contains("Welcome back"));
        assert!(!text.contains("(placeholder)"));
    }

    #[test]
    fn test_fallback_named_in_status_bar() {
        let mut app = App::new(&Config::default(), ThemeProvider::default());
        app.dispatch(Action::navigate("Help & Support"));
        let text = render(&app);
        assert!(text.contains("Help & Support (placeholder)"));
    }

    #[test]
    fn test_tiny_terminal() {
        let app = App::new(&Config::default(), ThemeProvider::default());
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).expect("test terminal");
        terminal.draw(|f| draw(f, &app)).expect("draw");
    }
}
