//! Content views
//!
//! A view is the unit the content router mounts. It owns everything it
//! draws, including its controls, so dropping the view releases all of it.

mod coming_soon;
mod dashboard;

pub use coming_soon::ComingSoonView;
pub use dashboard::DashboardView;

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use unicode_width::UnicodeWidthStr;

use crate::action::Action;
use crate::config::{FeatureFlags, UserConfig};
use crate::ui::theme::{StyleTag, ThemeProvider};
use crate::ui::widgets::truncate;

/// Structural parts a view is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    WelcomeBanner,
    Stats,
    QuickActions,
    RecentActivity,
    SystemStatus,
    ComingSoon,
}

/// Inputs available to view builders
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    pub features: FeatureFlags,
    pub user: UserConfig,
}

/// Per-frame rendering inputs
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a ThemeProvider,
    /// Index into `View::controls` holding keyboard focus
    pub focused: Option<usize>,
}

/// A focusable button owned by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub icon: Option<&'static str>,
    pub style: StyleTag,
    pub action: Action,
}

impl Control {
    pub fn new(label: impl Into<String>, style: StyleTag, action: Action) -> Self {
        Self {
            label: label.into(),
            icon: None,
            style,
            action,
        }
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Label as displayed, with its icon when the theme shows icons
    pub fn text(&self, theme: &ThemeProvider) -> String {
        match self.icon {
            Some(icon) => theme.with_icon(icon, &self.label),
            None => self.label.clone(),
        }
    }

    /// Draw as a button at (x, y), at most `max_width` cells wide.
    /// Returns the width used.
    pub fn render(
        &self,
        x: u16,
        y: u16,
        max_width: u16,
        buf: &mut Buffer,
        theme: &ThemeProvider,
        focused: bool,
    ) -> u16 {
        if max_width < 3 {
            return 0;
        }
        let text = format!(" {} ", truncate(&self.text(theme), max_width as usize - 2));
        let style = if focused {
            theme
                .resolve_inverse(self.style)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.resolve_style(self.style).add_modifier(Modifier::BOLD)
        };
        buf.set_string(x, y, &text, style);
        text.width() as u16
    }
}

pub trait View {
    /// Name the view was mounted under
    fn name(&self) -> &str;

    /// Sections that were actually constructed, in display order
    fn sections(&self) -> Vec<SectionKind>;

    /// Focusable controls, in focus order
    fn controls(&self) -> &[Control];

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &RenderContext<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::row_text;

    #[test]
    fn test_control_render_width() {
        let theme = ThemeProvider::default();
        let control = Control::new("Refresh", StyleTag::Info, Action::None);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let used = control.render(0, 0, 20, &mut buf, &theme, false);
        assert_eq!(used, 9);
        assert_eq!(row_text(&buf, 0), " Refresh");
    }

    #[test]
    fn test_focused_control_is_filled() {
        let theme = ThemeProvider::default();
        let control = Control::new("Go", StyleTag::Primary, Action::None);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        control.render(0, 0, 10, &mut buf, &theme, true);
        assert_eq!(buf.cell((1, 0)).map(|c| c.bg), Some(theme.color("primary")));
    }
}
