use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::config::Config;
use crate::router::{ContentRouter, MountOrigin, ViewRegistry, DASHBOARD};
use crate::settings::NAVIGATION;
use crate::ui::header::Header;
use crate::ui::layout::ShellAreas;
use crate::ui::sidebar::Sidebar;
use crate::ui::theme::ThemeProvider;
use crate::views::{Control, ViewContext};

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// Application state
pub struct App {
    theme: ThemeProvider,
    sidebar: Sidebar,
    header: Header,
    router: ContentRouter,
    /// Pane holding keyboard focus
    focus: Focus,
    /// Index into the mounted view's controls
    content_focus: usize,
    /// Show a hint for the focused element in the status bar
    tooltips: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: ThemeProvider) -> Self {
        let registry = ViewRegistry::standard(NAVIGATION);
        tracing::info!("Registered {} views", registry.len());
        if registry.is_empty() {
            tracing::warn!("No views registered, every page will show the placeholder");
        }

        let context = ViewContext {
            features: config.features,
            user: config.user.clone(),
        };
        let router = ContentRouter::new(registry, context);

        let mut sidebar = Sidebar::new(NAVIGATION);
        sidebar.set_active(DASHBOARD);

        Self {
            theme,
            sidebar,
            header: Header::default(),
            router,
            focus: Focus::Sidebar,
            content_focus: 0,
            tooltips: config.features.enable_tooltips,
            should_quit: false,
        }
    }

    pub fn theme(&self) -> &ThemeProvider {
        &self.theme
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn router(&self) -> &ContentRouter {
        &self.router
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn controls(&self) -> &[Control] {
        self.router.view().controls()
    }

    /// Focused control of the mounted view, if the content pane has focus
    pub fn focused_control(&self) -> Option<usize> {
        match self.focus {
            Focus::Content if self.content_focus < self.controls().len() => Some(self.content_focus),
            _ => None,
        }
    }

    /// Status bar hint for whatever holds focus
    pub fn tooltip(&self) -> Option<String> {
        if !self.tooltips {
            return None;
        }
        match self.focus {
            Focus::Sidebar => self
                .sidebar
                .selected_entry()
                .map(|entry| format!("Open {}", entry.label())),
            Focus::Content => self
                .focused_control()
                .map(|index| self.controls()[index].label.clone()),
        }
    }

    /// Apply an action emitted by the sidebar or a control
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate(name) => {
                let origin = self.router.navigate(name.clone());
                if origin == MountOrigin::Fallback {
                    tracing::debug!("No view registered for {}, showing placeholder", name);
                }
                self.header.show_view(name.as_str());
                tracing::debug!(
                    title = self.header.title(),
                    sections = ?self.router.view().sections(),
                    "Mounted view"
                );
                self.sidebar.set_active(name.as_str());
                self.sidebar.select_label(name.as_str());
                self.content_focus = 0;
                if self.controls().is_empty() {
                    self.focus = Focus::Sidebar;
                }
            }
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {
                tracing::debug!("Activated element has no action");
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar if !self.controls().is_empty() => Focus::Content,
            _ => Focus::Sidebar,
        };
    }

    fn previous(&mut self) {
        match self.focus {
            Focus::Sidebar => self.sidebar.previous(),
            Focus::Content => self.content_focus = self.content_focus.saturating_sub(1),
        }
    }

    fn next(&mut self) {
        match self.focus {
            Focus::Sidebar => self.sidebar.next(),
            Focus::Content => {
                if self.content_focus + 1 < self.controls().len() {
                    self.content_focus += 1;
                }
            }
        }
    }

    fn activate(&mut self) {
        let action = match self.focus {
            Focus::Sidebar => self.sidebar.activate(),
            Focus::Content => self
                .focused_control()
                .map(|index| self.controls()[index].action.clone())
                .unwrap_or_default(),
        };
        self.dispatch(action);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.dispatch(Action::Quit);
            return;
        }

        if self.sidebar.is_filtering() {
            match key.code {
                KeyCode::Esc => self.sidebar.clear_filter(),
                KeyCode::Enter => {
                    // Help and Exit are always listed; a filter with no matches activates nothing
                    let action = if self.sidebar.has_matches() {
                        self.sidebar.activate()
                    } else {
                        Action::None
                    };
                    self.sidebar.clear_filter();
                    self.dispatch(action);
                }
                KeyCode::Backspace => self.sidebar.pop_filter_char(),
                KeyCode::Up => self.sidebar.previous(),
                KeyCode::Down => self.sidebar.next(),
                KeyCode::Char(c) => self.sidebar.push_filter_char(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.dispatch(Action::Quit),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('/') => {
                self.focus = Focus::Sidebar;
                self.sidebar.start_filter();
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Left | KeyCode::Char('h') => self.previous(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => self.next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
    }

    /// Left click on a sidebar row activates it. `size` is the full frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, size: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let areas = ShellAreas::compute(size, &self.theme);
        if let Some(action) = self.sidebar.click(areas.sidebar, mouse.column, mouse.row) {
            self.focus = Focus::Sidebar;
            self.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::ViewName;
    use crate::views::SectionKind;

    fn app() -> App {
        App::new(&Config::default(), ThemeProvider::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code));
        }
    }

    #[test]
    fn test_starts_on_dashboard() {
        let app = app();
        assert_eq!(app.router().active(), &ViewName::dashboard());
        assert_eq!(app.header().title(), "Dashboard Overview");
        assert_eq!(app.sidebar().active(), Some("Dashboard"));
        assert_eq!(app.focus(), Focus::Sidebar);
    }

    #[test]
    fn test_settings_then_back_to_dashboard() {
        let mut app = app();
        app.dispatch(Action::navigate("Settings"));

        assert_eq!(app.router().active(), "Settings");
        assert_eq!(app.router().view().sections(), [SectionKind::ComingSoon]);
        assert_eq!(app.header().title(), "Settings");
        assert_eq!(app.header().breadcrumb(), "Home / Settings");
        assert_eq!(app.sidebar().active(), Some("Settings"));

        // the only control is the back button
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.focus(), Focus::Content);
        assert_eq!(app.tooltip().as_deref(), Some("← Back to Dashboard"));
        press(&mut app, &[KeyCode::Enter]);

        assert_eq!(app.router().active(), "Dashboard");
        assert_eq!(
            app.router().view().sections(),
            [
                SectionKind::WelcomeBanner,
                SectionKind::Stats,
                SectionKind::QuickActions,
                SectionKind::RecentActivity,
                SectionKind::SystemStatus,
            ]
        );
        assert_eq!(app.header().title(), "Dashboard Overview");
    }

    #[test]
    fn test_keyboard_navigation_through_sidebar() {
        let mut app = app();
        press(&mut app, &[KeyCode::Down, KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(app.router().active(), "Settings");
        press(&mut app, &[KeyCode::Char('k'), KeyCode::Enter]);
        assert_eq!(app.router().active(), "Analytics");
    }

    #[test]
    fn test_filter_then_enter() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('/'),
                KeyCode::Char('l'),
                KeyCode::Char('o'),
                KeyCode::Char('g'),
                KeyCode::Char('s'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.router().active(), "Logs Viewer");
        assert!(!app.sidebar().is_filtering());
    }

    #[test]
    fn test_q_in_filter_is_text() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('/'), KeyCode::Char('q')]);
        assert!(!app.should_quit());
        assert_eq!(app.sidebar().filter_text(), "q");
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.sidebar().is_filtering());
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Esc]);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_filter_without_matches_ignores_enter() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('/'),
                KeyCode::Char('z'),
                KeyCode::Char('z'),
                KeyCode::Char('z'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.router().active(), "Dashboard");
        assert_eq!(app.router().container().mount_count(), 1);
        assert!(!app.should_quit());
        assert!(!app.sidebar().is_filtering());
    }

    #[test]
    fn test_help_goes_to_placeholder() {
        let mut app = app();
        app.dispatch(Action::navigate("Help & Support"));
        assert_eq!(app.router().origin(), MountOrigin::Fallback);
        assert_eq!(app.router().view().sections(), [SectionKind::ComingSoon]);
        assert_eq!(app.header().title(), "Help & Support");
    }

    #[test]
    fn test_quick_action_is_inert() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
        assert_eq!(app.router().active(), "Dashboard");
        assert_eq!(app.router().container().mount_count(), 1);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_content_focus_clamps() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab]);
        for _ in 0..20 {
            press(&mut app, &[KeyCode::Right]);
        }
        assert_eq!(app.focused_control(), Some(7));
        assert_eq!(app.tooltip().as_deref(), Some("Refresh"));
    }

    #[test]
    fn test_tooltips_disabled() {
        let mut config = Config::default();
        config.features.enable_tooltips = false;
        let app = App::new(&config, ThemeProvider::default());
        assert_eq!(app.tooltip(), None);
    }

    #[test]
    fn test_mouse_click_on_exit() {
        let mut app = app();
        let size = Rect::new(0, 0, 120, 40);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 38,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, size);
        assert!(app.should_quit());
    }

    #[test]
    fn test_mouse_ignores_content_clicks() {
        let mut app = app();
        let size = Rect::new(0, 0, 120, 40);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 60,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, size);
        assert_eq!(app.router().container().mount_count(), 1);
    }
}
