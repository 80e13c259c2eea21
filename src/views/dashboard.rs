//! Dashboard view: welcome banner, statistics, quick actions, recent
//! activity and system status. Each section exists only when its feature
//! flag is on.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::{Control, RenderContext, SectionKind, View, ViewContext};
use crate::action::Action;
use crate::router::DASHBOARD;
use crate::settings::{
    ActivityRecord, MetricRecord, StatRecord, DASHBOARD_STATS, QUICK_ACTIONS, RECENT_ACTIVITIES,
    SYSTEM_METRICS,
};
use crate::ui::layout::ButtonGrid;
use crate::ui::theme::{StyleTag, ThemeProvider};
use crate::ui::widgets::{fill, truncate, ActivityItem, MetricItem, StatCard};

const QUICK_ACTION_COLUMNS: u16 = 3;
const WELCOME_SUBTITLE: &str = "Everything is running smoothly. Here's your system overview.";

struct WelcomeBanner {
    greeting: String,
    /// Avatar and role, right-aligned on the greeting line
    badge: String,
}

struct StatsRow {
    cards: &'static [StatRecord],
}

struct QuickActions {
    /// Indices of the action buttons in the view's control list
    controls: std::ops::Range<usize>,
    grid: ButtonGrid,
}

struct RecentActivity {
    items: &'static [ActivityRecord],
    view_all: usize,
}

struct SystemStatus {
    metrics: &'static [MetricRecord],
    refresh: usize,
}

pub struct DashboardView {
    welcome: Option<WelcomeBanner>,
    stats: Option<StatsRow>,
    quick_actions: Option<QuickActions>,
    recent_activity: Option<RecentActivity>,
    system_status: Option<SystemStatus>,
    controls: Vec<Control>,
}

impl DashboardView {
    pub fn new(ctx: &ViewContext) -> Self {
        let features = &ctx.features;
        let mut controls = Vec::new();

        let welcome = features.show_welcome_banner.then(|| WelcomeBanner {
            greeting: format!("Welcome back, {}!", ctx.user.name),
            badge: format!("{} {}", ctx.user.avatar, ctx.user.role),
        });

        let stats = features
            .show_stats_cards
            .then_some(StatsRow { cards: DASHBOARD_STATS });

        let quick_actions = features.show_quick_actions.then(|| {
            let start = controls.len();
            controls.extend(
                QUICK_ACTIONS
                    .iter()
                    .map(|qa| Control::new(qa.label, qa.style, Action::None).icon(qa.icon)),
            );
            QuickActions {
                controls: start..controls.len(),
                grid: ButtonGrid::new(QUICK_ACTION_COLUMNS),
            }
        });

        let recent_activity = features.show_recent_activity.then(|| {
            controls.push(Control::new("View All →", StyleTag::Info, Action::None));
            RecentActivity {
                items: RECENT_ACTIVITIES,
                view_all: controls.len() - 1,
            }
        });

        let system_status = features.show_system_status.then(|| {
            controls.push(Control::new("Refresh", StyleTag::Success, Action::None).icon("refresh"));
            SystemStatus {
                metrics: SYSTEM_METRICS,
                refresh: controls.len() - 1,
            }
        });

        Self {
            welcome,
            stats,
            quick_actions,
            recent_activity,
            system_status,
            controls,
        }
    }

    pub fn boxed(ctx: &ViewContext) -> Box<dyn View> {
        Box::new(Self::new(ctx))
    }

    /// Titles of the statistics cards, in render order
    #[cfg(test)]
    pub fn stat_titles(&self) -> Vec<&'static str> {
        self.stats
            .as_ref()
            .map(|s| s.cards.iter().map(|c| c.title).collect())
            .unwrap_or_default()
    }

    fn render_welcome(&self, banner: &WelcomeBanner, area: Rect, buf: &mut Buffer, theme: &ThemeProvider) {
        let base = theme.resolve_inverse(StyleTag::Primary);
        fill(area, buf, base);

        let x = area.x + theme.gap("xl");
        let width = area.width.saturating_sub(theme.gap("xl") * 2) as usize;
        if width == 0 || area.height < 2 {
            return;
        }
        let mut y = area.y + 1;
        let icon = theme.icon("welcome");
        let greeting = if icon.is_empty() {
            banner.greeting.clone()
        } else {
            format!("{} {icon}", banner.greeting)
        };
        buf.set_string(
            x,
            y,
            truncate(&greeting, width),
            base.patch(theme.font("heading_large").style()),
        );
        let badge_width = banner.badge.width();
        if greeting.width() + badge_width + 2 <= width {
            let badge_x = x + (width - badge_width) as u16;
            buf.set_string(badge_x, y, &banner.badge, base);
        }
        y += 1;
        if y < area.bottom() {
            buf.set_string(x, y, truncate(WELCOME_SUBTITLE, width), base);
        }
    }

    fn render_stats(&self, row: &StatsRow, area: Rect, buf: &mut Buffer, theme: &ThemeProvider) {
        if row.cards.is_empty() {
            return;
        }
        let count = row.cards.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(row.cards.iter().map(|_| Constraint::Ratio(1, count)))
            .spacing(theme.gap("sm"))
            .split(area);
        for (card, column) in row.cards.iter().zip(columns.iter()) {
            StatCard::new(card, theme).render(*column, buf);
        }
    }

    fn render_quick_actions(
        &self,
        section: &QuickActions,
        area: Rect,
        buf: &mut Buffer,
        ctx: &RenderContext<'_>,
    ) {
        let theme = ctx.theme;
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_string(
            area.x,
            area.y,
            truncate(&theme.with_icon("lightning", "Quick Actions"), area.width as usize),
            theme.font("heading_medium").style().fg(theme.color("text_dark")),
        );

        let grid_area = Rect {
            y: area.y + 2,
            height: area.height.saturating_sub(2),
            ..area
        };
        for (offset, index) in section.controls.clone().enumerate() {
            let cell = section.grid.cell(grid_area, offset, theme.gap("sm"));
            if cell.y >= grid_area.bottom() {
                break;
            }
            self.controls[index].render(
                cell.x,
                cell.y,
                cell.width,
                buf,
                theme,
                ctx.focused == Some(index),
            );
        }
    }

    /// Bordered panel with a right-aligned header control; returns the body area
    fn render_panel(
        &self,
        title: String,
        tag: StyleTag,
        control: usize,
        area: Rect,
        buf: &mut Buffer,
        ctx: &RenderContext<'_>,
    ) -> Rect {
        let theme = ctx.theme;
        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(theme.resolve_style(tag))
            .style(Style::default().bg(theme.color("bg_white")));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return inner;
        }

        let button = &self.controls[control];
        let width = (button.text(theme).width() as u16 + 2).min(inner.width);
        button.render(
            inner.right() - width,
            inner.y,
            width,
            buf,
            theme,
            ctx.focused == Some(control),
        );

        Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        }
    }

    fn render_activity(&self, panel: &RecentActivity, area: Rect, buf: &mut Buffer, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;
        let title = theme.with_icon("recent", "Recent Activity");
        let body = self.render_panel(title, StyleTag::Info, panel.view_all, area, buf, ctx);
        stack(body, ActivityItem::HEIGHT, panel.items.len(), |i, slot| {
            ActivityItem::new(&panel.items[i], theme).render(slot, buf);
        });
    }

    fn render_status(&self, panel: &SystemStatus, area: Rect, buf: &mut Buffer, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;
        let title = theme.with_icon("system", "System Status");
        let body = self.render_panel(title, StyleTag::Success, panel.refresh, area, buf, ctx);
        stack(body, MetricItem::HEIGHT, panel.metrics.len(), |i, slot| {
            MetricItem::new(&panel.metrics[i], theme).render(slot, buf);
        });
    }
}

/// Lay `count` items of `height` rows top to bottom, one blank row apart,
/// stopping at the first one that does not fit
fn stack(area: Rect, height: u16, count: usize, mut draw: impl FnMut(usize, Rect)) {
    let mut y = area.y;
    for i in 0..count {
        if y + height > area.bottom() {
            break;
        }
        draw(i, Rect::new(area.x, y, area.width, height));
        y += height + 1;
    }
}

impl View for DashboardView {
    fn name(&self) -> &str {
        DASHBOARD
    }

    fn sections(&self) -> Vec<SectionKind> {
        [
            self.welcome.as_ref().map(|_| SectionKind::WelcomeBanner),
            self.stats.as_ref().map(|_| SectionKind::Stats),
            self.quick_actions.as_ref().map(|_| SectionKind::QuickActions),
            self.recent_activity.as_ref().map(|_| SectionKind::RecentActivity),
            self.system_status.as_ref().map(|_| SectionKind::SystemStatus),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &RenderContext<'_>) {
        let theme = ctx.theme;

        let mut constraints = Vec::new();
        if self.welcome.is_some() {
            constraints.push(Constraint::Length(theme.size("banner_height")));
        }
        if self.stats.is_some() {
            constraints.push(Constraint::Length(StatCard::height(theme)));
        }
        if let Some(section) = &self.quick_actions {
            constraints.push(Constraint::Length(2 + section.grid.rows(section.controls.len())));
        }
        let has_bottom = self.recent_activity.is_some() || self.system_status.is_some();
        if has_bottom {
            constraints.push(Constraint::Min(0));
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .spacing(1)
            .split(area);
        let mut rows = rows.iter().copied();

        if let Some(banner) = &self.welcome {
            if let Some(row) = rows.next() {
                self.render_welcome(banner, row, buf, theme);
            }
        }
        if let Some(stats) = &self.stats {
            if let Some(row) = rows.next() {
                self.render_stats(stats, row, buf, theme);
            }
        }
        if let Some(section) = &self.quick_actions {
            if let Some(row) = rows.next() {
                self.render_quick_actions(section, row, buf, ctx);
            }
        }
        let Some(bottom) = rows.next().filter(|_| has_bottom) else {
            return;
        };

        match (&self.recent_activity, &self.system_status) {
            (Some(activity), Some(status)) => {
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .spacing(theme.gap("sm"))
                    .split(bottom);
                self.render_activity(activity, halves[0], buf, ctx);
                self.render_status(status, halves[1], buf, ctx);
            }
            (Some(activity), None) => self.render_activity(activity, bottom, buf, ctx),
            (None, Some(status)) => self.render_status(status, bottom, buf, ctx),
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;
    use crate::ui::widgets::test_support::buffer_text;

    fn context(features: FeatureFlags) -> ViewContext {
        ViewContext {
            features,
            ..Default::default()
        }
    }

    fn rendered(view: &DashboardView, width: u16, height: u16) -> String {
        let theme = ThemeProvider::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, &RenderContext { theme: &theme, focused: None });
        buffer_text(&buf)
    }

    #[test]
    fn test_all_sections_by_default() {
        let view = DashboardView::new(&ViewContext::default());
        assert_eq!(
            view.sections(),
            vec![
                SectionKind::WelcomeBanner,
                SectionKind::Stats,
                SectionKind::QuickActions,
                SectionKind::RecentActivity,
                SectionKind::SystemStatus,
            ]
        );
        // six quick actions, view all, refresh
        assert_eq!(view.controls().len(), 8);
    }

    #[test]
    fn test_disabled_quick_actions_not_built() {
        let view = DashboardView::new(&context(FeatureFlags {
            show_quick_actions: false,
            ..Default::default()
        }));
        assert!(!view.sections().contains(&SectionKind::QuickActions));
        assert!(view.quick_actions.is_none());
        assert!(view.controls().iter().all(|c| c.label != "Run Query"));
        assert!(!rendered(&view, 140, 50).contains("Quick Actions"));
    }

    #[test]
    fn test_every_flag_off_builds_nothing() {
        let view = DashboardView::new(&context(FeatureFlags {
            show_welcome_banner: false,
            show_stats_cards: false,
            show_quick_actions: false,
            show_recent_activity: false,
            show_system_status: false,
            ..Default::default()
        }));
        assert!(view.sections().is_empty());
        assert!(view.controls().is_empty());
        assert!(rendered(&view, 80, 20).trim().is_empty());
    }

    #[test]
    fn test_stat_order_matches_table() {
        let view = DashboardView::new(&ViewContext::default());
        assert_eq!(
            view.stat_titles(),
            vec!["Database Connections", "Active Services", "Storage Used", "System Uptime"]
        );

        let text = rendered(&view, 160, 50);
        let positions: Vec<usize> = view
            .stat_titles()
            .iter()
            .map(|title| text.find(title).expect("stat title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_welcome_uses_configured_user() {
        let mut ctx = ViewContext::default();
        ctx.user.name = "Operator".to_string();
        let view = DashboardView::new(&ctx);
        let text = rendered(&view, 140, 50);
        assert!(text.contains("Welcome back, Operator!"));
        assert!(text.contains("System Admin"));
    }

    #[test]
    fn test_control_indices_follow_sections() {
        let view = DashboardView::new(&context(FeatureFlags {
            show_quick_actions: false,
            ..Default::default()
        }));
        let labels: Vec<_> = view.controls().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["View All →", "Refresh"]);
        assert_eq!(view.recent_activity.as_ref().map(|p| p.view_all), Some(0));
        assert_eq!(view.system_status.as_ref().map(|p| p.refresh), Some(1));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let view = DashboardView::new(&ViewContext::default());
        rendered(&view, 10, 5);
        rendered(&view, 1, 1);
    }
}
