//! Navigation sidebar
//!
//! Renders the brand block, one titled group per navigation section and
//! the pinned Help / Exit actions. The sidebar owns only its cursor,
//! the highlighted label and the filter text; activating an entry yields
//! an `Action` for the shell to apply.

use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Matcher, Utf32Str,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use unicode_width::UnicodeWidthStr;

use crate::action::Action;
use crate::settings::{NavigationItem, NavigationSection, APP_NAME, APP_SUBTITLE, APP_VERSION};
use crate::ui::theme::{StyleTag, ThemeProvider};
use crate::ui::widgets::{fill, truncate};

pub const HELP_LABEL: &str = "Help & Support";
pub const EXIT_LABEL: &str = "Exit";

/// Rows taken by the brand block, including the gap below it
const BRAND_HEIGHT: u16 = 4;
/// Rows reserved at the bottom: help, exit, padding
const FOOTER_HEIGHT: u16 = 3;

/// A selectable sidebar row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    Item(&'static NavigationItem),
    Help,
    Exit,
}

impl SidebarEntry {
    pub fn label(&self) -> &'static str {
        match self {
            SidebarEntry::Item(item) => item.label,
            SidebarEntry::Help => HELP_LABEL,
            SidebarEntry::Exit => EXIT_LABEL,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            SidebarEntry::Item(item) => item.icon,
            SidebarEntry::Help => "help",
            SidebarEntry::Exit => "exit",
        }
    }

    fn style(&self) -> StyleTag {
        match self {
            SidebarEntry::Item(item) => item.style,
            SidebarEntry::Help => StyleTag::Secondary,
            SidebarEntry::Exit => StyleTag::Danger,
        }
    }

    pub fn action(&self) -> Action {
        match self {
            SidebarEntry::Item(item) => Action::navigate(item.label),
            SidebarEntry::Help => Action::navigate(HELP_LABEL),
            SidebarEntry::Exit => Action::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Title(&'static str),
    Entry(usize),
    Blank,
}

pub struct Sidebar {
    sections: &'static [NavigationSection],
    /// Visible entries: filtered menu items, then help and exit
    entries: Vec<SidebarEntry>,
    selected: usize,
    active: Option<String>,
    filter: String,
    filtering: bool,
    matcher: Matcher,
}

impl Sidebar {
    pub fn new(sections: &'static [NavigationSection]) -> Self {
        for section in sections {
            tracing::debug!(
                section = section.key,
                items = section.items.len(),
                "Sidebar section"
            );
        }
        let mut sidebar = Self {
            sections,
            entries: Vec::new(),
            selected: 0,
            active: None,
            filter: String::new(),
            filtering: false,
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        };
        sidebar.update_filtered();
        sidebar
    }

    /// Currently visible entries
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    pub fn selected_entry(&self) -> Option<&SidebarEntry> {
        self.entries.get(self.selected)
    }

    /// Move selection up
    pub fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn next(&mut self) {
        if self.selected < self.entries.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Put the cursor on the entry with `label`, if it is visible
    pub fn select_label(&mut self, label: &str) {
        if let Some(index) = self.entries.iter().position(|e| e.label() == label) {
            self.selected = index;
        }
    }

    /// Action for the entry under the cursor
    pub fn activate(&self) -> Action {
        self.selected_entry()
            .map(SidebarEntry::action)
            .unwrap_or_default()
    }

    /// Highlight the entry for the view now on screen
    pub fn set_active(&mut self, label: &str) {
        self.active = Some(label.to_string());
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// True when at least one menu item survives the filter
    pub fn has_matches(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, SidebarEntry::Item(_)))
    }

    /// Check if currently filtering
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Start filter mode
    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    /// Clear filter and exit filter mode
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.update_filtered();
    }

    /// Get current filter text
    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Add character to filter
    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.update_filtered();
    }

    /// Remove last character from filter
    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        if self.filter.is_empty() {
            self.filtering = false;
        }
        self.update_filtered();
    }

    /// Rebuild the visible entries. Matching items keep menu order so the
    /// section grouping stays intact.
    fn update_filtered(&mut self) {
        let sections = self.sections;
        let items = sections.iter().flat_map(|s| s.items.iter());
        self.entries = if self.filter.is_empty() {
            items.map(SidebarEntry::Item).collect()
        } else {
            let pattern = Pattern::parse(&self.filter, CaseMatching::Ignore, Normalization::Smart);
            let mut buf = Vec::new();
            items
                .filter(|item| {
                    pattern
                        .score(Utf32Str::new(item.label, &mut buf), &mut self.matcher)
                        .is_some()
                })
                .map(SidebarEntry::Item)
                .collect()
        };
        self.entries.push(SidebarEntry::Help);
        self.entries.push(SidebarEntry::Exit);

        if self.filter.is_empty() {
            if let Some(active) = self.active.clone() {
                self.select_label(&active);
            }
        } else {
            self.selected = 0;
        }
        if self.selected >= self.entries.len() {
            self.selected = 0;
        }
    }

    fn is_visible(&self, item: &NavigationItem) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, SidebarEntry::Item(i) if i.label == item.label))
    }

    /// Scrollable part of the menu in display order. Sections with no
    /// visible item are dropped while a filter is active.
    fn menu_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut index = 0;
        for section in self.sections {
            let visible = section.items.iter().filter(|i| self.is_visible(i)).count();
            if visible == 0 && !self.filter.is_empty() {
                continue;
            }
            if !rows.is_empty() {
                rows.push(Row::Blank);
            }
            rows.push(Row::Title(section.title));
            for _ in 0..visible {
                rows.push(Row::Entry(index));
                index += 1;
            }
        }
        rows
    }

    /// Screen row for every sidebar row that fits in `area`
    fn layout(&self, area: Rect) -> Vec<(u16, Row)> {
        let list_top = area.y + BRAND_HEIGHT;
        let footer_top = area.bottom().saturating_sub(FOOTER_HEIGHT).max(list_top);
        let list_height = (footer_top - list_top) as usize;

        let menu = self.menu_rows();
        let selected_row = menu
            .iter()
            .position(|row| *row == Row::Entry(self.selected))
            .unwrap_or(0);
        let offset = (selected_row + 1).saturating_sub(list_height);

        let mut placed: Vec<(u16, Row)> = menu
            .into_iter()
            .skip(offset)
            .take(list_height)
            .enumerate()
            .map(|(i, row)| (list_top + i as u16, row))
            .collect();

        let help = self.entries.len() - 2;
        for (i, row) in [Row::Entry(help), Row::Entry(help + 1)].into_iter().enumerate() {
            let y = footer_top + i as u16;
            if y < area.bottom() {
                placed.push((y, row));
            }
        }
        placed
    }

    /// Entry index at a screen position, if any
    pub fn entry_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if column < area.x || column >= area.right() {
            return None;
        }
        self.layout(area).into_iter().find_map(|(y, r)| match r {
            Row::Entry(index) if y == row => Some(index),
            _ => None,
        })
    }

    /// Mouse click: select the entry under the pointer and activate it
    pub fn click(&mut self, area: Rect, column: u16, row: u16) -> Option<Action> {
        let index = self.entry_at(area, column, row)?;
        self.selected = index;
        Some(self.activate())
    }

    /// Terminal cursor position while typing a filter
    pub fn cursor_position(&self, area: Rect, theme: &ThemeProvider) -> Option<(u16, u16)> {
        if !self.filtering || area.height <= BRAND_HEIGHT {
            return None;
        }
        // Display width, not byte length
        let x = area.x + theme.gap("lg") + 1 + self.filter.width() as u16;
        (x < area.right()).then_some((x, area.y + BRAND_HEIGHT - 1))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeProvider, focused: bool) {
        fill(area, buf, theme.resolve_outline(StyleTag::Dark));
        let pad = theme.gap("lg");
        let width = area.width.saturating_sub(pad * 2) as usize;
        if width == 0 || area.height == 0 {
            return;
        }
        let x = area.x + pad;
        let sidebar_text = theme.resolve_outline(StyleTag::Dark).fg(theme.color("text_sidebar"));
        let muted = theme.resolve_outline(StyleTag::Dark).fg(theme.color("text_muted"));

        let brand = theme.with_icon("lightning", APP_NAME);
        let version = format!("v{APP_VERSION} {APP_SUBTITLE}");
        for (dy, text, style) in [
            (1, brand.as_str(), sidebar_text.patch(theme.font("brand").style())),
            (2, version.as_str(), muted),
        ] {
            if area.y + dy < area.bottom() {
                buf.set_string(x, area.y + dy, truncate(text, width), style);
            }
        }

        for (y, row) in self.layout(area) {
            match row {
                Row::Title(title) => {
                    buf.set_string(x, y, truncate(title, width), muted);
                }
                Row::Entry(index) => {
                    let entry = &self.entries[index];
                    let is_active = self.active() == Some(entry.label());
                    let mut style = if focused && index == self.selected {
                        theme.resolve_inverse(entry.style())
                    } else {
                        theme.resolve_outline(entry.style())
                    };
                    if is_active {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    let marker = if is_active { "▌" } else { " " };
                    let text = format!("{marker}{}", theme.with_icon(entry.icon(), entry.label()));
                    buf.set_string(x, y, truncate(&text, width), style);
                }
                Row::Blank => {}
            }
        }

        if self.filtering && area.height > BRAND_HEIGHT {
            let y = area.y + BRAND_HEIGHT - 1;
            let text = format!("/{}", self.filter);
            buf.set_string(x, y, truncate(&text, width), sidebar_text);
        }
    }
}
