//! Shell layout
//!
//! Provides:
//! - The fixed split of the screen into sidebar, header, content and status bar
//! - Row-major button grid used by the quick actions panel

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::theme::ThemeProvider;

/// Screen regions of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub sidebar: Rect,
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl ShellAreas {
    pub fn compute(size: Rect, theme: &ThemeProvider) -> Self {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(theme.size("sidebar_width")),
                Constraint::Min(0),
            ])
            .split(size);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(theme.size("header_height")),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(horizontal[1]);

        Self {
            sidebar: horizontal[0],
            header: right[0],
            content: right[1],
            status: right[2],
        }
    }
}

/// Buttons laid out left to right, wrapping every `columns` items
#[derive(Debug, Clone, Copy)]
pub struct ButtonGrid {
    pub columns: u16,
}

impl ButtonGrid {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.clamp(1, 10),
        }
    }

    /// Rows needed for `total` buttons
    pub fn rows(&self, total: usize) -> u16 {
        let columns = self.columns as usize;
        total.div_ceil(columns) as u16
    }

    /// Convert flat index to (row, col) position
    /// ```text
    /// Index:  0 1 2
    ///         3 4 5
    /// ```
    pub fn index_to_position(&self, index: usize) -> (u16, u16) {
        let columns = self.columns as usize;
        ((index / columns) as u16, (index % columns) as u16)
    }

    /// Area of the button at `index` inside `area`, one line per row
    pub fn cell(&self, area: Rect, index: usize, gap: u16) -> Rect {
        let (row, col) = self.index_to_position(index);
        let gaps = gap * (self.columns - 1);
        let width = area.width.saturating_sub(gaps) / self.columns;
        Rect {
            x: area.x + col * (width + gap),
            y: area.y + row,
            width,
            height: 1,
        }
    }
}

/// Center a `width` x `height` box inside `area`, clipped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
