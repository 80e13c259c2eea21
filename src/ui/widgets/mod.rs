//! Presentational widgets
//!
//! Each widget is a pure function of its record and the theme: the same
//! inputs always produce the same buffer contents.

mod activity_item;
mod metric_item;
mod stat_card;

pub use activity_item::ActivityItem;
pub use metric_item::MetricItem;
pub use stat_card::StatCard;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

/// Paint every cell of `area` with `style`
pub(crate) fn fill(area: Rect, buf: &mut Buffer, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed.
/// The result's string width never exceeds `max_width` (for `max_width >= 1`).
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        // Measure the accumulated string, not single chars: a variation
        // selector can widen the glyph before it.
        let mut result = String::new();
        for c in s.chars() {
            result.push(c);
            if result.width() + 1 > max_width {
                result.pop();
                break;
            }
        }
        result.push('…');
        result
    }
}
