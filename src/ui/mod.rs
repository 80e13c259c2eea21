//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Frame composition and status bar
//! - `theme.rs` - Palette, fonts, spacing, icons
//! - `layout.rs` - Shell split and button grid
//! - `sidebar.rs` - Navigation menu
//! - `header.rs` - Page title and breadcrumb
//! - `widgets/` - Stat card, activity and metric rows

mod draw;
pub mod header;
pub mod layout;
pub mod sidebar;
pub mod theme;
pub mod widgets;

// Re-export main draw function
pub use draw::draw;
