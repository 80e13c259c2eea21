//! Actions emitted by activatable elements.
//!
//! Sidebar rows, header chips and in-view controls never touch shared state
//! themselves. Activating one yields an `Action`, and the application shell
//! is the only place that applies it:
//!
//! ```text
//! key / click
//!      │
//!      ▼
//! Sidebar::activate / Control::action
//!      │
//!      ▼
//!   Action ──► App::dispatch ──► ContentRouter::navigate
//! ```

use crate::router::ViewName;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// Nothing wired to this element yet
    #[default]
    None,
    /// Replace the content area with the named view
    Navigate(ViewName),
    /// Leave the event loop and restore the terminal
    Quit,
}

impl Action {
    pub fn navigate(name: impl Into<ViewName>) -> Self {
        Action::Navigate(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_shorthand() {
        assert_eq!(
            Action::navigate("Settings"),
            Action::Navigate(ViewName::new("Settings"))
        );
        assert_eq!(Action::default(), Action::None);
    }
}
