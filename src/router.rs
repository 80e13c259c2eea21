//! Content routing.
//!
//! The router owns the single piece of mutable navigation state, the active
//! view name, and the content container the active view is mounted in.
//! Every navigation runs the same four steps to completion before the next
//! input event is read:
//!
//! ```text
//! navigate(name)
//!   1. active <- name
//!   2. unmount (drop) the current view
//!   3. registry lookup, falling back to the placeholder builder
//!   4. mount the new view
//! ```
//!
//! The container holds at most one view, and after `navigate` returns it
//! holds exactly one.

use std::collections::HashMap;
use std::fmt;

use crate::settings::{navigation_labels, NavigationSection};
use crate::views::{ComingSoonView, DashboardView, View, ViewContext};

/// View shown at startup and targeted by every "back" control
pub const DASHBOARD: &str = "Dashboard";

/// Routing key: the label of a navigation item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewName(String);

impl ViewName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn dashboard() -> Self {
        Self::new(DASHBOARD)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ViewName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for ViewName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

pub type ViewBuilder = Box<dyn Fn(&ViewContext) -> Box<dyn View>>;

/// Builder for names without a registration
pub type PlaceholderBuilder = fn(&ViewName) -> Box<dyn View>;

/// Maps view names to the builders that construct them. Filled once at
/// startup and only read afterwards.
#[derive(Default)]
pub struct ViewRegistry {
    builders: HashMap<ViewName, ViewBuilder>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the shipped navigation: the dashboard plus a
    /// coming-soon screen for every other menu entry
    pub fn standard(sections: &'static [NavigationSection]) -> Self {
        let mut registry = Self::new().with(DASHBOARD, DashboardView::boxed);
        for label in navigation_labels(sections).filter(|label| *label != DASHBOARD) {
            registry = registry.with(label, move |_: &ViewContext| {
                ComingSoonView::boxed(&ViewName::new(label))
            });
        }
        registry
    }

    pub fn with<F>(mut self, name: impl Into<ViewName>, builder: F) -> Self
    where
        F: Fn(&ViewContext) -> Box<dyn View> + 'static,
    {
        let name = name.into();
        if self.builders.insert(name.clone(), Box::new(builder)).is_some() {
            tracing::warn!("Replaced builder registered for {}", name);
        }
        self
    }

    #[cfg(test)]
    pub fn contains(&self, name: &ViewName) -> bool {
        self.builders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    fn build(&self, name: &ViewName, ctx: &ViewContext) -> Option<Box<dyn View>> {
        self.builders.get(name).map(|builder| builder(ctx))
    }
}

/// Where the mounted view came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOrigin {
    Registered,
    Fallback,
}

pub struct MountedView {
    pub name: ViewName,
    pub origin: MountOrigin,
    pub view: Box<dyn View>,
}

/// Single slot the active view lives in
#[derive(Default)]
pub struct ContentContainer {
    slot: Option<MountedView>,
    mounts: u64,
}

impl ContentContainer {
    /// # Panics
    /// If a view is already mounted; callers must unmount first.
    fn mount(&mut self, mounted: MountedView) {
        if let Some(current) = &self.slot {
            panic!(
                "content container already holds {:?}, refusing to mount {:?}",
                current.name.as_str(),
                mounted.name.as_str()
            );
        }
        self.slot = Some(mounted);
        self.mounts += 1;
    }

    fn unmount(&mut self) -> Option<MountedView> {
        self.slot.take()
    }

    /// # Panics
    /// If nothing is mounted, which only happens mid-transition.
    pub fn mounted(&self) -> &MountedView {
        match &self.slot {
            Some(mounted) => mounted,
            None => panic!("content container has no mounted view"),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Number of mounts since creation
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }
}

pub struct ContentRouter {
    registry: ViewRegistry,
    context: ViewContext,
    placeholder: PlaceholderBuilder,
    active: ViewName,
    container: ContentContainer,
}

impl ContentRouter {
    /// Create the router and mount the dashboard
    pub fn new(registry: ViewRegistry, context: ViewContext) -> Self {
        Self::with_placeholder(registry, context, ComingSoonView::boxed)
    }

    pub fn with_placeholder(
        registry: ViewRegistry,
        context: ViewContext,
        placeholder: PlaceholderBuilder,
    ) -> Self {
        let mut router = Self {
            registry,
            context,
            placeholder,
            active: ViewName::dashboard(),
            container: ContentContainer::default(),
        };
        router.navigate(DASHBOARD);
        router
    }

    /// Replace the mounted view with the one registered for `name`, or with
    /// the placeholder when nothing is registered
    pub fn navigate(&mut self, name: impl Into<ViewName>) -> MountOrigin {
        let name = name.into();
        let previous = std::mem::replace(&mut self.active, name.clone());

        if let Some(old) = self.container.unmount() {
            tracing::debug!("Unmounting {}", old.view.name());
            drop(old);
        }

        let (view, origin) = match self.registry.build(&name, &self.context) {
            Some(view) => (view, MountOrigin::Registered),
            None => ((self.placeholder)(&name), MountOrigin::Fallback),
        };

        tracing::debug!(from = %previous, to = %name, ?origin, "Navigated");
        self.container.mount(MountedView { name, origin, view });
        tracing::debug!(mounts = self.container.mount_count(), "Content container updated");
        origin
    }

    pub fn active(&self) -> &ViewName {
        &self.active
    }

    pub fn view(&self) -> &dyn View {
        self.container.mounted().view.as_ref()
    }

    pub fn origin(&self) -> MountOrigin {
        self.container.mounted().origin
    }

    #[cfg(test)]
    pub fn container(&self) -> &ContentContainer {
        &self.container
    }

    #[cfg(test)]
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }
}
