//! Static application data.
//!
//! Navigation structure and the dashboard's sample content. Everything here
//! is literal data loaded once and never mutated; display order is the
//! order of the tables.

use std::collections::HashMap;
use thiserror::Error;

use crate::ui::theme::StyleTag;

pub const APP_NAME: &str = "DB Manager";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_SUBTITLE: &str = "Professional";
pub const WINDOW_TITLE: &str = "DB Manager - Modern Dashboard";

/// A sidebar entry. The label doubles as the routing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub style: StyleTag,
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationSection {
    pub key: &'static str,
    pub title: &'static str,
    pub items: &'static [NavigationItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRecord {
    pub title: &'static str,
    pub value: &'static str,
    pub style: StyleTag,
    pub icon: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub style: StyleTag,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRecord {
    pub text: &'static str,
    pub time: &'static str,
    pub status: StyleTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRecord {
    pub label: &'static str,
    pub value: &'static str,
    /// Fill level, 0..=100
    pub percent: u16,
    pub style: StyleTag,
}

#[derive(Debug, Clone, Copy)]
pub struct UserInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

const fn nav(icon: &'static str, label: &'static str, style: StyleTag) -> NavigationItem {
    NavigationItem { icon, label, style }
}

pub const NAVIGATION: &[NavigationSection] = &[
    NavigationSection {
        key: "main",
        title: "MAIN",
        items: &[
            nav("dashboard", "Dashboard", StyleTag::Primary),
            nav("analytics", "Analytics", StyleTag::Info),
            nav("settings", "Settings", StyleTag::Secondary),
        ],
    },
    NavigationSection {
        key: "database",
        title: "DATABASE",
        items: &[
            nav("database", "Postgres Manager", StyleTag::Success),
            nav("query", "Query Builder", StyleTag::Info),
            nav("table", "Tables & Schemas", StyleTag::Primary),
            nav("backup", "Backups", StyleTag::Warning),
        ],
    },
    NavigationSection {
        key: "files",
        title: "FILE MANAGEMENT",
        items: &[
            nav("file", "File Explorer", StyleTag::Primary),
            nav("organize", "Organization Tools", StyleTag::Info),
            nav("search", "Search Files", StyleTag::Secondary),
            nav("cleanup", "Cleanup Utilities", StyleTag::Warning),
        ],
    },
    NavigationSection {
        key: "services",
        title: "SERVICES",
        items: &[
            nav("service", "Service Manager", StyleTag::Success),
            nav("monitor", "Monitoring", StyleTag::Info),
            nav("logs", "Logs Viewer", StyleTag::Secondary),
            nav("alert", "Alerts", StyleTag::Danger),
        ],
    },
];

pub const DASHBOARD_STATS: &[StatRecord] = &[
    StatRecord {
        title: "Database Connections",
        value: "127",
        style: StyleTag::Success,
        icon: "database",
        subtitle: "+12% from last week",
    },
    StatRecord {
        title: "Active Services",
        value: "8/10",
        style: StyleTag::Info,
        icon: "service",
        subtitle: "2 services stopped",
    },
    StatRecord {
        title: "Storage Used",
        value: "234 GB",
        style: StyleTag::Warning,
        icon: "storage",
        subtitle: "67% of total capacity",
    },
    StatRecord {
        title: "System Uptime",
        value: "15d 7h",
        style: StyleTag::Primary,
        icon: "time",
        subtitle: "Last restart: Jan 4",
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { label: "New Database Connection", style: StyleTag::Primary, icon: "connect" },
    QuickAction { label: "Run Query", style: StyleTag::Success, icon: "run" },
    QuickAction { label: "Backup Database", style: StyleTag::Info, icon: "storage" },
    QuickAction { label: "Schedule Task", style: StyleTag::Warning, icon: "schedule" },
    QuickAction { label: "View Logs", style: StyleTag::Secondary, icon: "logs" },
    QuickAction { label: "System Scan", style: StyleTag::Danger, icon: "scan" },
];

pub const RECENT_ACTIVITIES: &[ActivityRecord] = &[
    ActivityRecord { text: "Database backup completed", time: "2 minutes ago", status: StyleTag::Success },
    ActivityRecord { text: "New connection established", time: "15 minutes ago", status: StyleTag::Info },
    ActivityRecord { text: "Service 'Redis' restarted", time: "1 hour ago", status: StyleTag::Warning },
    ActivityRecord { text: "File cleanup performed", time: "3 hours ago", status: StyleTag::Primary },
    ActivityRecord { text: "System health check passed", time: "5 hours ago", status: StyleTag::Success },
];

pub const SYSTEM_METRICS: &[MetricRecord] = &[
    MetricRecord { label: "CPU Usage", value: "42%", percent: 42, style: StyleTag::Info },
    MetricRecord { label: "Memory Usage", value: "67%", percent: 67, style: StyleTag::Warning },
    MetricRecord { label: "Disk Usage", value: "34%", percent: 34, style: StyleTag::Success },
    MetricRecord { label: "Network I/O", value: "23%", percent: 23, style: StyleTag::Primary },
];

pub const USER_INFO: UserInfo = UserInfo {
    name: "Administrator",
    role: "System Admin",
    avatar: "👤",
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("navigation label {label:?} appears in both {first:?} and {second:?}")]
    DuplicateLabel {
        label: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

/// Every navigation label, in display order
pub fn navigation_labels(
    sections: &'static [NavigationSection],
) -> impl Iterator<Item = &'static str> {
    sections.iter().flat_map(|s| s.items.iter().map(|i| i.label))
}

/// Labels are routing keys, so they must be unique across all sections
pub fn validate_navigation(sections: &'static [NavigationSection]) -> Result<(), SettingsError> {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();
    for section in sections {
        for item in section.items {
            if let Some(first) = seen.insert(item.label, section.title) {
                return Err(SettingsError::DuplicateLabel {
                    label: item.label,
                    first,
                    second: section.title,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_navigation_is_valid() {
        assert_eq!(validate_navigation(NAVIGATION), Ok(()));
        assert_eq!(navigation_labels(NAVIGATION).count(), 15);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        const DUPLICATED: &[NavigationSection] = &[
            NavigationSection {
                key: "a",
                title: "A",
                items: &[nav("dashboard", "Dashboard", StyleTag::Primary)],
            },
            NavigationSection {
                key: "b",
                title: "B",
                items: &[nav("dashboard", "Dashboard", StyleTag::Info)],
            },
        ];
        assert_eq!(
            validate_navigation(DUPLICATED),
            Err(SettingsError::DuplicateLabel {
                label: "Dashboard",
                first: "A",
                second: "B",
            })
        );
    }

    #[test]
    fn test_stats_order() {
        let titles: Vec<_> = DASHBOARD_STATS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Database Connections", "Active Services", "Storage Used", "System Uptime"]
        );
    }

    #[test]
    fn test_dashboard_is_first_item() {
        assert_eq!(navigation_labels(NAVIGATION).next(), Some("Dashboard"));
    }
}
