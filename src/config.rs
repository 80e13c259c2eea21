use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::settings;
use crate::ui::theme::{self, HexColor};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub features: FeatureFlags,
    pub user: UserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Base theme name, resolved by the theme provider
    pub theme: String,
    /// Icon rendering: emoji, ascii or none
    pub icons: IconMode,
    /// Palette overrides keyed by color name (e.g. `primary = "#0066cc"`)
    pub colors: BTreeMap<String, HexColor>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: theme::DEFAULT_THEME.to_string(),
            icons: IconMode::Emoji,
            colors: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    #[default]
    Emoji,
    Ascii,
    None,
}

/// Switches gating which dashboard sections get built at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub show_welcome_banner: bool,
    pub show_stats_cards: bool,
    pub show_quick_actions: bool,
    pub show_recent_activity: bool,
    pub show_system_status: bool,
    /// Accepted for compatibility; the terminal renderer has no animations
    pub enable_animations: bool,
    /// Show a status bar hint for the focused control
    pub enable_tooltips: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_welcome_banner: true,
            show_stats_cards: true,
            show_quick_actions: true,
            show_recent_activity: true,
            show_system_status: true,
            enable_animations: true,
            enable_tooltips: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        let user = &settings::USER_INFO;
        Self {
            name: user.name.to_string(),
            role: user.role.to_string(),
            avatar: user.avatar.to_string(),
        }
    }
}

/// Explicit log file (tilde expanded), or `dbdash/dbdash.log` under the
/// platform data directory
pub fn log_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(shellexpand::tilde(path).as_ref()),
        None => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dbdash")
            .join("dbdash.log"),
    }
}

impl Config {
    /// `dbdash/config.toml` under the platform config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dbdash")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::io::Write;

    #[test]
    fn test_defaults_enable_every_section() {
        let config = Config::default();
        assert!(config.features.show_welcome_banner);
        assert!(config.features.show_stats_cards);
        assert!(config.features.show_quick_actions);
        assert!(config.features.show_recent_activity);
        assert!(config.features.show_system_status);
        assert_eq!(config.appearance.theme, "cosmo");
        assert_eq!(config.user.name, "Administrator");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
            [features]
            show_quick_actions = false
            "#,
        )
        .unwrap();
        assert!(!config.features.show_quick_actions);
        assert!(config.features.show_stats_cards);
        assert_eq!(config.appearance.icons, IconMode::Emoji);
    }

    #[test]
    fn test_color_overrides() {
        let config = Config::parse(
            r##"
            [appearance]
            icons = "ascii"
            [appearance.colors]
            primary = "#112233"
            "##,
        )
        .unwrap();
        assert_eq!(config.appearance.icons, IconMode::Ascii);
        assert_eq!(
            config.appearance.colors.get("primary").map(|c| c.0),
            Some(Color::Rgb(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = Config::parse(
            r#"
            [appearance.colors]
            danger = "not-a-color"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("danger"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.user.role, "System Admin");
    }

    #[test]
    fn test_default_path_is_namespaced() {
        let path = Config::default_path();
        assert!(path.ends_with("dbdash/config.toml"));
    }

    #[test]
    fn test_log_path() {
        assert!(log_path(None).ends_with("dbdash/dbdash.log"));
        assert_eq!(log_path(Some("/tmp/x.log")), PathBuf::from("/tmp/x.log"));
        assert!(!log_path(Some("~/x.log")).starts_with("~"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[user]\nname = \"Operator\"").unwrap();
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.user.name, "Operator");
        assert_eq!(config.user.role, "System Admin");
    }

    #[test]
    fn test_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[features\nshow_stats_cards = ").unwrap();
        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
