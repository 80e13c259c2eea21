//! Theme provider
//!
//! Provides:
//! - Named palette, font, spacing, size and icon lookups with fixed defaults
//! - Semantic style tags (primary, success, ...) resolved to concrete styles
//! - Hex color parsing for config overrides

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

use crate::config::{AppearanceConfig, IconMode};

pub const DEFAULT_THEME: &str = "cosmo";

/// Color returned for unknown palette names
pub const DEFAULT_COLOR: Color = Color::Rgb(0, 0, 0);
/// Spacing returned for unknown spacing names
pub const DEFAULT_SPACING: u16 = 10;

/// Semantic color tag attached to data records and controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl StyleTag {
    /// Palette key the tag resolves through
    pub fn color_key(self) -> &'static str {
        match self {
            StyleTag::Primary => "primary",
            StyleTag::Secondary => "secondary",
            StyleTag::Success => "success",
            StyleTag::Danger => "danger",
            StyleTag::Warning => "warning",
            StyleTag::Info => "info",
            StyleTag::Light => "bg_light",
            StyleTag::Dark => "bg_sidebar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font descriptor. Terminals only honour the weight; family and size are kept
/// so the table reads the same as the desktop configuration it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    #[allow(dead_code)]
    pub family: &'static str,
    #[allow(dead_code)]
    pub size: u16,
    pub weight: FontWeight,
}

impl FontSpec {
    const fn new(size: u16, weight: FontWeight) -> Self {
        Self {
            family: "Segoe UI",
            size,
            weight,
        }
    }

    pub fn style(&self) -> Style {
        match self.weight {
            FontWeight::Bold => Style::default().add_modifier(Modifier::BOLD),
            FontWeight::Normal => Style::default(),
        }
    }
}

pub const DEFAULT_FONT: FontSpec = FontSpec::new(11, FontWeight::Normal);

/// Cosmo - light, high-contrast palette
const COSMO: &[(&str, Color)] = &[
    ("primary", Color::Rgb(0, 102, 204)),       // #0066cc
    ("secondary", Color::Rgb(108, 117, 125)),   // #6c757d
    ("success", Color::Rgb(40, 167, 69)),       // #28a745
    ("danger", Color::Rgb(220, 53, 69)),        // #dc3545
    ("warning", Color::Rgb(255, 193, 7)),       // #ffc107
    ("info", Color::Rgb(23, 162, 184)),         // #17a2b8
    ("bg_light", Color::Rgb(248, 249, 250)),    // #f8f9fa
    ("bg_white", Color::Rgb(255, 255, 255)),    // #ffffff
    ("bg_sidebar", Color::Rgb(44, 62, 80)),     // #2c3e50
    ("bg_header", Color::Rgb(52, 73, 94)),      // #34495e
    ("text_dark", Color::Rgb(33, 37, 41)),      // #212529
    ("text_light", Color::Rgb(255, 255, 255)),  // #ffffff
    ("text_muted", Color::Rgb(108, 117, 125)),  // #6c757d
    ("text_sidebar", Color::Rgb(236, 240, 241)), // #ecf0f1
    ("border_light", Color::Rgb(222, 226, 230)), // #dee2e6
    ("border_medium", Color::Rgb(206, 212, 218)), // #ced4da
    ("accent_blue", Color::Rgb(0, 123, 255)),   // #007bff
    ("accent_purple", Color::Rgb(111, 66, 193)), // #6f42c1
    ("accent_pink", Color::Rgb(232, 62, 140)),  // #e83e8c
    ("accent_orange", Color::Rgb(253, 126, 20)), // #fd7e14
    ("accent_teal", Color::Rgb(32, 201, 151)),  // #20c997
    ("accent_cyan", Color::Rgb(23, 162, 184)),  // #17a2b8
    ("online", Color::Rgb(40, 167, 69)),        // #28a745
    ("offline", Color::Rgb(220, 53, 69)),       // #dc3545
    ("warning_status", Color::Rgb(255, 193, 7)), // #ffc107
    ("idle", Color::Rgb(108, 117, 125)),        // #6c757d
];

const FONTS: &[(&str, FontSpec)] = &[
    ("brand", FontSpec::new(24, FontWeight::Bold)),
    ("brand_subtitle", FontSpec::new(9, FontWeight::Normal)),
    ("heading_large", FontSpec::new(22, FontWeight::Bold)),
    ("heading_medium", FontSpec::new(16, FontWeight::Bold)),
    ("heading_small", FontSpec::new(14, FontWeight::Bold)),
    ("body_large", FontSpec::new(12, FontWeight::Normal)),
    ("body", FontSpec::new(11, FontWeight::Normal)),
    ("body_small", FontSpec::new(10, FontWeight::Normal)),
    ("caption", FontSpec::new(9, FontWeight::Normal)),
    ("stat_value", FontSpec::new(32, FontWeight::Bold)),
    ("nav_item", FontSpec::new(11, FontWeight::Normal)),
];

const SPACING: &[(&str, u16)] = &[
    ("xs", 5),
    ("sm", 10),
    ("md", 15),
    ("lg", 20),
    ("xl", 30),
    ("xxl", 40),
];

/// Component sizes, in terminal cells
const SIZES: &[(&str, u16)] = &[
    ("sidebar_width", 30),
    ("header_height", 4),
    ("card_padding", 1),
    ("button_height", 1),
    ("stat_card_height", 7),
    ("banner_height", 4),
];

/// Icon glyphs: (name, emoji, ascii)
const ICONS: &[(&str, &str, &str)] = &[
    ("dashboard", "🏠", "#"),
    ("analytics", "📊", "%"),
    ("settings", "⚙️", "*"),
    ("database", "🗄️", "D"),
    ("query", "🔍", "?"),
    ("table", "📋", "T"),
    ("backup", "🔄", "B"),
    ("file", "📁", "F"),
    ("organize", "🗂️", "O"),
    ("search", "🔎", "/"),
    ("cleanup", "♻️", "C"),
    ("service", "🚀", "S"),
    ("monitor", "📈", "M"),
    ("logs", "📝", "L"),
    ("alert", "🔔", "!"),
    ("help", "❓", "?"),
    ("exit", "🚪", "x"),
    ("profile", "👤", "@"),
    ("welcome", "👋", "~"),
    ("storage", "💾", "="),
    ("time", "⏱️", "t"),
    ("recent", "📜", "r"),
    ("system", "💻", "s"),
    ("refresh", "🔄", "R"),
    ("connect", "🔌", "+"),
    ("run", "▶️", ">"),
    ("schedule", "📅", "d"),
    ("scan", "🔍", "?"),
    ("success", "✅", "v"),
    ("error", "❌", "x"),
    ("info_icon", "ℹ️", "i"),
    ("lightning", "⚡", "*"),
    ("construction", "🚧", "[!]"),
];

/// Canonical name and palette table for a theme name
fn preset(name: &str) -> Option<(&'static str, &'static [(&'static str, Color)])> {
    match name.to_lowercase().as_str() {
        "cosmo" | "default" => Some(("cosmo", COSMO)),
        _ => None,
    }
}

/// Injected lookup service for every presentational concern
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    name: String,
    colors: HashMap<String, Color>,
    icons: IconMode,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(&AppearanceConfig::default())
    }
}

impl ThemeProvider {
    pub fn new(appearance: &AppearanceConfig) -> Self {
        let (name, palette) = match preset(&appearance.theme) {
            Some((name, palette)) => (name.to_string(), palette),
            None => {
                tracing::warn!(
                    "Unknown theme {:?}, falling back to {}",
                    appearance.theme,
                    DEFAULT_THEME
                );
                (DEFAULT_THEME.to_string(), COSMO)
            }
        };

        let mut colors: HashMap<String, Color> = palette
            .iter()
            .map(|(key, color)| (key.to_string(), *color))
            .collect();
        for (key, color) in &appearance.colors {
            colors.insert(key.clone(), color.0);
        }

        Self {
            name,
            colors,
            icons: appearance.icons,
        }
    }

    pub fn theme_name(&self) -> &str {
        &self.name
    }

    pub fn color(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or(DEFAULT_COLOR)
    }

    pub fn font(&self, name: &str) -> FontSpec {
        lookup(FONTS, name).unwrap_or(DEFAULT_FONT)
    }

    pub fn spacing(&self, name: &str) -> u16 {
        lookup(SPACING, name).unwrap_or(DEFAULT_SPACING)
    }

    pub fn size(&self, name: &str) -> u16 {
        lookup(SIZES, name).unwrap_or(0)
    }

    pub fn icon(&self, name: &str) -> &'static str {
        let Some((_, emoji, ascii)) = ICONS.iter().find(|(key, _, _)| *key == name) else {
            return "";
        };
        match self.icons {
            IconMode::Emoji => *emoji,
            IconMode::Ascii => *ascii,
            IconMode::None => "",
        }
    }

    /// Spacing converted from the pixel table to terminal cells
    pub fn gap(&self, name: &str) -> u16 {
        (self.spacing(name) + 5) / 10
    }

    /// Prefix `text` with an icon and a space, or nothing when icons are off
    pub fn with_icon(&self, icon: &str, text: &str) -> String {
        let glyph = self.icon(icon);
        if glyph.is_empty() {
            text.to_string()
        } else {
            format!("{glyph} {text}")
        }
    }

    /// Foreground-colored text for a tag
    pub fn resolve_style(&self, tag: StyleTag) -> Style {
        Style::default().fg(self.color(tag.color_key()))
    }

    /// Filled variant: light text on the tag color
    pub fn resolve_inverse(&self, tag: StyleTag) -> Style {
        let fg = match tag {
            StyleTag::Warning | StyleTag::Light => self.color("text_dark"),
            _ => self.color("text_light"),
        };
        Style::default().fg(fg).bg(self.color(tag.color_key()))
    }

    /// Outline variant used on the dark sidebar
    pub fn resolve_outline(&self, tag: StyleTag) -> Style {
        Style::default()
            .fg(self.color(tag.color_key()))
            .bg(self.color("bg_sidebar"))
    }

    /// Content area surface
    pub fn surface(&self) -> Style {
        self.resolve_inverse(StyleTag::Light)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.color("text_muted"))
    }
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table.iter().find(|(key, _)| *key == name).map(|(_, v)| *v)
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        // #rrggbb, alpha of #rrggbbaa is ignored
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Hex color as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Color);

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s)
            .map(HexColor)
            .map_err(serde::de::Error::custom)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Color::Rgb(r, g, b) => serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}")),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}
