//! Configuration settings
//!
//! Settings come from `proseframe.toml`. Every table is optional and every
//! missing key keeps its default, so a partial file only overrides what it
//! names.
//!
//! ```toml
//! [highlight]
//! mode = "non-overlapping"
//!
//! [page]
//! width_mm = 215.9
//! height_mm = 279.4
//! margin_mm = 25
//!
//! [page.fonts]
//! body = 12
//!
//! [html]
//! accent = "#2b6cb0"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use proseframe_core::HighlightMode;
use proseframe_page::{FontSizes, PageGeometry, PageStyle};
use proseframe_render::HtmlStyle;

/// File names searched in the working directory when no `--config` is given
pub const CONFIG_CANDIDATES: [&str; 2] = ["proseframe.toml", ".proseframe.toml"];

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub highlight: HighlightSettings,
    pub page: PageSettings,
    /// Style context for HTML output
    pub html: HtmlStyle,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HighlightSettings {
    pub mode: HighlightMode,
}

/// Page size, margins and fonts for paged output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
    pub fonts: FontSizes,
}

impl PageSettings {
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.width_mm, self.height_mm, self.margin_mm)
    }

    pub fn style(&self) -> PageStyle {
        PageStyle::with_fonts(self.fonts)
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        let a4 = PageGeometry::A4;
        Self {
            width_mm: a4.width_mm,
            height_mm: a4.height_mm,
            margin_mm: a4.margin_mm,
            fonts: FontSizes::default(),
        }
    }
}

/// Load settings from a config file, a discovered file, or defaults
///
/// An explicit path must exist and parse. A discovered file that fails to
/// parse is reported and skipped.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => {
            for candidate in CONFIG_CANDIDATES {
                let path = Path::new(candidate);
                if !path.exists() {
                    continue;
                }
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                match Settings::from_toml_str(&content) {
                    Ok(settings) => {
                        tracing::debug!(config = candidate, "loaded settings");
                        return Ok(settings);
                    }
                    Err(e) => {
                        tracing::warn!(config = candidate, error = %e, "ignoring invalid config");
                    }
                }
            }
            Ok(Settings::default())
        }
    }
}
