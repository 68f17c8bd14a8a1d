use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::view::COMPACT_BREAKPOINT;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub routes: RouteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file. Defaults to `~/.config/qa-header/storage.toml`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Widths at or below this many pixels use the compact layout (default: 768).
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u32,
    /// Pixel width of one terminal column, used to turn terminal size into
    /// a viewport width (default: 8).
    #[serde(default = "default_cell_width")]
    pub cell_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Where the guard sends visitors without a session (default: "/login").
    #[serde(default = "default_login_route")]
    pub login: String,
}

fn default_compact_breakpoint() -> u32 {
    COMPACT_BREAKPOINT
}

fn default_cell_width() -> u32 {
    8
}

fn default_login_route() -> String {
    "/login".to_string()
}

impl ViewportConfig {
    /// Viewport width in pixels for a terminal `columns` wide.
    pub fn viewport_width(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: default_compact_breakpoint(),
            cell_width: default_cell_width(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login: default_login_route(),
        }
    }
}
