//! Application configuration loaded from TOML.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_CELL_WIDTH};
pub use types::{AppConfig, RouteConfig, StorageConfig, ViewportConfig};
