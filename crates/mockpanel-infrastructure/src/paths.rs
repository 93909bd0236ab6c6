//! Path management for mockpanel configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/mockpanel/         # Config directory
//! ├── config.toml              # Engine configuration (panel, pacing, timer)
//! ├── preferences.toml         # Language preference
//! └── locales/                 # Optional translation overrides
//!     └── <code>.json
//! ```

use mockpanel_core::error::{PanelError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "mockpanel";

/// Resolves the well-known mockpanel paths for the current platform.
pub struct PanelPaths;

impl PanelPaths {
    /// Returns the mockpanel configuration directory (e.g. `~/.config/mockpanel/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| PanelError::config("Cannot find config directory"))
    }

    /// Returns the path to the engine configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the user preference file.
    pub fn preferences_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("preferences.toml"))
    }

    /// Returns the directory holding translation overrides.
    pub fn locales_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("locales"))
    }
}
