//! TOML-based ConfigRepository implementation

use crate::paths::PanelPaths;
use mockpanel_core::config::{ConfigRepository, EngineConfig};
use mockpanel_core::error::{PanelError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the engine configuration in a single TOML file.
///
/// Responsibilities:
/// - Load the config, falling back to defaults when the file is absent or empty
/// - Validate whatever was loaded before handing it to the engine
/// - Write the config back, creating the parent directory if needed
pub struct TomlConfigRepository {
    config_path: PathBuf,
}

impl TomlConfigRepository {
    /// Creates a repository with the default config path (~/.config/mockpanel/config.toml)
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: PanelPaths::config_file()?,
        })
    }

    /// Creates a repository with a custom config path (for testing)
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

#[async_trait::async_trait]
impl ConfigRepository for TomlConfigRepository {
    async fn load(&self) -> Result<EngineConfig> {
        let content = match tokio::fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "No config file, using defaults");
                return Ok(EngineConfig::default());
            }
            Err(e) => {
                return Err(PanelError::io(format!(
                    "Failed to read config file at {:?}: {}",
                    self.config_path, e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }

        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        info!(
            path = %self.config_path.display(),
            personas = config.personas.len(),
            "Loaded engine config"
        );
        Ok(config)
    }

    async fn save(&self, config: &EngineConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PanelError::io(format!(
                    "Failed to create config directory at {:?}: {}",
                    parent, e
                ))
            })?;
        }

        let toml_string = toml::to_string_pretty(config)?;
        tokio::fs::write(&self.config_path, toml_string)
            .await
            .map_err(|e| {
                PanelError::io(format!(
                    "Failed to write config file at {:?}: {}",
                    self.config_path, e
                ))
            })?;

        debug!(path = %self.config_path.display(), "Saved engine config");
        Ok(())
    }
}
