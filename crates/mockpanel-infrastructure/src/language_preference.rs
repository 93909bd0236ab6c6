//! File-backed language preference.

use crate::paths::PanelPaths;
use mockpanel_core::error::{PanelError, Result};
use mockpanel_core::i18n::{Language, LanguagePreferenceStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    language: Language,
}

/// Keeps the chosen language in `preferences.toml`.
///
/// A missing or unreadable file is not an error: the default language is used.
pub struct FileLanguagePreferenceStore {
    path: PathBuf,
}

impl FileLanguagePreferenceStore {
    /// Creates a store at the default path (~/.config/mockpanel/preferences.toml)
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: PanelPaths::preferences_file()?,
        })
    }

    /// Creates a store at a custom path (for testing)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LanguagePreferenceStore for FileLanguagePreferenceStore {
    fn load(&self) -> Language {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Language::default();
        };
        match toml::from_str::<PreferencesFile>(&content) {
            Ok(prefs) => prefs.language,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring invalid preferences file");
                Language::default()
            }
        }
    }

    fn save(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PanelError::io(format!("Failed to create directory {:?}: {}", parent, e))
            })?;
        }
        let content = toml::to_string_pretty(&PreferencesFile { language })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
