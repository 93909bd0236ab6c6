pub mod interview;
pub mod lang;
pub mod personas;
pub mod report;
pub mod roles;

use std::path::PathBuf;

use anyhow::Result;
use mockpanel_core::config::{ConfigRepository, EngineConfig};
use mockpanel_core::i18n::{Language, LanguagePreferenceStore, Translator, builtin_catalog};
use mockpanel_infrastructure::{
    FileLanguagePreferenceStore, JsonTranslationRepository, TomlConfigRepository,
};
use tracing::warn;

/// Loads the engine config from `path`, or from the default location.
pub async fn load_config(path: Option<PathBuf>) -> Result<EngineConfig> {
    let repository = match path {
        Some(path) => TomlConfigRepository::with_path(path),
        None => TomlConfigRepository::new()?,
    };
    Ok(repository.load().await?)
}

/// Builds the translator for this run.
///
/// `language` overrides the stored preference. Unreadable locale overrides
/// fall back to the built-in strings.
pub fn translator(language: Option<Language>) -> Translator {
    let language = language.unwrap_or_else(|| match FileLanguagePreferenceStore::new() {
        Ok(store) => store.load(),
        Err(_) => Language::default(),
    });

    let catalog = JsonTranslationRepository::new()
        .and_then(|repository| repository.load_catalog())
        .unwrap_or_else(|e| {
            warn!(error = %e, "Using built-in translations");
            builtin_catalog()
        });

    Translator::new(catalog, language)
}
