//! Translation catalogs loaded from JSON files.

use crate::paths::PanelPaths;
use mockpanel_core::error::{PanelError, Result};
use mockpanel_core::i18n::{Language, TranslationCatalog, builtin_catalog};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Reads `<code>.json` dictionaries from a locales directory.
///
/// A file replaces individual keys of the built-in dictionary for its
/// language; languages without a file keep the built-in strings.
pub struct JsonTranslationRepository {
    locales_dir: PathBuf,
}

impl JsonTranslationRepository {
    /// Creates a repository over the default directory (~/.config/mockpanel/locales)
    pub fn new() -> Result<Self> {
        Ok(Self {
            locales_dir: PanelPaths::locales_dir()?,
        })
    }

    /// Creates a repository over a custom directory (for testing)
    pub fn with_dir(locales_dir: impl Into<PathBuf>) -> Self {
        Self {
            locales_dir: locales_dir.into(),
        }
    }

    /// Built-in catalog with any on-disk overrides applied.
    pub fn load_catalog(&self) -> Result<TranslationCatalog> {
        let builtin = builtin_catalog();
        let mut catalog = TranslationCatalog::new();

        for language in Language::ALL {
            let mut dictionary = builtin_dictionary(&builtin, language);
            if let Some(overrides) = self.read_dictionary(language)? {
                merge(&mut dictionary, overrides);
            }
            catalog.insert(language, dictionary)?;
        }
        Ok(catalog)
    }

    fn read_dictionary(&self, language: Language) -> Result<Option<Value>> {
        let path = self.locales_dir.join(format!("{}.json", language.code()));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value: Value = serde_json::from_str(&content)?;
        if !value.is_object() {
            return Err(PanelError::validation(format!(
                "{:?} must contain a JSON object",
                path
            )));
        }
        debug!(path = %path.display(), "Loaded translation overrides");
        Ok(Some(value))
    }
}

fn builtin_dictionary(builtin: &TranslationCatalog, language: Language) -> Value {
    builtin
        .dictionary(language)
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()))
}

/// Deep-merges `overrides` into `base`; scalar values in `overrides` win.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}
