//! Localization.
//!
//! A [`Translator`] resolves dotted keys (`"interview.time_left"`) against a
//! [`TranslationCatalog`] and substitutes `{{var}}` placeholders. Lookups fall
//! back to English, then to the key itself, so a missing string never breaks
//! the front end.

mod builtin;

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

pub use builtin::builtin_catalog;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }
}

impl FromStr for Language {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| PanelError::not_found("language", s))
    }
}

/// Replaces every `{{name}}` in `template` with its value from `vars`.
///
/// Whitespace inside the braces is ignored. Placeholders without a value and
/// unterminated `{{` are left verbatim.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Per-language dictionaries of nested JSON objects.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    dictionaries: HashMap<Language, Value>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the dictionary for `language`.
    ///
    /// The dictionary must be a JSON object.
    pub fn insert(&mut self, language: Language, dictionary: Value) -> Result<()> {
        if !dictionary.is_object() {
            return Err(PanelError::validation(format!(
                "translation dictionary for '{}' must be an object",
                language.code()
            )));
        }
        self.dictionaries.insert(language, dictionary);
        Ok(())
    }

    /// Resolves a dotted key in one language.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.dictionaries.get(&language)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// The whole dictionary registered for `language`.
    pub fn dictionary(&self, language: Language) -> Option<&Value> {
        self.dictionaries.get(&language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.dictionaries.keys().copied()
    }
}

/// Key lookup with `{{var}}` substitution in the active language.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: TranslationCatalog,
    language: Language,
}

impl Translator {
    pub fn new(catalog: TranslationCatalog, language: Language) -> Self {
        Self { catalog, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translates `key` and substitutes `vars`.
    pub fn t(&self, key: &str, vars: &[(&str, &str)]) -> String {
        let template = self
            .catalog
            .lookup(self.language, key)
            .or_else(|| self.catalog.lookup(Language::En, key))
            .unwrap_or(key);
        interpolate(template, vars)
    }
}

/// Persistence of the user's language choice.
pub trait LanguagePreferenceStore: Send + Sync {
    /// Returns the stored language, or the default when nothing usable is stored.
    fn load(&self) -> Language;

    /// Stores `language`.
    fn save(&self, language: Language) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> TranslationCatalog {
        let mut catalog = TranslationCatalog::new();
        catalog
            .insert(
                Language::En,
                json!({"greeting": "Hello, {{name}}!", "nested": {"only_en": "fallback"}}),
            )
            .unwrap();
        catalog
            .insert(Language::Es, json!({"greeting": "¡Hola, {{ name }}!"}))
            .unwrap();
        catalog
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("{{a}} and {{ b }}", &[("a", "1"), ("b", "2")]), "1 and 2");
        assert_eq!(interpolate("{{missing}} stays", &[]), "{{missing}} stays");
        assert_eq!(interpolate("open {{ end", &[("end", "x")]), "open {{ end");
        assert_eq!(interpolate("no placeholders", &[("a", "1")]), "no placeholders");
    }

    #[test]
    fn test_translate_active_language() {
        let translator = Translator::new(catalog(), Language::Es);
        assert_eq!(translator.t("greeting", &[("name", "Ana")]), "¡Hola, Ana!");
    }

    #[test]
    fn test_translate_falls_back_to_english_then_key() {
        let translator = Translator::new(catalog(), Language::Es);
        assert_eq!(translator.t("nested.only_en", &[]), "fallback");
        assert_eq!(translator.t("does.not.exist", &[]), "does.not.exist");
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let mut catalog = TranslationCatalog::new();
        assert!(catalog.insert(Language::Fr, json!("nope")).is_err());
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert!("de".parse::<Language>().unwrap_err().is_not_found());
    }
}
