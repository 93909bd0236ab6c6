use anyhow::Result;
use colored::Colorize;
use mockpanel_core::i18n::{Language, LanguagePreferenceStore};
use mockpanel_infrastructure::FileLanguagePreferenceStore;

use super::translator;

pub fn run(code: Option<String>) -> Result<()> {
    let store = FileLanguagePreferenceStore::new()?;

    match code {
        Some(code) => {
            let language: Language = code.parse()?;
            store.save(language)?;
            let t = translator(Some(language));
            println!(
                "{}",
                t.t("lang.saved", &[("language", language.native_name())]).bright_green()
            );
        }
        None => {
            let language = store.load();
            let t = translator(Some(language));
            println!(
                "{}",
                t.t("lang.current", &[("language", language.native_name())])
            );
            let available: Vec<String> = Language::ALL
                .iter()
                .map(|lang| format!("{} ({})", lang.code(), lang.native_name()))
                .collect();
            println!("{}", available.join(", ").bright_black());
        }
    }
    Ok(())
}
