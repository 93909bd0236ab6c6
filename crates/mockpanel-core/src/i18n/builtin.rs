//! Built-in interface strings.

use super::{Language, TranslationCatalog};
use serde_json::{Value, json};

fn english() -> Value {
    json!({
        "app": {
            "title": "mockpanel - panel interview practice",
            "goodbye": "Goodbye! Good luck with your interviews."
        },
        "roles": { "heading": "Available interview roles:" },
        "personas": { "heading": "Your panel:" },
        "interview": {
            "hint": "Type your answer and press Enter. Commands: /time, /end, /restart, quit",
            "you": "You",
            "time_left": "Time remaining: {{minutes}}:{{seconds}}",
            "waiting": "Please wait for the panel's next question.",
            "complete": "Interview complete. You answered {{replies}} questions.",
            "restarted": "Session reset. Starting a new interview..."
        },
        "report": { "exported": "Report saved to {{path}}" },
        "lang": {
            "current": "Current language: {{language}}",
            "saved": "Language set to {{language}}"
        }
    })
}

fn spanish() -> Value {
    json!({
        "app": {
            "title": "mockpanel - práctica de entrevistas en panel",
            "goodbye": "¡Adiós! Mucha suerte en tus entrevistas."
        },
        "roles": { "heading": "Puestos disponibles:" },
        "personas": { "heading": "Tu panel:" },
        "interview": {
            "hint": "Escribe tu respuesta y pulsa Enter. Comandos: /time, /end, /restart, quit",
            "you": "Tú",
            "time_left": "Tiempo restante: {{minutes}}:{{seconds}}",
            "waiting": "Espera la siguiente pregunta del panel.",
            "complete": "Entrevista terminada. Respondiste {{replies}} preguntas.",
            "restarted": "Sesión reiniciada. Comenzando una nueva entrevista..."
        },
        "report": { "exported": "Informe guardado en {{path}}" },
        "lang": {
            "current": "Idioma actual: {{language}}",
            "saved": "Idioma cambiado a {{language}}"
        }
    })
}

fn french() -> Value {
    json!({
        "app": {
            "title": "mockpanel - entraînement aux entretiens en panel",
            "goodbye": "Au revoir ! Bonne chance pour vos entretiens."
        },
        "roles": { "heading": "Postes disponibles :" },
        "personas": { "heading": "Votre panel :" },
        "interview": {
            "hint": "Tapez votre réponse puis Entrée. Commandes : /time, /end, /restart, quit",
            "you": "Vous",
            "time_left": "Temps restant : {{minutes}}:{{seconds}}",
            "waiting": "Veuillez attendre la prochaine question du panel.",
            "complete": "Entretien terminé. Vous avez répondu à {{replies}} questions.",
            "restarted": "Session réinitialisée. Nouvel entretien en cours..."
        },
        "report": { "exported": "Rapport enregistré dans {{path}}" },
        "lang": {
            "current": "Langue actuelle : {{language}}",
            "saved": "Langue définie sur {{language}}"
        }
    })
}

/// Catalog with the English, Spanish and French interface strings.
pub fn builtin_catalog() -> TranslationCatalog {
    let mut catalog = TranslationCatalog::new();
    for (language, dictionary) in [
        (Language::En, english()),
        (Language::Es, spanish()),
        (Language::Fr, french()),
    ] {
        // Literal objects always pass the object check.
        let _ = catalog.insert(language, dictionary);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Some(map) = value.as_object() {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                leaf_keys(v, &key, out);
            }
        } else {
            out.push(prefix.to_string());
        }
    }

    #[test]
    fn test_all_languages_cover_english_keys() {
        let catalog = builtin_catalog();
        let mut keys = Vec::new();
        leaf_keys(&english(), "", &mut keys);

        for language in Language::ALL {
            for key in &keys {
                assert!(
                    catalog.lookup(language, key).is_some(),
                    "{} is missing '{}'",
                    language.code(),
                    key
                );
            }
        }
    }
}
