use chrono::NaiveDate;
use mockpanel_core::config::{ConfigRepository, EngineConfig};
use mockpanel_core::i18n::{Language, LanguagePreferenceStore, Translator};
use mockpanel_core::report::{InterviewReport, ReportExporter};
use mockpanel_infrastructure::{
    FileLanguagePreferenceStore, JsonTranslationRepository, MarkdownReportExporter,
    TomlConfigRepository,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let repo = TomlConfigRepository::with_path(dir.path().join("config.toml"));

    let config = repo.load().await.unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[tokio::test]
async fn test_config_save_then_load() {
    let dir = TempDir::new().unwrap();
    let repo = TomlConfigRepository::with_path(dir.path().join("nested").join("config.toml"));

    let mut config = EngineConfig::default();
    config.timer_budget_seconds = 300;
    config.personas.truncate(2);
    config.transition_phrases = vec!["Noted.".to_string()];
    repo.save(&config).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.timer_budget_seconds, 300);
    assert_eq!(loaded.personas, config.personas);
    assert_eq!(loaded.transition_phrases, vec!["Noted.".to_string()]);
}

#[tokio::test]
async fn test_config_overrides_roster_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
role_title = "Backend Engineer"

[pacing]
step_delay_ms = 0
introduction_stride_ms = 0

[[persona]]
id = 7
name = "Ada"
role_label = "Staff Engineer"
style = "direct"
introduction = "Hi, I'm Ada."
question_bank = ["Walk me through a design you regret."]
"#,
    )
    .unwrap();

    let config = TomlConfigRepository::with_path(&path).load().await.unwrap();
    assert_eq!(config.role_title, "Backend Engineer");
    assert_eq!(config.personas.len(), 1);
    assert_eq!(config.personas[0].name, "Ada");
    assert_eq!(config.pacing.step_delay_ms, 0);
    assert_eq!(config.timer_budget_seconds, 600);
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "transition_phrases = []\n").unwrap();
    let err = TomlConfigRepository::with_path(&path).load().await.unwrap_err();
    assert!(err.is_config());

    std::fs::write(&path, "timer_budget_seconds = \"soon\"\n").unwrap();
    let err = TomlConfigRepository::with_path(&path).load().await.unwrap_err();
    assert!(err.is_serialization());
}

#[test]
fn test_language_preference_defaults_and_persists() {
    let dir = TempDir::new().unwrap();
    let store = FileLanguagePreferenceStore::with_path(dir.path().join("preferences.toml"));
    assert_eq!(store.load(), Language::En);

    store.save(Language::Fr).unwrap();
    assert_eq!(store.load(), Language::Fr);

    std::fs::write(dir.path().join("preferences.toml"), "language = \"klingon\"").unwrap();
    assert_eq!(store.load(), Language::En);
}

#[test]
fn test_translation_overrides_merge_with_builtin() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("es.json"),
        r#"{"interview": {"you": "Usted"}}"#,
    )
    .unwrap();

    let catalog = JsonTranslationRepository::with_dir(dir.path())
        .load_catalog()
        .unwrap();
    let translator = Translator::new(catalog, Language::Es);

    assert_eq!(translator.t("interview.you", &[]), "Usted");
    assert_eq!(
        translator.t("lang.saved", &[("language", "Español")]),
        "Idioma cambiado a Español"
    );
}

#[test]
fn test_translation_override_must_be_object() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("fr.json"), "[1, 2]").unwrap();
    let err = JsonTranslationRepository::with_dir(dir.path())
        .load_catalog()
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_markdown_export_writes_named_file() {
    let dir = TempDir::new().unwrap();
    let report = InterviewReport::new(
        "Backend Panel: Round 2",
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        82,
        "Panel",
        vec!["Clear system design reasoning".to_string()],
        vec![],
    )
    .unwrap();

    let path = MarkdownReportExporter::new()
        .export(&report, dir.path())
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "backend-panel-round-2-2026-03-14.md"
    );
    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.starts_with("# Backend Panel: Round 2\n"));
    assert!(body.contains("- **Score:** 82/100"));
    assert!(body.contains("- Clear system design reasoning"));
    assert!(body.contains("_None recorded._"));
}
