pub mod json_translation_repository;
pub mod language_preference;
pub mod markdown_report_exporter;
pub mod paths;
pub mod toml_config_repository;

pub use crate::json_translation_repository::JsonTranslationRepository;
pub use crate::language_preference::FileLanguagePreferenceStore;
pub use crate::markdown_report_exporter::MarkdownReportExporter;
pub use crate::paths::PanelPaths;
pub use crate::toml_config_repository::TomlConfigRepository;
