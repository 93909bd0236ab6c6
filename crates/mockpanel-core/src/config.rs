//! Engine configuration.
//!
//! Everything the panel engine needs is injected through [`EngineConfig`]:
//! the persona roster, the countdown budget, the transition-phrase pool, the
//! presentation pacing and the message templates. Every field has a default,
//! so a config file only needs to name what it overrides.

use crate::error::{PanelError, Result};
use crate::persona::{Persona, default_panel, validate_roster};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default countdown budget, in seconds.
pub const DEFAULT_TIMER_BUDGET_SECONDS: u32 = 600;

/// Root configuration for one panel engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Role title substituted into the welcome message
    pub role_title: String,
    /// Countdown budget in seconds
    pub timer_budget_seconds: u32,
    /// Pool of phrases said between a reply and the next question
    pub transition_phrases: Vec<String>,
    /// Presentation delays
    pub pacing: Pacing,
    /// Fixed engine messages
    pub templates: MessageTemplates,
    /// Panel roster, in speaking order
    #[serde(rename = "persona")]
    pub personas: Vec<Persona>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            role_title: "Software Engineer".to_string(),
            timer_budget_seconds: DEFAULT_TIMER_BUDGET_SECONDS,
            transition_phrases: default_transition_phrases(),
            pacing: Pacing::default(),
            templates: MessageTemplates::default(),
            personas: default_panel(),
        }
    }
}

impl EngineConfig {
    /// Checks the invariants the engine relies on.
    ///
    /// - at least one persona, ids unique and non-zero
    /// - every question bank non-empty
    /// - a non-empty transition-phrase pool
    pub fn validate(&self) -> Result<()> {
        validate_roster(&self.personas)?;

        if self.transition_phrases.is_empty() {
            return Err(PanelError::config("transition phrase pool is empty"));
        }

        Ok(())
    }
}

fn default_transition_phrases() -> Vec<String> {
    [
        "Thank you for that answer.",
        "Interesting, thanks for sharing that.",
        "Great, let's move on.",
        "I appreciate the detail there.",
        "Good, that gives us a clearer picture.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Presentation delays, stored in milliseconds.
///
/// Delays only shape pacing. Collapsing them to zero yields the same
/// message sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// Delay between logical steps
    pub step_delay_ms: u64,
    /// Stride between successive persona introductions
    pub introduction_stride_ms: u64,
    /// Countdown tick period
    pub tick_interval_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            step_delay_ms: 1500,
            introduction_stride_ms: 2000,
            tick_interval_ms: 1000,
        }
    }
}

impl Pacing {
    /// Pacing with every presentation delay collapsed. The countdown still
    /// ticks once per second.
    pub fn immediate() -> Self {
        Self {
            step_delay_ms: 0,
            introduction_stride_ms: 0,
            ..Self::default()
        }
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn introduction_stride(&self) -> Duration {
        Duration::from_millis(self.introduction_stride_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        // A zero tick period would spin the countdown.
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// Fixed messages spoken by the panel. Placeholders use `{{name}}` syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// First message, from the first persona. Variables: `role`, `name`.
    pub welcome: String,
    /// Said by the first persona after the introductions.
    pub ready: String,
    /// Said by a random persona when the session ends. Variables: `name`.
    pub closing: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            welcome: "Welcome to your {{role}} panel interview! I'm {{name}} and I'll be coordinating today. Let's start with introductions.".to_string(),
            ready: "Thanks, everyone. Let's get started with the first question.".to_string(),
            closing: "That brings us to the end of the interview. Thank you for your time, we'll follow up with feedback soon.".to_string(),
        }
    }
}

/// An abstract source of engine configuration.
///
/// Decouples the engine's construction from where the configuration lives
/// (TOML file, embedded defaults, test fixtures).
#[async_trait::async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Loads the configuration, falling back to defaults when none is stored.
    async fn load(&self) -> Result<EngineConfig>;

    /// Persists `config`, replacing what is stored.
    async fn save(&self, config: &EngineConfig) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.timer_budget_seconds, 600);
        assert_eq!(config.transition_phrases.len(), 5);
        assert_eq!(config.personas.len(), 5);
    }

    #[test]
    fn test_validate_rejects_reserved_id() {
        let mut config = EngineConfig::default();
        config.personas[2].id = 0;
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let mut config = EngineConfig::default();
        config.personas[1].id = config.personas[0].id;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate persona id"));
    }

    #[test]
    fn test_validate_rejects_empty_bank_and_pool() {
        let mut config = EngineConfig::default();
        config.personas[4].question_bank.clear();
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.transition_phrases.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
timer_budget_seconds = 120

[pacing]
step_delay_ms = 10
"#,
        )
        .unwrap();

        assert_eq!(config.timer_budget_seconds, 120);
        assert_eq!(config.pacing.step_delay_ms, 10);
        assert_eq!(config.pacing.introduction_stride_ms, 2000);
        assert_eq!(config.personas.len(), 5);
    }

    #[test]
    fn test_immediate_pacing_keeps_tick() {
        let pacing = Pacing::immediate();
        assert_eq!(pacing.step_delay(), Duration::ZERO);
        assert_eq!(pacing.introduction_stride(), Duration::ZERO);
        assert_eq!(pacing.tick_interval(), Duration::from_secs(1));
    }
}
