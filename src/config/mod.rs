//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INTAKE_BOT` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use intake_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Menus rendered as {:?}", config.telegram.menu_style);
//! ```

mod error;
mod intake;
mod runtime;
mod telegram;

pub use error::{ConfigError, ValidationError};
pub use intake::IntakeConfig;
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use telegram::{MenuStyle, TelegramConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bot connection and doctors destination
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Intake form behaviour
    #[serde(default)]
    pub intake: IntakeConfig,

    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INTAKE_BOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INTAKE_BOT__TELEGRAM__BOT_TOKEN=...` -> `telegram.bot_token = ...`
    /// - `INTAKE_BOT__INTAKE__SUBMISSION=confirm` -> `intake.submission = confirm`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INTAKE_BOT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a missing or malformed bot token, a
    /// missing doctors chat or an unparsable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telegram.validate()?;
        self.runtime.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::SubmissionPolicy;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "INTAKE_BOT__TELEGRAM__BOT_TOKEN",
        "INTAKE_BOT__TELEGRAM__DOCTORS_CHAT_ID",
        "INTAKE_BOT__TELEGRAM__MENU_STYLE",
        "INTAKE_BOT__TELEGRAM__SKIP_PENDING_UPDATES",
        "INTAKE_BOT__INTAKE__SUBMISSION",
        "INTAKE_BOT__RUNTIME__ENVIRONMENT",
        "INTAKE_BOT__RUNTIME__LOG_FORMAT",
    ];

    fn set_minimal_env() {
        env::set_var("INTAKE_BOT__TELEGRAM__BOT_TOKEN", "123456:ABC-def");
        env::set_var("INTAKE_BOT__TELEGRAM__DOCTORS_CHAT_ID", "-1001234567890");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.telegram.bot_token.expose_secret(), "123456:ABC-def");
        assert_eq!(config.telegram.doctors_chat_id, -1001234567890);
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.telegram.menu_style, MenuStyle::Inline);
        assert!(config.telegram.skip_pending_updates);
        assert_eq!(config.intake.submission, SubmissionPolicy::Immediate);
        assert_eq!(config.runtime.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("INTAKE_BOT__TELEGRAM__MENU_STYLE", "reply");
        env::set_var("INTAKE_BOT__TELEGRAM__SKIP_PENDING_UPDATES", "false");
        env::set_var("INTAKE_BOT__INTAKE__SUBMISSION", "confirm");
        env::set_var("INTAKE_BOT__RUNTIME__ENVIRONMENT", "production");
        env::set_var("INTAKE_BOT__RUNTIME__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.telegram.menu_style, MenuStyle::Reply);
        assert!(!config.telegram.skip_pending_updates);
        assert_eq!(config.intake.submission, SubmissionPolicy::Confirm);
        assert_eq!(config.runtime.log_format, LogFormat::Json);
        assert!(config.is_production());
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("INTAKE_BOT__TELEGRAM__DOCTORS_CHAT_ID", "-100");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"))
        );
    }
}
