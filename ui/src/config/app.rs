use super::{
    LoggingConfig, demo::DemoConfig, keys::KeyBindingsConfig, limits::*, ui::UIConfig,
    validation::ConfigValidationError,
};
use serde::Deserialize;
use std::time::Duration;
use validators::EmailConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,

    #[serde(default)]
    ui: UIConfig,
    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    email: EmailConfig,
    #[serde(default)]
    demo: DemoConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let popup_range = MIN_POPUP_PERCENT..=MAX_POPUP_PERCENT;
        for (field, configured) in [
            ("popup_width", self.ui.popup_width()),
            ("popup_height", self.ui.popup_height()),
        ] {
            if !popup_range.contains(&configured) {
                errors.push(ConfigValidationError::PopupSize {
                    field,
                    configured,
                    min_limit: MIN_POPUP_PERCENT,
                    max_limit: MAX_POPUP_PERCENT,
                });
            }
        }

        let timeout = self.email.timeout().as_secs();
        if !(MIN_EMAIL_TIMEOUT_SECS..=MAX_EMAIL_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::EmailTimeout {
                configured: timeout,
                min_limit: MIN_EMAIL_TIMEOUT_SECS,
                max_limit: MAX_EMAIL_TIMEOUT_SECS,
            });
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(10))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(50))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(50))
    }

    // Configuration section accessors
    pub fn ui(&self) -> &UIConfig {
        &self.ui
    }

    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn email(&self) -> &EmailConfig {
        &self.email
    }

    pub fn demo(&self) -> &DemoConfig {
        &self.demo
    }
}
