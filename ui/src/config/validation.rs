use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid {field}: {configured} (min: {min_limit}, max: {max_limit})")]
    PopupSize {
        field: &'static str,
        configured: u16,
        min_limit: u16,
        max_limit: u16,
    },
    #[error("Invalid email.timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    EmailTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::PopupSize {
                field,
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Popup size out of range!\n\n\
                    Your configured value: {configured}%\n\
                    Valid range: {min_limit} - {max_limit}%\n\n\
                    Please update {field} in config.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::EmailTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Email DNS timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update timeout_secs in the [email] section of config.toml."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level '{configured}'!\n\n\
                    Valid levels: trace, debug, info, warn, error\n\n\
                    Please update level in the [logging] section of config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
