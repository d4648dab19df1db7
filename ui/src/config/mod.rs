use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub mod app;
pub mod demo;
pub mod keys;
pub mod limits;
pub mod ui;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Prefix of environment variables overriding file values,
/// e.g. `GADGETS_UI__POPUP_WIDTH=80`
pub const ENV_PREFIX: &str = "GADGETS";

/// Configuration file read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Global configuration loading and access
static CONFIG: OnceLock<ConfigLoadResult> = OnceLock::new();

static DEFAULT_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Load configuration from `path` (or `config.toml` in the working directory)
/// and `GADGETS_*` environment variables.
///
/// An explicitly given file must exist; the default file is optional so the
/// application runs on defaults alone.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Load the configuration once, from `path` when given. Later calls keep the
/// first result.
pub fn init_config(path: Option<PathBuf>) -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(path.as_deref()))
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(|| load_config(None))
}

/// The loaded configuration, or built-in defaults when loading failed
pub fn get_config_or_default() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            log::warn!("Using default configuration: {e}");
            DEFAULT_CONFIG.get_or_init(AppConfig::default)
        }
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
