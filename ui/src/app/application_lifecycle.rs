//! Application lifecycle management
//!
//! Initialization, main loop and shutdown of the demo application.

use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg};
use crate::config::{self, AppConfig, ConfigLoadResult};
use crate::error::{AppError, ErrorContext, ErrorSeverity};
use crate::theme::ThemeManager;

use log::{debug, error, info};
use std::error::Error as StdError;
use tuirealm::application::PollStrategy;
use tuirealm::terminal::CrosstermTerminalAdapter;
use tuirealm::{AttrValue, Attribute};

/// Problems found during startup that are shown once the interface is up
enum StartupIssue {
    Config { section: &'static str, message: String },
    Theme(AppError),
}

/// Application initialization and lifecycle management
pub struct ApplicationLifecycle;

impl ApplicationLifecycle {
    /// Initialize the application and return the configured model.
    ///
    /// Configuration and theme problems do not stop the application: it starts
    /// on defaults and reports them in a popup.
    pub fn initialize() -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        info!("Starting Gadgets application");

        let mut issues = Vec::new();
        let config = Self::load_configuration(&mut issues);

        if let Err(e) = ThemeManager::init_global(config.ui().theme()) {
            issues.push(StartupIssue::Theme(e));
        }

        let mut model = Self::create_model(config)?;
        Self::report_startup_issues(&model, issues);
        model.update_outside_msg();

        Ok(model)
    }

    fn load_configuration(issues: &mut Vec<StartupIssue>) -> &'static AppConfig {
        match config::get_config() {
            ConfigLoadResult::Success(config) => {
                info!("Configuration loaded and validated successfully");
                config
            }
            ConfigLoadResult::LoadError(message) => {
                error!("{message}");
                issues.push(StartupIssue::Config {
                    section: "file",
                    message: message.clone(),
                });
                config::get_config_or_default()
            }
            ConfigLoadResult::DeserializeError(message) => {
                error!("{message}");
                issues.push(StartupIssue::Config {
                    section: "settings",
                    message: message.clone(),
                });
                config::get_config_or_default()
            }
        }
    }

    fn create_model(
        config: &'static AppConfig,
    ) -> Result<Model<CrosstermTerminalAdapter>, Box<dyn StdError>> {
        match Model::new(config) {
            Ok(model) => {
                info!("Model initialized successfully");
                Ok(model)
            }
            Err(e) => {
                error!("Failed to initialize application model: {e}");
                eprintln!("Critical Error: failed to initialize the terminal interface: {e}");
                Err(e.into())
            }
        }
    }

    fn report_startup_issues(model: &Model<CrosstermTerminalAdapter>, issues: Vec<StartupIssue>) {
        for issue in issues {
            match issue {
                StartupIssue::Config { section, message } => {
                    model.error_reporter.report_config_error(section, message);
                }
                StartupIssue::Theme(e) => {
                    let context = ErrorContext::new("ThemeManager", "init_global")
                        .with_message(&format!("{e}\n\nFalling back to the dark theme."))
                        .with_severity(ErrorSeverity::Warning);
                    model.error_reporter.report(e, context);
                }
            }
        }
    }

    /// Setup terminal for application use
    pub fn setup_terminal(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        debug!("Entering alternate screen");
        model
            .terminal
            .enter_alternate_screen()
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        model
            .terminal
            .enable_raw_mode()
            .map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        Ok(())
    }

    /// Run the main application loop
    pub fn run_application_loop(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Entering main application loop");

        while !model.quit {
            Self::process_single_iteration(model)?;
        }

        Ok(())
    }

    fn process_single_iteration(
        model: &mut Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        model.update_outside_msg();

        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                Self::handle_tick_error(model, err)?;
            }
            Ok(messages) if !messages.is_empty() => {
                Self::process_messages(model, messages);
            }
            _ => {}
        }

        Self::handle_redraw(model);

        Ok(())
    }

    /// Handle tick errors by showing error popup
    fn handle_tick_error(
        model: &mut Model<CrosstermTerminalAdapter>,
        err: tuirealm::ApplicationError,
    ) -> Result<(), Box<dyn StdError>> {
        error!("Application tick error: {err:?}");

        if let Err(e) =
            model.mount_error_popup(&AppError::Component(format!("Application error: {err:?}")))
        {
            error!("Failed to mount error popup: {e}");
            if model
                .app
                .attr(
                    &ComponentId::ResultLabel,
                    Attribute::Text,
                    AttrValue::String(format!("Application error: {err:?}")),
                )
                .is_err()
            {
                return Err(format!("Failed to display error: {err:?}").into());
            }
        }
        model.redraw = true;
        Ok(())
    }

    fn process_messages(model: &mut Model<CrosstermTerminalAdapter>, messages: Vec<Msg>) {
        model.redraw = true;
        for msg in messages.into_iter() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = model.handle_update(msg);
            }
        }
    }

    fn handle_redraw(model: &mut Model<CrosstermTerminalAdapter>) {
        if model.redraw {
            if let Err(e) = model.view() {
                error!("Error during view rendering: {e}");
                if let Err(popup_err) = model.mount_error_popup(&e) {
                    model
                        .error_reporter
                        .report_mount_error("ErrorPopup", "mount", popup_err);
                }
            }
            model.redraw = false;
        }
    }

    /// Properly shutdown the application
    pub fn shutdown_application(
        mut model: Model<CrosstermTerminalAdapter>,
    ) -> Result<(), Box<dyn StdError>> {
        info!("Application shutdown initiated");
        model.shutdown();

        debug!("Leaving alternate screen");
        let _ = model.terminal.leave_alternate_screen();
        let _ = model.terminal.disable_raw_mode();
        let _ = model.terminal.clear_screen();

        info!("Application terminated successfully");
        Ok(())
    }
}
