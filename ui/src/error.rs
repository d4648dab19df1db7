use crate::components::common::{Msg, PopupActivityMsg};
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error types for the gadgets terminal interface.
///
/// Every variant carries a human-readable message. The dialogs never fail on
/// bad user input (that is reported as a validation reason under the input
/// field); these errors cover the plumbing around them.
///
/// # Error Categories
///
/// - [`Component`](AppError::Component) - mounting, focusing or rendering a component failed
/// - [`State`](AppError::State) - the model reached a state it cannot handle
/// - [`Config`](AppError::Config) - configuration or theme files could not be loaded
///
/// # Examples
///
/// ```no_run
/// use gadgets::error::{AppError, AppResult};
///
/// fn popup_width(configured: u16) -> AppResult<u16> {
///     if configured < 20 {
///         return Err(AppError::Config(format!("popup_width {configured} is too small")));
///     }
///     Ok(configured)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// UI component lifecycle and rendering errors.
    ///
    /// These should not disrupt the application flow; they are logged and
    /// shown in an error popup.
    Component(String),

    /// Application state management issues, such as a popup result arriving
    /// when no popup is open.
    State(String),

    /// Configuration and theme loading errors.
    Config(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning severity - show warning popup and log
    Warning,
    /// High severity - show error popup and log
    Error,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Create new error context with component and operation.
    /// Uses a generic message; call `.with_message()` for a specific one.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("An error occurred in {component}. Please try again."),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Logs errors with context and forwards them to the UI as popups
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report a simple error with basic context
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        let context =
            ErrorContext::new(component, operation).with_technical_details(&error.to_string());
        self.report(error, context);
    }

    /// Report component mounting/unmounting errors
    pub fn report_mount_error(&self, component: &str, operation: &str, error: impl Display) {
        let app_error = AppError::Component(format!("Failed to {operation} {component}: {error}"));
        self.report_simple(app_error, component, operation);
    }

    /// Report configuration errors with a suggestion
    pub fn report_config_error(&self, section: &str, error: impl Display) {
        let context = ErrorContext::new("Configuration", "load_config")
            .with_message(&format!("Invalid [{section}] configuration"))
            .with_technical_details(&error.to_string())
            .with_suggestion("Check your config.toml and restart the application");

        self.report(AppError::Config(error.to_string()), context);
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let details = Self::format_additional_context(&context);
        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} ({error}){details}",
                    context.component,
                    context.operation,
                    context.user_message
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} ({error}){details}",
                    context.component,
                    context.operation,
                    context.user_message
                );
            }
        }

        let popup_msg = match context.severity {
            ErrorSeverity::Warning => {
                PopupActivityMsg::ShowWarning(Self::format_user_message(&context))
            }
            ErrorSeverity::Error => {
                PopupActivityMsg::ShowError(Self::create_formatted_error(&error, &context))
            }
        };
        if let Err(e) = self.tx.send(Msg::PopupActivity(popup_msg)) {
            log::error!("Failed to send error popup message: {e}");
        }
    }

    fn format_additional_context(context: &ErrorContext) -> String {
        let mut parts = Vec::new();
        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!(" | {}", parts.join(" | "))
        }
    }

    fn format_user_message(context: &ErrorContext) -> String {
        let mut message = context.user_message.clone();
        if let Some(ref suggestion) = context.suggestion {
            message.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }
        message
    }

    /// Rebuilds `error` with a title, the user message and the suggestion
    fn create_formatted_error(error: &AppError, context: &ErrorContext) -> AppError {
        let mut formatted = Self::error_title(error).to_string();
        formatted.push_str(&format!("\n\n{}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted.push_str(&format!("\n\nDetails: {technical}"));
        }
        if let Some(ref suggestion) = context.suggestion {
            formatted.push_str(&format!("\n\nSuggestion: {suggestion}"));
        }

        match error {
            AppError::Component(_) => AppError::Component(formatted),
            AppError::State(_) => AppError::State(formatted),
            AppError::Config(_) => AppError::Config(formatted),
        }
    }

    fn error_title(error: &AppError) -> &'static str {
        match error {
            AppError::Component(_) => "Component Error",
            AppError::State(_) => "Application State Error",
            AppError::Config(_) => "Configuration Error",
        }
    }
}

/// Last-resort handler used when an error popup cannot be shown
pub fn handle_error(error: AppError) {
    log::error!("Unhandled application error: {error}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_error_context_creation() {
        let context = ErrorContext::new("TestComponent", "test_operation");
        assert_eq!(context.component, "TestComponent");
        assert_eq!(context.operation, "test_operation");
        assert_eq!(
            context.user_message,
            "An error occurred in TestComponent. Please try again."
        );
        assert_eq!(context.severity, ErrorSeverity::Error);
    }

    #[test]
    fn test_report_sends_formatted_error() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_config_error("ui", "popup_width must be between 20 and 100");

        match rx.recv().unwrap() {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(message))) => {
                assert!(message.starts_with("Configuration Error"));
                assert!(message.contains("Invalid [ui] configuration"));
                assert!(message.contains("Suggestion: Check your config.toml"));
            }
            other => panic!("Expected a configuration error popup, got {other:?}"),
        }
    }

    #[test]
    fn test_state_error_keeps_category() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_simple(
            AppError::State("no popup is open".to_string()),
            "Model",
            "close_popup",
        );

        match rx.recv().unwrap() {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::State(message))) => {
                assert!(message.starts_with("Application State Error"));
                assert!(message.contains("Details: State Error: no popup is open"));
            }
            other => panic!("Expected a state error popup, got {other:?}"),
        }
    }
}
