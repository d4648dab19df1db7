use gadgets::error::{ErrorContext, ErrorReporter, ErrorSeverity};
use gadgets::{AppError, components::common::Msg};
/// Integration helpers for error handling testing patterns
use std::sync::mpsc::Sender;

/// Quick helper for reporting errors the way the application components do
pub fn report_error_simple(tx: &Sender<Msg>, error: AppError, component: &str, operation: &str) {
    let reporter = ErrorReporter::new(tx.clone());
    reporter.report_simple(error, component, operation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadgets::components::common::{Msg, PopupActivityMsg};
    use std::sync::mpsc;

    #[test]
    fn test_report_error_simple() {
        let (tx, rx) = mpsc::channel();
        let error = AppError::Config("test error".to_string());

        report_error_simple(&tx, error, "TestComponent", "test_operation");

        let received = rx.recv().unwrap();
        match received {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Config(text))) => {
                assert!(text.starts_with("Configuration Error"));
                assert!(text.contains("test error"));
            }
            other => panic!("Expected PopupActivity ShowError message, got {other:?}"),
        }
    }

    #[test]
    fn test_warning_severity_shows_warning_popup() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        let context = ErrorContext::new("ThemeManager", "init_global")
            .with_message("Theme 'neon' not found")
            .with_suggestion("Pick one of the available themes")
            .with_severity(ErrorSeverity::Warning);
        reporter.report(AppError::Config("missing theme".to_string()), context);

        match rx.recv().unwrap() {
            Msg::PopupActivity(PopupActivityMsg::ShowWarning(text)) => {
                assert!(text.starts_with("Theme 'neon' not found"));
                assert!(text.ends_with("Suggestion: Pick one of the available themes"));
            }
            other => panic!("Expected PopupActivity ShowWarning message, got {other:?}"),
        }
    }

    #[test]
    fn test_mount_error_keeps_component_category() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report_mount_error("YesNoPopup", "mount", "already mounted");

        match rx.recv().unwrap() {
            Msg::PopupActivity(PopupActivityMsg::ShowError(AppError::Component(text))) => {
                assert!(text.contains("Failed to mount YesNoPopup: already mounted"));
            }
            other => panic!("Expected component error popup, got {other:?}"),
        }
    }

    #[test]
    fn test_report_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = mpsc::channel::<Msg>();
        drop(rx);

        report_error_simple(
            &tx,
            AppError::State("no popup open".to_string()),
            "Model",
            "close_popup",
        );
    }
}
