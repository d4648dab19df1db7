use crate::components::button::ButtonVariant;
use serde::Deserialize;

/// Button styling used by the demo application's dialogs.
///
/// Values are variant names (`default`, `primary`, `success`, `warning`,
/// `error`). Unknown names fall back to the per-field default with a warning.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DemoConfig {
    /// Confirm button of the quit confirmation (default: error)
    yes_variant: Option<String>,
    /// Cancel button of the quit confirmation (default: primary)
    no_variant: Option<String>,
    /// Submit button of the input prompts (default: primary)
    button_variant: Option<String>,
}

fn variant_or(value: Option<&str>, fallback: ButtonVariant) -> ButtonVariant {
    value.map_or(fallback, |v| ButtonVariant::parse_or(v, fallback))
}

impl DemoConfig {
    pub fn yes_variant(&self) -> ButtonVariant {
        variant_or(self.yes_variant.as_deref(), ButtonVariant::Error)
    }

    pub fn no_variant(&self) -> ButtonVariant {
        variant_or(self.no_variant.as_deref(), ButtonVariant::Primary)
    }

    pub fn button_variant(&self) -> ButtonVariant {
        variant_or(self.button_variant.as_deref(), ButtonVariant::Primary)
    }
}
