use crate::theme::ThemeManager;
use std::fmt;
use std::str::FromStr;
use tuirealm::ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Visual style of a dialog button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown button variant '{0}', expected one of: default, primary, success, warning, error")]
pub struct UnknownButtonVariant(pub String);

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Success => "success",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Error => "error",
        }
    }

    /// Parse `text`, falling back to `fallback` with a logged warning when the
    /// name is not a known variant
    pub fn parse_or(text: &str, fallback: ButtonVariant) -> ButtonVariant {
        match text.parse() {
            Ok(variant) => variant,
            Err(e) => {
                log::warn!("{e}; using '{fallback}'");
                fallback
            }
        }
    }

    pub fn color(self) -> Color {
        match self {
            ButtonVariant::Default => ThemeManager::text_primary(),
            ButtonVariant::Primary => ThemeManager::primary_accent(),
            ButtonVariant::Success => ThemeManager::status_success(),
            ButtonVariant::Warning => ThemeManager::status_warning(),
            ButtonVariant::Error => ThemeManager::status_error(),
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = UnknownButtonVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(ButtonVariant::Default),
            "primary" => Ok(ButtonVariant::Primary),
            "success" => Ok(ButtonVariant::Success),
            "warning" => Ok(ButtonVariant::Warning),
            "error" => Ok(ButtonVariant::Error),
            _ => Err(UnknownButtonVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labelled button drawn inline as `[ label ]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
}

impl Button {
    pub fn new(label: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }

    /// Styled span; a focused button is drawn reversed
    pub fn span(&self, focused: bool) -> Span<'static> {
        let mut style = Style::default()
            .fg(self.variant.color())
            .add_modifier(Modifier::BOLD);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(self.text(), style)
    }
}
