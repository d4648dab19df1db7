use crate::theme::loader::DEFAULT_THEME;
use serde::Deserialize;

/// UI-specific configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UIConfig {
    /// Popup width as a percentage of the terminal width (default: 60)
    popup_width: Option<u16>,
    /// Popup height as a percentage of the terminal height (default: 40)
    popup_height: Option<u16>,
    theme: Option<String>,
}

impl UIConfig {
    pub fn popup_width(&self) -> u16 {
        self.popup_width.unwrap_or(60)
    }

    pub fn popup_height(&self) -> u16 {
        self.popup_height.unwrap_or(40)
    }

    pub fn theme(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }
}
