use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,
    key_back: Option<char>,

    // Confirmation keys
    key_confirm_yes: Option<char>,
    key_confirm_no: Option<char>,
}

impl KeyBindingsConfig {
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn back(&self) -> char {
        self.key_back.unwrap_or('b')
    }

    pub fn confirm_yes(&self) -> char {
        self.key_confirm_yes.unwrap_or('y')
    }

    pub fn confirm_no(&self) -> char {
        self.key_confirm_no.unwrap_or('n')
    }
}
