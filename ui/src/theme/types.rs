use serde::{Deserialize, Serialize};
use tuirealm::props::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    // === Core Text Colors ===
    pub text_primary: String,
    pub text_muted: String,

    // === Layout Colors ===
    pub surface: String,

    // === Accent Colors ===
    pub primary_accent: String,
    pub title_accent: String,
    pub header_accent: String,

    // === Status Colors ===
    pub status_success: String,
    pub status_warning: String,
    pub status_error: String,
    pub status_info: String,

    // === Key Hint Colors ===
    pub shortcut_key: String,
    pub shortcut_description: String,

    // === Popup Colors ===
    pub popup_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub colors: ThemeColors,
}

impl ThemeColors {
    /// Convert a hex color string or a color name to a tuirealm Color
    pub fn hex_to_color(&self, hex: &str) -> Color {
        if hex.is_empty() {
            return Color::Reset;
        }

        match hex.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "reset" => Color::Reset,
            _ => match parse_hex_color(hex) {
                Ok((r, g, b)) => Color::Rgb(r, g, b),
                Err(e) => {
                    log::warn!("Unrecognized theme color '{hex}': {e}");
                    Color::Reset
                }
            },
        }
    }
}

/// Parses `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Invalid hex color format");
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

    Ok((r, g, b))
}
