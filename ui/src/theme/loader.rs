use crate::error::{AppError, AppResult};
use crate::theme::types::{Theme, ThemeColors, ThemeMetadata, parse_hex_color};
use std::{fs, path::PathBuf};

pub const DEFAULT_THEME: &str = "dark";
const BUILTIN_THEMES: [&str; 2] = ["dark", "light"];

pub fn dark_theme() -> Theme {
    Theme {
        metadata: ThemeMetadata {
            name: "dark".to_string(),
            description: "Default dark palette".to_string(),
        },
        colors: ThemeColors {
            text_primary: "#e6e6e6".to_string(),
            text_muted: "#8a8f98".to_string(),
            surface: "#1e2127".to_string(),
            primary_accent: "#61afef".to_string(),
            title_accent: "#56b6c2".to_string(),
            header_accent: "#3b4048".to_string(),
            status_success: "#98c379".to_string(),
            status_warning: "#e5c07b".to_string(),
            status_error: "#e06c75".to_string(),
            status_info: "#61afef".to_string(),
            shortcut_key: "#56b6c2".to_string(),
            shortcut_description: "#8a8f98".to_string(),
            popup_text: "#e6e6e6".to_string(),
        },
    }
}

pub fn light_theme() -> Theme {
    Theme {
        metadata: ThemeMetadata {
            name: "light".to_string(),
            description: "Default light palette".to_string(),
        },
        colors: ThemeColors {
            text_primary: "#24292f".to_string(),
            text_muted: "#6e7781".to_string(),
            surface: "#f6f8fa".to_string(),
            primary_accent: "#0969da".to_string(),
            title_accent: "#8250df".to_string(),
            header_accent: "#d0d7de".to_string(),
            status_success: "#1a7f37".to_string(),
            status_warning: "#9a6700".to_string(),
            status_error: "#cf222e".to_string(),
            status_info: "#0969da".to_string(),
            shortcut_key: "#0969da".to_string(),
            shortcut_description: "#6e7781".to_string(),
            popup_text: "#24292f".to_string(),
        },
    }
}

/// Resolves theme names to palettes: the built-in `dark` and `light`, or a
/// `<name>.toml` file in the user's themes directory
pub struct ThemeLoader {
    themes_dir: Option<PathBuf>,
}

impl ThemeLoader {
    pub fn new() -> Self {
        let themes_dir = dirs::config_dir().map(|mut path| {
            path.push("gadgets");
            path.push("themes");
            path
        });
        Self { themes_dir }
    }

    /// Loader that looks for theme files in `dir`
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: Some(dir.into()),
        }
    }

    pub fn load_theme(&self, theme_name: &str) -> AppResult<Theme> {
        match theme_name {
            "dark" => return Ok(dark_theme()),
            "light" => return Ok(light_theme()),
            _ => {}
        }

        validate_theme_name(theme_name)?;

        let themes_dir = self.themes_dir.as_ref().ok_or_else(|| {
            AppError::Config(format!(
                "Unknown theme '{theme_name}' and no themes directory is available"
            ))
        })?;
        let theme_path = themes_dir.join(format!("{theme_name}.toml"));

        let theme_content = fs::read_to_string(&theme_path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read theme file '{}': {e}",
                theme_path.display()
            ))
        })?;

        let mut theme: Theme = toml::from_str(&theme_content).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse theme file '{}': {e}",
                theme_path.display()
            ))
        })?;

        if theme.metadata.name.is_empty() {
            theme.metadata.name = theme_name.to_string();
        }
        validate_colors(&theme.colors)?;

        log::info!("Loaded theme '{theme_name}' from {}", theme_path.display());
        Ok(theme)
    }

    /// Names of the built-in themes followed by any theme files found on disk
    pub fn available_themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = BUILTIN_THEMES.iter().map(|t| t.to_string()).collect();

        let Some(dir) = self.themes_dir.as_ref() else {
            return themes;
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return themes;
        };

        let mut custom: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("toml"))
            .filter_map(|path| path.file_stem().and_then(|n| n.to_str()).map(String::from))
            .filter(|name| validate_theme_name(name).is_ok() && !themes.contains(name))
            .collect();
        custom.sort();
        themes.extend(custom);
        themes
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_theme_name(name: &str) -> AppResult<()> {
    let valid = !name.is_empty()
        && name.len() <= 50
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "Invalid theme name '{name}': use letters, digits, '-' or '_'"
        )))
    }
}

fn validate_colors(colors: &ThemeColors) -> AppResult<()> {
    let fields = [
        ("text_primary", &colors.text_primary),
        ("text_muted", &colors.text_muted),
        ("surface", &colors.surface),
        ("primary_accent", &colors.primary_accent),
        ("title_accent", &colors.title_accent),
        ("header_accent", &colors.header_accent),
        ("status_success", &colors.status_success),
        ("status_warning", &colors.status_warning),
        ("status_error", &colors.status_error),
        ("status_info", &colors.status_info),
        ("shortcut_key", &colors.shortcut_key),
        ("shortcut_description", &colors.shortcut_description),
        ("popup_text", &colors.popup_text),
    ];

    for (field, value) in fields {
        if value.starts_with('#') && parse_hex_color(value).is_err() {
            return Err(AppError::Config(format!(
                "Theme color '{field}' has an invalid value '{value}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use std::io::Write;

    const OCEAN: &str = r##"
[metadata]
name = "ocean"

[colors]
text_primary = "white"
text_muted = "gray"
surface = "#001f3f"
primary_accent = "#0074d9"
title_accent = "#7fdbff"
header_accent = "#003366"
status_success = "#2ecc40"
status_warning = "#ffdc00"
status_error = "#ff4136"
status_info = "#0074d9"
shortcut_key = "#7fdbff"
shortcut_description = "gray"
popup_text = "white"
"##;

    #[test]
    fn test_builtin_themes() {
        let loader = ThemeLoader { themes_dir: None };
        assert_eq!(assert_ok!(loader.load_theme("dark")).metadata.name, "dark");
        assert_eq!(assert_ok!(loader.load_theme("light")).metadata.name, "light");
        assert_err!(loader.load_theme("solarized"));
    }

    #[test]
    fn test_theme_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("ocean.toml")).unwrap();
        file.write_all(OCEAN.as_bytes()).unwrap();

        let loader = ThemeLoader::with_dir(dir.path());
        let theme = assert_ok!(loader.load_theme("ocean"));
        assert_eq!(theme.colors.surface, "#001f3f");
        assert_eq!(loader.available_themes(), vec!["dark", "light", "ocean"]);
    }

    #[test]
    fn test_invalid_theme_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("broken.toml"),
            OCEAN.replace("#ff4136", "#ff41"),
        )
        .unwrap();
        std::fs::write(dir.path().join("partial.toml"), "[metadata]\nname = \"x\"\n").unwrap();

        let loader = ThemeLoader::with_dir(dir.path());
        let error = assert_err!(loader.load_theme("broken"));
        assert!(error.to_string().contains("status_error"));
        assert_err!(loader.load_theme("partial"));
        assert_err!(loader.load_theme("../escape"));
    }
}
