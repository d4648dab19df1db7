use crate::error::{AppError, AppResult};
use crate::theme::{
    loader::{ThemeLoader, dark_theme},
    types::Theme,
};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

use tuirealm::props::Color;

static GLOBAL_THEME_MANAGER: OnceCell<Mutex<ThemeManager>> = OnceCell::new();

// Used until the global manager is initialized or while it is locked
mod fallback_colors {
    use tuirealm::props::Color;

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Gray;
    pub const SURFACE: Color = Color::Black;
    pub const PRIMARY_ACCENT: Color = Color::Cyan;
    pub const TITLE_ACCENT: Color = Color::LightCyan;
    pub const HEADER_ACCENT: Color = Color::Blue;
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_WARNING: Color = Color::Yellow;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_INFO: Color = Color::Blue;
    pub const SHORTCUT_KEY: Color = Color::LightCyan;
    pub const SHORTCUT_DESCRIPTION: Color = Color::Gray;
    pub const POPUP_TEXT: Color = Color::White;
}

pub struct ThemeManager {
    current_theme: Arc<Theme>,
    loader: ThemeLoader,
}

impl ThemeManager {
    /// Initialize the global theme manager - call this once at app startup.
    ///
    /// A theme that cannot be loaded is replaced by the built-in dark theme and
    /// the load error is returned after the fallback is installed, so callers
    /// can surface it as a warning.
    pub fn init_global(theme_name: &str) -> AppResult<()> {
        let loader = ThemeLoader::new();
        let (theme, load_error) = match loader.load_theme(theme_name) {
            Ok(theme) => (theme, None),
            Err(e) => {
                log::warn!("Theme '{theme_name}' unavailable, using dark theme: {e}");
                (dark_theme(), Some(e))
            }
        };

        let manager = Self {
            current_theme: Arc::new(theme),
            loader,
        };

        GLOBAL_THEME_MANAGER
            .set(Mutex::new(manager))
            .map_err(|_| AppError::Config("Theme manager already initialized".to_string()))?;

        log::info!("Global theme manager initialized");
        match load_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Name of the active theme, if the global manager is initialized
    pub fn current_theme_name() -> Option<String> {
        GLOBAL_THEME_MANAGER.get().and_then(|manager| {
            manager
                .try_lock()
                .ok()
                .map(|m| m.current_theme.metadata.name.clone())
        })
    }

    /// Switch the global manager to another theme
    pub fn switch_global(theme_name: &str) -> AppResult<()> {
        let manager_mutex = GLOBAL_THEME_MANAGER
            .get()
            .ok_or_else(|| AppError::Config("Theme manager not initialized".to_string()))?;
        let mut manager = manager_mutex
            .lock()
            .map_err(|_| AppError::State("Theme manager lock poisoned".to_string()))?;
        manager.switch_theme(theme_name)
    }

    pub fn switch_theme(&mut self, theme_name: &str) -> AppResult<()> {
        let theme = self.loader.load_theme(theme_name)?;
        self.current_theme = Arc::new(theme);
        log::info!("Switched to theme: {theme_name}");
        Ok(())
    }

    fn with_theme_manager<F, R>(f: F, fallback: R) -> R
    where
        F: FnOnce(&Arc<Theme>) -> R,
    {
        match GLOBAL_THEME_MANAGER.get() {
            Some(manager_mutex) => match manager_mutex.try_lock() {
                Ok(manager) => f(&manager.current_theme),
                Err(_) => {
                    log::warn!("Theme manager lock contention, using fallback");
                    fallback
                }
            },
            None => fallback,
        }
    }

    fn get_theme_color<F>(color_getter: F, fallback: Color) -> Color
    where
        F: FnOnce(&Theme) -> Color,
    {
        Self::with_theme_manager(|theme| color_getter(theme), fallback)
    }
}

macro_rules! theme_accessor {
    ($method:ident, $field:ident, $fallback:expr) => {
        impl ThemeManager {
            pub fn $method() -> Color {
                Self::get_theme_color(
                    |theme| theme.colors.hex_to_color(&theme.colors.$field),
                    $fallback,
                )
            }
        }
    };
}

theme_accessor!(text_primary, text_primary, fallback_colors::TEXT_PRIMARY);
theme_accessor!(text_muted, text_muted, fallback_colors::TEXT_MUTED);
theme_accessor!(surface, surface, fallback_colors::SURFACE);
theme_accessor!(
    primary_accent,
    primary_accent,
    fallback_colors::PRIMARY_ACCENT
);
theme_accessor!(title_accent, title_accent, fallback_colors::TITLE_ACCENT);
theme_accessor!(header_accent, header_accent, fallback_colors::HEADER_ACCENT);
theme_accessor!(
    status_success,
    status_success,
    fallback_colors::STATUS_SUCCESS
);
theme_accessor!(
    status_warning,
    status_warning,
    fallback_colors::STATUS_WARNING
);
theme_accessor!(status_error, status_error, fallback_colors::STATUS_ERROR);
theme_accessor!(status_info, status_info, fallback_colors::STATUS_INFO);
theme_accessor!(shortcut_key, shortcut_key, fallback_colors::SHORTCUT_KEY);
theme_accessor!(
    shortcut_description,
    shortcut_description,
    fallback_colors::SHORTCUT_DESCRIPTION
);
theme_accessor!(popup_text, popup_text, fallback_colors::POPUP_TEXT);
