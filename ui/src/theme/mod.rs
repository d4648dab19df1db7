//! # Theme System Module
//!
//! Colors for every dialog come from the global [`ThemeManager`]. Components
//! never hold colors themselves; they ask the manager at render time, so a
//! theme switch takes effect on the next frame.
//!
//! ## Built-in Themes
//!
//! - **dark** - default palette
//! - **light** - palette for light terminals
//!
//! Any other name is looked up as `<config_dir>/gadgets/themes/<name>.toml`
//! with a `[metadata]` table and a `[colors]` table holding every field of
//! [`types::ThemeColors`]. Colors are `#rrggbb` or terminal color names.
//!
//! ## Usage
//!
//! ```no_run
//! use gadgets::theme::ThemeManager;
//!
//! if let Err(e) = ThemeManager::init_global("dark") {
//!     log::warn!("{e}");
//! }
//! let accent = ThemeManager::primary_accent();
//! ```
//!
//! ## Fallbacks
//!
//! - **Missing themes** - the dark theme is installed and the error returned
//! - **Invalid colors** - unrecognized values render as the terminal default
//! - **Uninitialized manager** - accessors return fixed fallback colors

pub mod loader;
pub mod manager;
pub mod types;

pub use loader::ThemeLoader;
pub use manager::ThemeManager;
