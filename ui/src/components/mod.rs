// Core components
pub mod common;
pub mod state;

// Reusable patterns and widgets
pub mod base_popup;
pub mod button;
pub mod input_field;

// Dialogs
pub mod error_popup;
pub mod user_input_popup;
pub mod yes_no_popup;

// Screens and display components
pub mod menu;
pub mod placeholder_screen;
pub mod text_label;

// System components
pub mod global_key_watcher;
