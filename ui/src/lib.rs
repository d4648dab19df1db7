//! # Gadgets UI Library
//!
//! Reusable terminal dialogs built on tui-realm, with input fields checked by
//! the `validators` crate, and the demo application that shows them.
//!
//! ## Features
//!
//! - Yes/no confirmation popup with configurable labels, styles and keys
//! - Text prompt with placeholders, length limits, password masking, numeric
//!   input kinds and address validators
//! - Placeholder screen for features that do not exist yet
//! - Built-in and file-based themes
//! - Layered configuration (file, environment, command line)
//!
//! ## Modules
//!
//! - [`app`] - Demo application logic and component orchestration
//! - [`components`] - Dialogs and the widgets they are built from
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging setup
//! - [`theme`] - Theme management and styling
//! - [`utils`] - Application name and version

pub mod app;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod theme;
pub mod utils;

pub use error::AppError;

pub use components::common::Msg;
