//! # Application Module
//!
//! The demo application that exercises every dialog. It follows the
//! model-view-update architecture:
//! - **Model** - the tuirealm `Application`, the current screen and the open dialog
//! - **View** - layout of the screen with any popup centered above it
//! - **Update** - message handling and state transitions
//!
//! ## Usage
//!
//! ```no_run
//! use gadgets::app::application_lifecycle::ApplicationLifecycle;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = ApplicationLifecycle::initialize()?;
//!     ApplicationLifecycle::setup_terminal(&mut model)?;
//!     ApplicationLifecycle::run_application_loop(&mut model)?;
//!     ApplicationLifecycle::shutdown_application(model)?;
//!     Ok(())
//! }
//! ```

/// Application lifecycle management - startup, shutdown, and main loop
pub mod application_lifecycle;
/// Menu entries, prompt options and result texts of the demo
pub mod demo;
/// Core application model and state structures
pub mod model;
/// Message processing and state update logic
pub mod update;
/// UI rendering and view composition
pub mod view;
