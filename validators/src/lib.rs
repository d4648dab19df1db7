//! # Gadgets Validators
//!
//! String validators for terminal input fields. Every validator classifies a
//! candidate string as acceptable or not and, on rejection, explains why in a
//! sentence that can be shown to the user as-is.
//!
//! ## Modules
//!
//! - [`validator`] - The [`Validator`] capability shared by all checkers
//! - [`outcome`] - [`ValidationOutcome`], the two-state valid/invalid result
//! - [`ip`] - IPv4 and IPv6 address validators
//! - [`email`] - Email address syntax and deliverability validation
//! - [`patterns`] - Numeric format validators behind the numeric input kinds
//! - [`string_validator`] - [`StringValidator`], the closed set of address validators
//! - [`error`] - [`ValidationError`] shared by the string validators
//!
//! ## Example
//!
//! ```no_run
//! use validators::{StringValidator, Validator};
//!
//! let validator = StringValidator::ipv4();
//! assert!(validator.outcome("192.168.0.1").is_valid());
//! assert_eq!(
//!     validator.outcome("256.1.1.1").reason(),
//!     Some("Not an IPv4 address.")
//! );
//! ```

pub mod email;
pub mod error;
pub mod ip;
pub mod outcome;
pub mod patterns;
pub mod string_validator;
pub mod validator;

pub use email::{EmailConfig, EmailError, EmailValidator, ValidatedEmail};
pub use error::ValidationError;
pub use ip::{Ipv4Validator, Ipv6Validator};
pub use outcome::ValidationOutcome;
pub use string_validator::StringValidator;
pub use validator::Validator;
