use crate::email::EmailError;
use crate::patterns::CommonValidationError;
use thiserror::Error;

/// Failure reported by the string validators.
///
/// The display text of every variant is the user-facing reason shown under
/// an input field, so it is always a complete, non-empty sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Not an IPv4 address.")]
    NotIpv4,
    #[error("Not an IPv6 address.")]
    NotIpv6,
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error("{}", .0.user_message())]
    Common(#[from] CommonValidationError),
}

impl ValidationError {
    /// User-facing reason, identical to the display text
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
