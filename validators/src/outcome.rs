use serde::Serialize;
use std::fmt::{self, Display};

/// Reason used when an invalid outcome is built from blank text.
pub const GENERIC_REASON: &str = "Invalid value.";

/// Result of validating one candidate string.
///
/// Exactly one state holds. An `Invalid` outcome always carries a non-empty
/// reason; use [`ValidationOutcome::invalid`] to build one so blank reasons are
/// replaced by [`GENERIC_REASON`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self::Valid
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            Self::Invalid(GENERIC_REASON.to_string())
        } else {
            Self::Invalid(reason)
        }
    }

    pub fn from_result<E: Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Failure reason, `None` when valid
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), String> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(reason) => Err(reason),
        }
    }
}

impl Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid(reason) => write!(f, "invalid: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_reason_is_replaced() {
        assert_eq!(
            ValidationOutcome::invalid("   "),
            ValidationOutcome::Invalid(GENERIC_REASON.to_string())
        );
        assert_eq!(
            ValidationOutcome::invalid("").reason(),
            Some(GENERIC_REASON)
        );
    }

    #[test]
    fn test_from_result() {
        let ok = ValidationOutcome::from_result(Ok::<(), String>(()));
        assert!(ok.is_valid());
        assert_eq!(ok.reason(), None);

        let err = ValidationOutcome::from_result(Err::<(), _>("Not an IPv4 address."));
        assert!(err.is_invalid());
        assert_eq!(err.reason(), Some("Not an IPv4 address."));
        assert_eq!(err.into_result(), Err("Not an IPv4 address.".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationOutcome::invalid("bad").to_string(), "invalid: bad");
        assert_eq!(ValidationOutcome::valid().to_string(), "valid");
    }
}
