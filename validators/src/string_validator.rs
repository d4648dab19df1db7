use crate::email::{EmailConfig, EmailValidator};
use crate::error::ValidationError;
use crate::ip::{Ipv4Validator, Ipv6Validator};
use crate::validator::Validator;

/// The address validators an input field can be configured with.
///
/// Input widgets hold a list of these and run them in order, reporting the
/// first failure.
#[derive(Debug, Clone)]
pub enum StringValidator {
    Ipv4(Ipv4Validator),
    Ipv6(Ipv6Validator),
    Email(EmailValidator),
}

impl StringValidator {
    pub fn ipv4() -> Self {
        Self::Ipv4(Ipv4Validator)
    }

    pub fn ipv6() -> Self {
        Self::Ipv6(Ipv6Validator)
    }

    pub fn email(config: EmailConfig) -> Self {
        Self::Email(EmailValidator::new(config))
    }
}

impl From<EmailValidator> for StringValidator {
    fn from(validator: EmailValidator) -> Self {
        Self::Email(validator)
    }
}

impl Validator<str> for StringValidator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match self {
            Self::Ipv4(v) => v.validate(input),
            Self::Ipv6(v) => v.validate(input),
            Self::Email(v) => v.validate(input).map_err(ValidationError::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert!(StringValidator::ipv4().validate("10.0.0.1").is_ok());
        assert_eq!(
            StringValidator::ipv6().validate("10.0.0.1"),
            Err(ValidationError::NotIpv6)
        );
        assert_eq!(
            StringValidator::email(EmailConfig::default())
                .outcome("user@@bad..domain")
                .reason(),
            Some("The email address is not valid. It must have exactly one @-sign.")
        );
    }
}
