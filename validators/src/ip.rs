//! IP address validators.
//!
//! Both validators defer to the standard library's address parsers, so the
//! accepted grammar is exactly the platform's: dotted-quad IPv4 with octets
//! in 0-255 and no leading zeros, and IPv6 in full, `::`-compressed or
//! IPv4-mixed notation. Surrounding whitespace and zone identifiers such as
//! `%eth0` are rejected.

use crate::error::ValidationError;
use crate::validator::Validator;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Checks if given string is a valid IPv4 address.
pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// Checks if given string is a valid IPv6 address.
pub fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

/// Accepts strings that are valid IPv4 addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ipv4Validator;

impl Validator<str> for Ipv4Validator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if is_ipv4(input) {
            Ok(())
        } else {
            Err(ValidationError::NotIpv4)
        }
    }
}

/// Accepts strings that are valid IPv6 addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ipv6Validator;

impl Validator<str> for Ipv6Validator {
    type Error = ValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if is_ipv6(input) {
            Ok(())
        } else {
            Err(ValidationError::NotIpv6)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ValidationOutcome;

    #[test]
    fn test_ipv4_accepts_dotted_quads() {
        for candidate in ["0.0.0.0", "127.0.0.1", "192.168.100.254", "255.255.255.255"] {
            assert!(Ipv4Validator.validate(candidate).is_ok(), "{candidate}");
        }
    }

    #[test]
    fn test_ipv4_rejects_malformed() {
        for candidate in [
            "",
            "256.1.1.1",
            "1.2.3",
            "1.2.3.4.5",
            "01.2.3.4",
            " 1.2.3.4",
            "1.2.3.4 ",
            "a.b.c.d",
            "::1",
            "1..2.3",
        ] {
            assert_eq!(
                Ipv4Validator.outcome(candidate),
                ValidationOutcome::Invalid("Not an IPv4 address.".to_string()),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn test_ipv6_forms() {
        for candidate in [
            "::1",
            "::",
            "2001:db8::8a2e:370:7334",
            "2001:0db8:0000:0000:0000:ff00:0042:8329",
            "::ffff:192.0.2.128",
            "fe80::1",
        ] {
            assert!(is_ipv6(candidate), "{candidate}");
        }

        for candidate in ["", "1.2.3.4", "2001:db8:::1", "fe80::1%eth0", "12345::", "g::1"] {
            assert_eq!(
                Ipv6Validator.outcome(candidate).reason(),
                Some("Not an IPv6 address."),
                "{candidate:?}"
            );
        }
    }
}
