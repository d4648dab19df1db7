use claims::*;
use std::collections::HashMap;
use std::sync::Arc;
use validators::email::{Deliverability, DomainResolver, LookupError, MxRecord};
use validators::{EmailConfig, EmailError, EmailValidator, StringValidator, ValidationOutcome, Validator};

/// In-memory DNS answers keyed by domain
#[derive(Default)]
struct StaticResolver {
    mx: HashMap<String, Result<Vec<MxRecord>, LookupError>>,
    addresses: HashMap<String, Result<bool, LookupError>>,
}

impl StaticResolver {
    fn with_mx(mut self, domain: &str, records: Vec<MxRecord>) -> Self {
        self.mx.insert(domain.to_string(), Ok(records));
        self
    }

    fn with_mx_error(mut self, domain: &str, error: LookupError) -> Self {
        self.mx.insert(domain.to_string(), Err(error));
        self
    }

    fn with_address(mut self, domain: &str, present: bool) -> Self {
        self.addresses.insert(domain.to_string(), Ok(present));
        self
    }
}

impl DomainResolver for StaticResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.mx
            .get(domain)
            .cloned()
            .unwrap_or(Err(LookupError::NxDomain))
    }

    fn has_address(&self, domain: &str) -> Result<bool, LookupError> {
        self.addresses.get(domain).cloned().unwrap_or(Ok(false))
    }
}

fn deliverability_validator(resolver: StaticResolver) -> EmailValidator {
    EmailValidator::new(EmailConfig::default().with_check_deliverability(true))
        .with_resolver(Arc::new(resolver))
}

#[test]
fn test_syntax_only_examples() {
    let validator = StringValidator::email(EmailConfig::default());

    assert_eq!(validator.outcome("user@example.com"), ValidationOutcome::Valid);

    let reason = validator.outcome("not-an-email");
    assert!(reason.is_invalid());
    assert!(!reason.reason().unwrap_or_default().is_empty());

    let reason = validator.outcome("user@@bad..domain");
    assert_some_eq!(
        reason.reason(),
        "The email address is not valid. It must have exactly one @-sign."
    );
}

#[test]
fn test_same_input_same_outcome() {
    let validator = EmailValidator::default();
    for candidate in ["user@example.com", "a..b@example.com", "", "x@y"] {
        assert_eq!(validator.outcome(candidate), validator.outcome(candidate));
    }
}

#[test]
fn test_normalization() {
    let validator = EmailValidator::default();
    let email = assert_ok!(validator.normalize("Jane.Doe@EXAMPLE.org"));

    assert_eq!(email.normalized, "Jane.Doe@example.org");
    assert_eq!(email.local_part, "Jane.Doe");
    assert_eq!(email.domain, "example.org");
    assert_some_eq!(email.ascii_email.as_deref(), "Jane.Doe@example.org");
    assert!(!email.smtputf8);
    assert_none!(email.deliverability);
}

#[test]
fn test_deliverable_domain() {
    let resolver = StaticResolver::default().with_mx(
        "example.com",
        vec![MxRecord::new(10, "mx1.example.com."), MxRecord::new(5, "mx0.example.com.")],
    );
    let email = assert_ok!(deliverability_validator(resolver).normalize("user@example.com"));

    match assert_some!(email.deliverability) {
        Deliverability::Mx(records) => {
            assert_eq!(records[0].exchange, "mx0.example.com.");
            assert_eq!(records.len(), 2);
        }
        other => panic!("Expected MX records, got {other:?}"),
    }
}

#[test]
fn test_address_fallback_is_deliverable() {
    let resolver = StaticResolver::default()
        .with_mx_error("example.net", LookupError::NoRecords)
        .with_address("example.net", true);

    assert_ok!(deliverability_validator(resolver).validate("user@example.net"));
}

#[test]
fn test_undeliverable_domains() {
    let resolver = StaticResolver::default()
        .with_mx("nomail.example.com", vec![MxRecord::new(0, ".")])
        .with_mx_error("bare.example.com", LookupError::NoRecords);
    let validator = deliverability_validator(resolver);

    assert_err_eq!(
        validator.validate("user@nomail.example.com"),
        EmailError::DomainRejectsEmail("nomail.example.com".to_string())
    );
    assert_err_eq!(
        validator.validate("user@bare.example.com"),
        EmailError::DomainRejectsEmail("bare.example.com".to_string())
    );
    assert_some_eq!(
        validator.outcome("user@missing.example.org").reason(),
        "The domain name missing.example.org does not exist."
    );
}

#[test]
fn test_timeout_accepts_address() {
    let resolver =
        StaticResolver::default().with_mx_error("slow.example.com", LookupError::Timeout);
    let email = assert_ok!(deliverability_validator(resolver).normalize("user@slow.example.com"));

    assert_matches!(email.deliverability, Some(Deliverability::Unknown(_)));
}

#[test]
fn test_unreachable_nameservers_accept_address() {
    let resolver =
        StaticResolver::default().with_mx_error("example.com", LookupError::NoNameservers);
    let email = assert_ok!(deliverability_validator(resolver).normalize("user@example.com"));

    assert_matches!(email.deliverability, Some(Deliverability::Unknown(_)));
}

#[test]
fn test_resolver_failure_is_reported() {
    let resolver = StaticResolver::default()
        .with_mx_error("example.com", LookupError::Resolver("malformed response".to_string()));
    let outcome = deliverability_validator(resolver).outcome("user@example.com");

    assert_some_eq!(
        outcome.reason(),
        "There was an error while checking if the domain name in the email address is deliverable: malformed response"
    );
}
