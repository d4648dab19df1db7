//! Email address validation.
//!
//! Syntax is always checked; the DNS deliverability check only runs when
//! [`EmailConfig::check_deliverability`] is enabled. A successful validation
//! produces a [`ValidatedEmail`] carrying the normalized address.

pub mod deliverability;
mod error;
mod syntax;

pub use deliverability::{
    Deliverability, DnsResolver, DomainResolver, LookupError, MxRecord, check_deliverability,
};
pub use error::EmailError;

use crate::validator::Validator;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Options for [`EmailValidator`].
///
/// Deserializes from a table such as `[email]` in the application config,
/// with every key optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    check_deliverability: bool,
    allow_smtputf8: bool,
    allow_quoted_local: bool,
    allow_display_name: bool,
    allow_domain_literal: bool,
    globally_deliverable: bool,
    #[serde(rename = "timeout_secs", deserialize_with = "duration_from_secs")]
    timeout: Duration,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            check_deliverability: false,
            allow_smtputf8: true,
            allow_quoted_local: false,
            allow_display_name: false,
            allow_domain_literal: false,
            globally_deliverable: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EmailConfig {
    /// Whether the domain is looked up in DNS after the syntax check
    pub fn check_deliverability(&self) -> bool {
        self.check_deliverability
    }

    /// Whether internationalized characters are allowed before the @-sign
    pub fn allow_smtputf8(&self) -> bool {
        self.allow_smtputf8
    }

    pub fn allow_quoted_local(&self) -> bool {
        self.allow_quoted_local
    }

    pub fn allow_display_name(&self) -> bool {
        self.allow_display_name
    }

    pub fn allow_domain_literal(&self) -> bool {
        self.allow_domain_literal
    }

    /// Whether the domain must be reachable on the public internet
    pub fn globally_deliverable(&self) -> bool {
        self.globally_deliverable
    }

    /// Time budget for each DNS query
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_check_deliverability(mut self, enabled: bool) -> Self {
        self.check_deliverability = enabled;
        self
    }

    pub fn with_allow_smtputf8(mut self, allowed: bool) -> Self {
        self.allow_smtputf8 = allowed;
        self
    }

    pub fn with_allow_quoted_local(mut self, allowed: bool) -> Self {
        self.allow_quoted_local = allowed;
        self
    }

    pub fn with_allow_display_name(mut self, allowed: bool) -> Self {
        self.allow_display_name = allowed;
        self
    }

    pub fn with_allow_domain_literal(mut self, allowed: bool) -> Self {
        self.allow_domain_literal = allowed;
        self
    }

    pub fn with_globally_deliverable(mut self, required: bool) -> Self {
        self.globally_deliverable = required;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn duration_from_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

/// An address that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmail {
    /// The input exactly as given
    pub original: String,
    /// `local@domain` with the domain lowercased and redundant quoting removed
    pub normalized: String,
    pub local_part: String,
    pub domain: String,
    /// The normalized address when it is pure ASCII
    pub ascii_email: Option<String>,
    /// True when delivery needs the SMTPUTF8 extension
    pub smtputf8: bool,
    pub display_name: Option<String>,
    /// True when the domain is a bracketed IP address
    pub domain_literal: bool,
    /// Set only when the deliverability check ran
    pub deliverability: Option<Deliverability>,
}

/// Validates email addresses, optionally checking that the domain accepts mail
#[derive(Clone, Default)]
pub struct EmailValidator {
    config: EmailConfig,
    resolver: Option<Arc<dyn DomainResolver>>,
    /// Built on the first deliverability check and shared between clones
    system_resolver: Arc<OnceLock<DnsResolver>>,
}

impl fmt::Debug for EmailValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailValidator")
            .field("config", &self.config)
            .field("custom_resolver", &self.resolver.is_some())
            .finish()
    }
}

impl EmailValidator {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            resolver: None,
            system_resolver: Arc::default(),
        }
    }

    /// Uses `resolver` for deliverability checks instead of the system DNS
    pub fn with_resolver(mut self, resolver: Arc<dyn DomainResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    /// Validates `input` and returns the normalized address.
    pub fn normalize(&self, input: &str) -> Result<ValidatedEmail, EmailError> {
        let mut email = syntax::validate_syntax(input, &self.config)?;

        if self.config.check_deliverability() && !email.domain_literal {
            let deliverability = match &self.resolver {
                Some(resolver) => check_deliverability(&email.domain, resolver.as_ref())?,
                None => check_deliverability(&email.domain, self.system_resolver()?)?,
            };
            email.deliverability = Some(deliverability);
        }

        log::trace!("Accepted email address {}", email.normalized);
        Ok(email)
    }

    fn system_resolver(&self) -> Result<&DnsResolver, EmailError> {
        if let Some(resolver) = self.system_resolver.get() {
            return Ok(resolver);
        }
        let resolver = DnsResolver::new(self.config.timeout())
            .map_err(|e| EmailError::DeliverabilityCheck(e.to_string()))?;
        Ok(self.system_resolver.get_or_init(|| resolver))
    }

    pub fn is_email(&self, input: &str) -> bool {
        self.normalize(input).is_ok()
    }
}

impl Validator<str> for EmailValidator {
    type Error = EmailError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        self.normalize(input).map(|_| ())
    }
}
