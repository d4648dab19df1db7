//! Domain deliverability checks.
//!
//! A domain is considered deliverable when it publishes MX records, or when it
//! has no MX records but resolves to an address (the implicit MX rule of
//! RFC 5321). Lookups go through [`DomainResolver`] so the decision logic does
//! not depend on network access; [`DnsResolver`] is the production resolver.

use super::error::EmailError;
use std::time::Duration;
use thiserror::Error;
use trust_dns_resolver::Resolver;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;

/// One mail exchanger published for a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }

    /// A "null MX" (RFC 7505) declares that the domain accepts no mail
    pub fn is_null(&self) -> bool {
        self.exchange.is_empty() || self.exchange == "."
    }
}

/// What the deliverability check learned about a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deliverability {
    /// The domain publishes mail exchangers, ordered by preference
    Mx(Vec<MxRecord>),
    /// No MX records, but the domain resolves to an address
    AddressFallback,
    /// The lookup timed out or no nameserver was reachable; the address is
    /// accepted unchecked
    Unknown(String),
}

/// DNS lookup failures, classified by what they mean for deliverability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("the domain name does not exist")]
    NxDomain,
    #[error("no records of the requested type were found")]
    NoRecords,
    #[error("the DNS query timed out")]
    Timeout,
    #[error("no nameservers are available")]
    NoNameservers,
    #[error("{0}")]
    Resolver(String),
}

/// Resolves the DNS records needed to decide deliverability
pub trait DomainResolver: Send + Sync {
    /// MX records of `domain`
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError>;

    /// Whether `domain` has at least one A or AAAA record
    fn has_address(&self, domain: &str) -> Result<bool, LookupError>;
}

/// Decides whether `domain` can receive mail.
pub fn check_deliverability(
    domain: &str,
    resolver: &dyn DomainResolver,
) -> Result<Deliverability, EmailError> {
    log::debug!("Checking deliverability of {domain}");

    match resolver.lookup_mx(domain) {
        Ok(records) => {
            let mut records: Vec<MxRecord> =
                records.into_iter().filter(|r| !r.is_null()).collect();
            if records.is_empty() {
                return Err(EmailError::DomainRejectsEmail(domain.to_string()));
            }
            records.sort_by_key(|r| r.preference);
            Ok(Deliverability::Mx(records))
        }
        Err(LookupError::NoRecords) => match resolver.has_address(domain) {
            Ok(true) => Ok(Deliverability::AddressFallback),
            Ok(false) | Err(LookupError::NoRecords) => {
                Err(EmailError::DomainRejectsEmail(domain.to_string()))
            }
            Err(error) => classify_failure(domain, error),
        },
        Err(error) => classify_failure(domain, error),
    }
}

fn classify_failure(domain: &str, error: LookupError) -> Result<Deliverability, EmailError> {
    match error {
        LookupError::NxDomain => Err(EmailError::DomainNotFound(domain.to_string())),
        LookupError::NoRecords => Err(EmailError::DomainRejectsEmail(domain.to_string())),
        LookupError::Timeout | LookupError::NoNameservers => {
            log::warn!("Deliverability check for {domain} inconclusive ({error}), accepting address");
            Ok(Deliverability::Unknown(error.to_string()))
        }
        LookupError::Resolver(reason) => {
            log::warn!("Deliverability check for {domain} failed: {reason}");
            Err(EmailError::DeliverabilityCheck(reason))
        }
    }
}

/// Blocking resolver backed by the system DNS configuration
pub struct DnsResolver {
    resolver: Resolver,
}

impl DnsResolver {
    /// Builds a resolver that gives up on each query after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        let (config, mut options) =
            trust_dns_resolver::system_conf::read_system_conf().unwrap_or_else(|e| {
                log::warn!("Failed to read system DNS configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            });
        options.timeout = timeout;
        options.attempts = 1;

        let resolver =
            Resolver::new(config, options).map_err(|e| LookupError::Resolver(e.to_string()))?;
        Ok(Self { resolver })
    }
}

impl DomainResolver for DnsResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, LookupError> {
        let lookup = self
            .resolver
            .mx_lookup(fully_qualified(domain))
            .map_err(map_resolve_error)?;

        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
            .collect())
    }

    fn has_address(&self, domain: &str) -> Result<bool, LookupError> {
        let lookup = self
            .resolver
            .lookup_ip(fully_qualified(domain))
            .map_err(map_resolve_error)?;
        Ok(lookup.iter().next().is_some())
    }
}

/// Trailing dot keeps the resolver from appending search domains
fn fully_qualified(domain: &str) -> String {
    format!("{domain}.")
}

fn map_resolve_error(error: ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            LookupError::NxDomain
        }
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        ResolveErrorKind::Timeout => LookupError::Timeout,
        ResolveErrorKind::NoConnections => LookupError::NoNameservers,
        _ => LookupError::Resolver(error.to_string()),
    }
}
