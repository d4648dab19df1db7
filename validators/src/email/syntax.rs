//! Address syntax rules.
//!
//! The checks apply the RFC 5321/5322 dot-atom grammar with the practical
//! restrictions mail providers enforce: no quoted local parts or bracketed
//! address literals unless explicitly allowed, a period in the domain, and no
//! special-use domains when the address must be deliverable on the internet.

use super::error::EmailError;
use super::{EmailConfig, ValidatedEmail};
use std::net::{Ipv4Addr, Ipv6Addr};
use unicode_general_category::{GeneralCategory, get_general_category};

const LOCAL_PART_MAX_LENGTH: usize = 64;
const DOMAIN_MAX_LENGTH: usize = 253;
const LABEL_MAX_LENGTH: usize = 63;
const EMAIL_MAX_LENGTH: usize = 254;

/// Printable ASCII allowed in an unquoted local part besides letters and digits
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Domains reserved for special use that can never receive internet mail.
/// The documentation domains (`example`, `example.com`, ...) are left out so
/// they stay usable in tests and samples.
const SPECIAL_USE_DOMAINS: &[&str] = &["arpa", "invalid", "local", "localhost", "onion", "test"];

pub(super) fn validate_syntax(
    input: &str,
    config: &EmailConfig,
) -> Result<ValidatedEmail, EmailError> {
    let (display_name, address) = match strip_display_name(input) {
        Some((name, address)) => {
            if !config.allow_display_name() {
                return Err(EmailError::DisplayNameNotAllowed);
            }
            (Some(name), address)
        }
        None => (None, input),
    };

    let (local, domain) = split_at_sign(address)?;
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }

    let local_part = validate_local_part(local, config)?;
    let (domain, domain_literal) = if domain.starts_with('[') && domain.ends_with(']') {
        (validate_domain_literal(domain, config)?, true)
    } else {
        (validate_domain(domain, config)?, false)
    };

    let normalized = format!("{local_part}@{domain}");
    if normalized.len() > EMAIL_MAX_LENGTH {
        return Err(EmailError::AddressTooLong(
            normalized.len() - EMAIL_MAX_LENGTH,
        ));
    }

    Ok(ValidatedEmail {
        original: input.to_string(),
        ascii_email: normalized.is_ascii().then(|| normalized.clone()),
        smtputf8: !local_part.is_ascii(),
        normalized,
        local_part,
        domain,
        display_name,
        domain_literal,
        deliverability: None,
    })
}

/// Splits `Display Name <address>` into its name and address
fn strip_display_name(input: &str) -> Option<(String, &str)> {
    let trimmed = input.trim_end();
    let inner_end = trimmed.strip_suffix('>')?;
    let open = inner_end.rfind('<')?;
    let name = inner_end[..open].trim();
    let name = name
        .strip_prefix('"')
        .and_then(|n| n.strip_suffix('"'))
        .unwrap_or(name);
    Some((name.to_string(), &inner_end[open + 1..]))
}

/// Splits the address at its single unquoted `@`-sign
fn split_at_sign(address: &str) -> Result<(&str, &str), EmailError> {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut at_positions = Vec::new();

    for (index, c) in address.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' if index == 0 => in_quotes = true,
            '"' if in_quotes => in_quotes = false,
            '@' if !in_quotes => at_positions.push(index),
            _ => {}
        }
    }

    match at_positions.as_slice() {
        [index] => Ok((&address[..*index], &address[*index + 1..])),
        _ => Err(EmailError::AtSignCount),
    }
}

fn is_atext(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || ATEXT_SPECIALS.contains(c)
    } else {
        !c.is_control() && !c.is_whitespace()
    }
}

/// Invisible, private-use and unassigned characters render unpredictably
/// and are refused everywhere in an address
fn is_unsafe(c: char) -> bool {
    !c.is_ascii()
        && matches!(
            get_general_category(c),
            GeneralCategory::Format
                | GeneralCategory::PrivateUse
                | GeneralCategory::Surrogate
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Unassigned
        )
}

fn check_unsafe_characters(text: &str) -> Result<(), EmailError> {
    let unsafe_chars = describe_characters(text.chars().filter(|&c| is_unsafe(c)));
    if unsafe_chars.is_empty() {
        Ok(())
    } else {
        Err(EmailError::UnsafeCharacters(unsafe_chars))
    }
}

fn is_dot_atom(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with('.')
        && !text.ends_with('.')
        && !text.contains("..")
        && text.chars().all(|c| c == '.' || is_atext(c))
}

fn validate_local_part(local: &str, config: &EmailConfig) -> Result<String, EmailError> {
    if local.len() > 1 && local.starts_with('"') && local.ends_with('"') {
        return validate_quoted_local_part(local, config);
    }

    if local.starts_with('.') {
        return Err(EmailError::LeadingPeriod);
    }
    if local.ends_with('.') {
        return Err(EmailError::PeriodBeforeAt);
    }
    if local.contains("..") {
        return Err(EmailError::ConsecutivePeriods);
    }

    let invalid = local.chars().filter(|&c| c != '.' && !is_atext(c));
    let invalid = describe_characters(invalid);
    if !invalid.is_empty() {
        return Err(EmailError::InvalidLocalCharacters(invalid));
    }

    check_internationalized(local, config)?;
    check_unsafe_characters(local)?;
    check_local_length(local)?;
    Ok(local.to_string())
}

fn validate_quoted_local_part(local: &str, config: &EmailConfig) -> Result<String, EmailError> {
    if !config.allow_quoted_local() {
        return Err(EmailError::QuotedLocalNotAllowed);
    }

    let inner = &local[1..local.len() - 1];
    let mut unescaped = String::with_capacity(inner.len());
    let mut invalid = Vec::new();
    let mut escaped = false;

    for c in inner.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
            continue;
        } else if c == '"' {
            invalid.push(c);
        }
        if c.is_control() {
            invalid.push(c);
        }
        unescaped.push(c);
    }
    if escaped {
        invalid.push('\\');
    }

    let invalid = describe_characters(invalid);
    if !invalid.is_empty() {
        return Err(EmailError::InvalidQuotedCharacters(invalid));
    }

    check_internationalized(inner, config)?;
    check_unsafe_characters(&unescaped)?;
    check_local_length(local)?;

    // Quotes that protect nothing are dropped, e.g. "john"@example.com.
    if is_dot_atom(&unescaped) {
        Ok(unescaped)
    } else {
        Ok(local.to_string())
    }
}

fn check_internationalized(local: &str, config: &EmailConfig) -> Result<(), EmailError> {
    if !config.allow_smtputf8() && !local.is_ascii() {
        let non_ascii = describe_characters(local.chars().filter(|c| !c.is_ascii()));
        return Err(EmailError::InternationalizedLocalPart(non_ascii));
    }
    Ok(())
}

/// The local part limit counts characters; only the whole address is
/// limited in octets
fn check_local_length(local: &str) -> Result<(), EmailError> {
    let length = local.chars().count();
    if length > LOCAL_PART_MAX_LENGTH {
        return Err(EmailError::LocalPartTooLong(length - LOCAL_PART_MAX_LENGTH));
    }
    Ok(())
}

fn validate_domain(domain: &str, config: &EmailConfig) -> Result<String, EmailError> {
    if domain.starts_with('.') {
        return Err(EmailError::PeriodAfterAt);
    }
    if domain.ends_with('.') {
        return Err(EmailError::TrailingPeriod);
    }
    if domain.contains("..") {
        return Err(EmailError::ConsecutivePeriods);
    }

    check_unsafe_characters(domain)?;
    let domain = domain.to_lowercase();

    // Non-ASCII letters are internationalized domain names, which do not
    // need SMTPUTF8 because they have an ASCII (IDNA) form
    let invalid = domain
        .chars()
        .filter(|&c| !(c.is_alphanumeric() || c == '-' || c == '.'));
    let invalid = describe_characters(invalid);
    if !invalid.is_empty() {
        return Err(EmailError::InvalidDomainCharacters(invalid));
    }

    if domain.starts_with('-') {
        return Err(EmailError::HyphenAfterAt);
    }
    if domain.ends_with('-') {
        return Err(EmailError::TrailingHyphen);
    }
    if domain.contains(".-") || domain.contains("-.") {
        return Err(EmailError::PeriodNextToHyphen);
    }

    if let Some(label) = domain.split('.').find(|l| l.len() > LABEL_MAX_LENGTH) {
        return Err(EmailError::LabelTooLong(label.len() - LABEL_MAX_LENGTH));
    }
    if domain.len() > DOMAIN_MAX_LENGTH {
        return Err(EmailError::DomainTooLong);
    }

    if config.globally_deliverable() {
        let Some((_, top_level)) = domain.rsplit_once('.') else {
            return Err(EmailError::MissingPeriod);
        };
        if top_level.chars().all(|c| c.is_ascii_digit()) {
            return Err(EmailError::NumericTopLevelDomain);
        }
        if is_special_use(&domain) {
            return Err(EmailError::SpecialUseDomain);
        }
    }

    Ok(domain)
}

fn is_special_use(domain: &str) -> bool {
    SPECIAL_USE_DOMAINS.iter().any(|reserved| {
        domain == *reserved
            || domain
                .strip_suffix(reserved)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

fn validate_domain_literal(domain: &str, config: &EmailConfig) -> Result<String, EmailError> {
    if !config.allow_domain_literal() {
        return Err(EmailError::DomainLiteralNotAllowed);
    }

    let inner = &domain[1..domain.len() - 1];
    if let Some(address) = inner.strip_prefix("IPv6:") {
        return address
            .parse::<Ipv6Addr>()
            .map(|ip| format!("[IPv6:{ip}]"))
            .map_err(|_| EmailError::InvalidDomainLiteral("Not an IPv6 address.".to_string()));
    }

    inner
        .parse::<Ipv4Addr>()
        .map(|ip| format!("[{ip}]"))
        .map_err(|_| {
            EmailError::InvalidDomainLiteral(
                "It is not an IPv4 address or is missing an address literal tag.".to_string(),
            )
        })
}

/// Lists each distinct character once, in order of first appearance
fn describe_characters(chars: impl IntoIterator<Item = char>) -> String {
    let mut seen: Vec<char> = Vec::new();
    for c in chars {
        if !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen.into_iter()
        .map(describe_character)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_character(c: char) -> String {
    match c {
        ' ' => "SPACE".to_string(),
        '\t' => "TAB".to_string(),
        '\u{a0}' => "NO-BREAK SPACE".to_string(),
        c if c.is_control() || c.is_whitespace() || is_unsafe(c) => {
            format!("U+{:04X}", c as u32)
        }
        c => format!("'{c}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str) -> Result<ValidatedEmail, EmailError> {
        validate_syntax(input, &EmailConfig::default())
    }

    #[test]
    fn test_simple_address() {
        let email = check("User.Name+tag@Example.COM").unwrap();
        assert_eq!(email.local_part, "User.Name+tag");
        assert_eq!(email.domain, "example.com");
        assert_eq!(email.normalized, "User.Name+tag@example.com");
        assert_eq!(email.ascii_email.as_deref(), Some("User.Name+tag@example.com"));
        assert!(!email.smtputf8);
        assert!(email.deliverability.is_none());
    }

    #[test]
    fn test_at_sign_count() {
        assert_eq!(check("not-an-email"), Err(EmailError::AtSignCount));
        assert_eq!(check("user@@bad..domain"), Err(EmailError::AtSignCount));
        assert_eq!(check("a@b@example.com"), Err(EmailError::AtSignCount));
        assert_eq!(check(""), Err(EmailError::AtSignCount));
    }

    #[test]
    fn test_empty_parts() {
        assert_eq!(check("@example.com"), Err(EmailError::EmptyLocalPart));
        assert_eq!(check("user@"), Err(EmailError::EmptyDomain));
    }

    #[test]
    fn test_local_part_periods() {
        assert_eq!(check(".user@example.com"), Err(EmailError::LeadingPeriod));
        assert_eq!(check("user.@example.com"), Err(EmailError::PeriodBeforeAt));
        assert_eq!(check("us..er@example.com"), Err(EmailError::ConsecutivePeriods));
    }

    #[test]
    fn test_invalid_local_characters() {
        assert_eq!(
            check("john doe@example.com"),
            Err(EmailError::InvalidLocalCharacters("SPACE".to_string()))
        );
        assert_eq!(
            check("a,b(c),d@example.com"),
            Err(EmailError::InvalidLocalCharacters("',', '(', ')'".to_string()))
        );
    }

    #[test]
    fn test_internationalized_local_part() {
        let email = check("josé@example.com").unwrap();
        assert!(email.smtputf8);
        assert!(email.ascii_email.is_none());

        let strict = EmailConfig::default().with_allow_smtputf8(false);
        assert_eq!(
            validate_syntax("josé@example.com", &strict),
            Err(EmailError::InternationalizedLocalPart("'é'".to_string()))
        );
    }

    #[test]
    fn test_quoted_local_part() {
        assert_eq!(
            check("\"john doe\"@example.com"),
            Err(EmailError::QuotedLocalNotAllowed)
        );

        let config = EmailConfig::default().with_allow_quoted_local(true);
        let email = validate_syntax("\"john doe\"@example.com", &config).unwrap();
        assert_eq!(email.local_part, "\"john doe\"");

        let email = validate_syntax("\"john\"@example.com", &config).unwrap();
        assert_eq!(email.local_part, "john");

        let email = validate_syntax("\"at@sign\"@example.com", &config).unwrap();
        assert_eq!(email.domain, "example.com");
    }

    #[test]
    fn test_local_part_length() {
        let local = "a".repeat(65);
        assert_eq!(
            check(&format!("{local}@example.com")),
            Err(EmailError::LocalPartTooLong(1))
        );
        assert!(check(&format!("{}@example.com", "a".repeat(64))).is_ok());

        let accented = "é".repeat(40);
        assert!(accented.len() > LOCAL_PART_MAX_LENGTH);
        assert!(check(&format!("{accented}@example.com")).is_ok());
        assert_eq!(
            check(&format!("{}@example.com", "é".repeat(66))),
            Err(EmailError::LocalPartTooLong(2))
        );
    }

    #[test]
    fn test_unsafe_characters() {
        assert_eq!(
            check("us\u{200b}er@example.com"),
            Err(EmailError::UnsafeCharacters("U+200B".to_string()))
        );
        assert_eq!(
            check("\u{feff}user@example.com"),
            Err(EmailError::UnsafeCharacters("U+FEFF".to_string()))
        );
        assert_eq!(
            check("user@exam\u{e000}ple.com"),
            Err(EmailError::UnsafeCharacters("U+E000".to_string()))
        );
        assert_eq!(
            check("user@example.com\u{2028}"),
            Err(EmailError::UnsafeCharacters("U+2028".to_string()))
        );
    }

    #[test]
    fn test_internationalized_domain() {
        let email = check("user@bücher.de").unwrap();
        assert_eq!(email.domain, "bücher.de");
        assert!(!email.smtputf8);

        let strict = EmailConfig::default().with_allow_smtputf8(false);
        assert!(validate_syntax("user@bücher.de", &strict).is_ok());
    }

    #[test]
    fn test_domain_rules() {
        assert_eq!(check("user@.example.com"), Err(EmailError::PeriodAfterAt));
        assert_eq!(check("user@example.com."), Err(EmailError::TrailingPeriod));
        assert_eq!(check("user@bad..domain"), Err(EmailError::ConsecutivePeriods));
        assert_eq!(check("user@-example.com"), Err(EmailError::HyphenAfterAt));
        assert_eq!(check("user@example.com-"), Err(EmailError::TrailingHyphen));
        assert_eq!(check("user@example-.com"), Err(EmailError::PeriodNextToHyphen));
        assert_eq!(check("user@example"), Err(EmailError::MissingPeriod));
        assert_eq!(check("user@example.123"), Err(EmailError::NumericTopLevelDomain));
        assert_eq!(
            check("user@exa_mple.com"),
            Err(EmailError::InvalidDomainCharacters("'_'".to_string()))
        );
    }

    #[test]
    fn test_domain_lengths() {
        let label = "a".repeat(64);
        assert_eq!(
            check(&format!("user@{label}.com")),
            Err(EmailError::LabelTooLong(1))
        );

        let long_domain = vec!["a".repeat(63); 4].join(".");
        assert_eq!(
            check(&format!("user@{long_domain}.com")),
            Err(EmailError::DomainTooLong)
        );
    }

    #[test]
    fn test_address_length() {
        let local = "a".repeat(64);
        let domain = format!("{}.{}.{}.com", "b".repeat(63), "c".repeat(63), "d".repeat(59));
        let address = format!("{local}@{domain}");
        assert!(address.len() > EMAIL_MAX_LENGTH);
        assert_eq!(
            check(&address),
            Err(EmailError::AddressTooLong(address.len() - EMAIL_MAX_LENGTH))
        );
    }

    #[test]
    fn test_special_use_domains() {
        assert_eq!(check("user@host.localhost"), Err(EmailError::SpecialUseDomain));
        assert_eq!(check("user@mail.test"), Err(EmailError::SpecialUseDomain));
        assert!(check("user@example.com").is_ok());
        assert!(check("user@latest.dev").is_ok());
        assert_eq!(check("user@printer.local"), Err(EmailError::SpecialUseDomain));
        assert!(check("user@service.internal").is_ok());
        assert!(check("user@router.home.arpa").is_err());

        let local = EmailConfig::default().with_globally_deliverable(false);
        assert!(validate_syntax("user@localhost", &local).is_ok());
        assert!(validate_syntax("user@mail.test", &local).is_ok());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            check("John Doe <john@example.com>"),
            Err(EmailError::DisplayNameNotAllowed)
        );

        let config = EmailConfig::default().with_allow_display_name(true);
        let email = validate_syntax("\"John Doe\" <john@example.com>", &config).unwrap();
        assert_eq!(email.display_name.as_deref(), Some("John Doe"));
        assert_eq!(email.normalized, "john@example.com");
    }

    #[test]
    fn test_domain_literals() {
        assert_eq!(
            check("user@[192.168.0.1]"),
            Err(EmailError::DomainLiteralNotAllowed)
        );

        let config = EmailConfig::default().with_allow_domain_literal(true);
        let email = validate_syntax("user@[192.168.0.1]", &config).unwrap();
        assert!(email.domain_literal);
        assert_eq!(email.domain, "[192.168.0.1]");

        let email = validate_syntax("user@[IPv6:2001:DB8::1]", &config).unwrap();
        assert_eq!(email.domain, "[IPv6:2001:db8::1]");

        assert!(matches!(
            validate_syntax("user@[300.1.1.1]", &config),
            Err(EmailError::InvalidDomainLiteral(_))
        ));
    }
}
