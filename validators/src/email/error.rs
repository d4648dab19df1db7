use thiserror::Error;

/// Why an email address was rejected.
///
/// Messages follow the wording users of the common email-validator tooling
/// already know, so the display text can be shown under an input field
/// without further formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("The email address is not valid. It must have exactly one @-sign.")]
    AtSignCount,
    #[error("There must be something before the @-sign.")]
    EmptyLocalPart,
    #[error("There must be something after the @-sign.")]
    EmptyDomain,
    #[error(
        "A display name and angle brackets around the email address are not permitted here."
    )]
    DisplayNameNotAllowed,

    // Local part
    #[error("An email address cannot start with a period.")]
    LeadingPeriod,
    #[error("An email address cannot have a period immediately before the @-sign.")]
    PeriodBeforeAt,
    #[error("An email address cannot have two periods in a row.")]
    ConsecutivePeriods,
    #[error("The email address contains invalid characters before the @-sign: {0}.")]
    InvalidLocalCharacters(String),
    #[error("Internationalized characters before the @-sign are not supported: {0}.")]
    InternationalizedLocalPart(String),
    #[error("Quoting the part before the @-sign is not allowed here.")]
    QuotedLocalNotAllowed,
    #[error("The email address contains unsafe characters: {0}.")]
    UnsafeCharacters(String),
    #[error("The email address contains invalid characters in quotes before the @-sign: {0}.")]
    InvalidQuotedCharacters(String),
    #[error("The email address is too long before the @-sign ({} too many).", too_many(.0))]
    LocalPartTooLong(usize),

    // Domain
    #[error("An email address cannot have a period immediately after the @-sign.")]
    PeriodAfterAt,
    #[error("An email address cannot end with a period.")]
    TrailingPeriod,
    #[error("The part after the @-sign contains invalid characters: {0}.")]
    InvalidDomainCharacters(String),
    #[error("An email address cannot have a hyphen immediately after the @-sign.")]
    HyphenAfterAt,
    #[error("An email address cannot end with a hyphen.")]
    TrailingHyphen,
    #[error("An email address cannot have a period and a hyphen next to each other.")]
    PeriodNextToHyphen,
    #[error(
        "After the @-sign, periods cannot be separated by so many characters ({} too many).",
        too_many(.0)
    )]
    LabelTooLong(usize),
    #[error("The email address is too long after the @-sign.")]
    DomainTooLong,
    #[error("The part after the @-sign is not valid. It should have a period.")]
    MissingPeriod,
    #[error("The part after the @-sign is not valid. It is not within a valid top-level domain.")]
    NumericTopLevelDomain,
    #[error(
        "The part after the @-sign is a special-use or reserved name that cannot be used with email."
    )]
    SpecialUseDomain,
    #[error("A bracketed IP address after the @-sign is not allowed here.")]
    DomainLiteralNotAllowed,
    #[error("The address in brackets after the @-sign is not valid: {0}")]
    InvalidDomainLiteral(String),

    // Whole address
    #[error("The email address is too long ({} too many).", too_many(.0))]
    AddressTooLong(usize),

    // Deliverability
    #[error("The domain name {0} does not exist.")]
    DomainNotFound(String),
    #[error("The domain name {0} does not accept email.")]
    DomainRejectsEmail(String),
    #[error(
        "There was an error while checking if the domain name in the email address is deliverable: {0}"
    )]
    DeliverabilityCheck(String),
}

impl EmailError {
    /// True for failures that come from the DNS check rather than the syntax
    pub fn is_deliverability(&self) -> bool {
        matches!(
            self,
            EmailError::DomainNotFound(_)
                | EmailError::DomainRejectsEmail(_)
                | EmailError::DeliverabilityCheck(_)
        )
    }
}

fn too_many(count: &usize) -> String {
    if *count == 1 {
        "1 character".to_string()
    } else {
        format!("{count} characters")
    }
}
