use crate::validator::Validator;

/// Common validation errors with user-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonValidationError {
    Empty {
        field_name: String,
    },
    InvalidFormat {
        field_name: String,
        expected_format: String,
    },
}

impl CommonValidationError {
    pub fn empty(field_name: impl Into<String>) -> Self {
        Self::Empty {
            field_name: field_name.into(),
        }
    }

    pub fn invalid_format(
        field_name: impl Into<String>,
        expected_format: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            field_name: field_name.into(),
            expected_format: expected_format.into(),
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty { field_name } => format!("{field_name} cannot be empty."),
            Self::InvalidFormat {
                field_name,
                expected_format,
            } => {
                format!("{field_name} must be a valid {expected_format}.")
            }
        }
    }
}

impl std::fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for CommonValidationError {}

/// Which numbers a [`NumberValidator`] accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Optionally signed whole number
    Integer,
    /// Any finite decimal or scientific notation number
    Decimal,
}

impl NumberFormat {
    fn name(self) -> &'static str {
        match self {
            NumberFormat::Integer => "integer",
            NumberFormat::Decimal => "number",
        }
    }
}

/// Numeric format validator behind the integer and number input kinds
#[derive(Debug, Clone)]
pub struct NumberValidator {
    format: NumberFormat,
    field_name: String,
}

impl NumberValidator {
    pub fn new(field_name: impl Into<String>, format: NumberFormat) -> Self {
        Self {
            format,
            field_name: field_name.into(),
        }
    }

    fn parses(&self, input: &str) -> bool {
        match self.format {
            NumberFormat::Integer => input.parse::<i64>().is_ok(),
            NumberFormat::Decimal => input.parse::<f64>().is_ok_and(f64::is_finite),
        }
    }
}

impl Validator<str> for NumberValidator {
    type Error = CommonValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommonValidationError::empty(&self.field_name));
        }
        if !self.parses(input) {
            return Err(CommonValidationError::invalid_format(
                &self.field_name,
                self.format.name(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_validator() {
        let validator = NumberValidator::new("test field", NumberFormat::Integer);

        assert!(validator.validate("5").is_ok());
        assert!(validator.validate("-10").is_ok());
        assert!(validator.validate(" 7 ").is_ok());

        assert!(validator.validate("2.5").is_err());
        assert!(validator.validate("abc").is_err());
        assert_eq!(
            validator.validate("").unwrap_err().user_message(),
            "test field cannot be empty."
        );
    }

    #[test]
    fn test_decimal_validator() {
        let validator = NumberValidator::new("Input", NumberFormat::Decimal);

        assert!(validator.validate("2.5").is_ok());
        assert!(validator.validate("-1e3").is_ok());
        assert!(validator.validate("inf").is_err());
        assert!(validator.validate("NaN").is_err());
        assert_eq!(
            validator.validate("abc").unwrap_err().user_message(),
            "Input must be a valid number."
        );
    }
}
