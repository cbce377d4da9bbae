// Common validation types and traits

use serde::Serialize;
use std::fmt;

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    MissingField,
    TooLong,
    FormatMismatch,
}

impl ValidationErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingField => "MISSING_FIELD",
            ValidationErrorKind::TooLong => "TOO_LONG",
            ValidationErrorKind::FormatMismatch => "FORMAT_MISMATCH",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Externally reported field name, as produced by the naming policy
    pub field: String,
    pub kind: ValidationErrorKind,
    /// Tag of the failing check: `required`, `max` or a rule name
    pub rule: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, kind: ValidationErrorKind, rule: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            rule: rule.to_string(),
            message: format!(
                "Field validation for '{}' failed on the '{}' tag",
                field, rule
            ),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating a whole record. Fail-fast: at most one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult<T> {
    Valid(T),
    Invalid(ValidationError),
}

#[cfg(test)]
impl<T> ValidationResult<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(e) => Some(e),
        }
    }
}

pub trait Validator<T> {
    type Error;

    fn validate(&self, data: T) -> Result<ValidationResult<T>, Self::Error>;
}
