// src/rules/field.rs

use tracing::debug;

use super::registry::{RegistryError, RuleRegistry};
use crate::common::ValidationErrorKind;

/// Declarative requirements attached to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    pub required: bool,
    /// Maximum length in characters
    pub max_length: usize,
    pub rule_name: &'static str,
}

/// Static metadata for one record field, defined alongside the record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub form_alias: Option<&'static str>,
    pub json_alias: Option<&'static str>,
    pub constraint: FieldConstraint,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Field rejected: {0}")]
    Rejected(ValidationErrorKind),

    #[error(transparent)]
    Config(#[from] RegistryError),
}

impl FieldError {
    /// Tag of the check that produced this error
    pub fn tag<'a>(&self, constraint: &'a FieldConstraint) -> &'a str {
        match self {
            FieldError::Rejected(ValidationErrorKind::MissingField) => "required",
            FieldError::Rejected(ValidationErrorKind::TooLong) => "max",
            FieldError::Rejected(ValidationErrorKind::FormatMismatch) | FieldError::Config(_) => {
                constraint.rule_name
            }
        }
    }
}

/// Applies one field's constraint: required, then max length, then its rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldValidator<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> FieldValidator<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn check(&self, value: &str, constraint: &FieldConstraint) -> Result<(), FieldError> {
        if constraint.required && value.is_empty() {
            return Err(FieldError::Rejected(ValidationErrorKind::MissingField));
        }

        let len = value.chars().count();
        if len > constraint.max_length {
            debug!(
                len,
                max = constraint.max_length,
                "Value exceeds maximum length"
            );
            return Err(FieldError::Rejected(ValidationErrorKind::TooLong));
        }

        let rule = self.registry.resolve(constraint.rule_name)?;
        if !rule.check(value) {
            return Err(FieldError::Rejected(ValidationErrorKind::FormatMismatch));
        }

        // Empty values never pass, even when optional and the rule accepts "".
        if value.is_empty() {
            return Err(FieldError::Rejected(ValidationErrorKind::FormatMismatch));
        }

        Ok(())
    }

    /// `check` collapsed to pass/fail, for callers that only need a verdict
    #[cfg(test)]
    pub fn passes(&self, value: &str, constraint: &FieldConstraint) -> Result<bool, RegistryError> {
        match self.check(value, constraint) {
            Ok(()) => Ok(true),
            Err(FieldError::Rejected(_)) => Ok(false),
            Err(FieldError::Config(e)) => Err(e),
        }
    }
}
