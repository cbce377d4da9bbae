// src/rules/record.rs

use tracing::{debug, error};

use super::field::{FieldDescriptor, FieldError, FieldValidator};
use super::registry::{RegistryError, RuleRegistry};
use crate::common::{ValidationError, ValidationResult, Validator};

/// A record with a fixed, ordered table of field descriptors
pub trait Record {
    /// Field metadata in declaration order
    fn descriptors() -> &'static [FieldDescriptor];

    /// Raw value for the field with identifier `id`
    fn value(&self, id: &str) -> Option<&str>;
}

/// Validates records field by field, stopping at the first failure
#[derive(Debug, Clone, Copy)]
pub struct RecordValidator<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> RecordValidator<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }
}

impl<'r, T: Record> Validator<T> for RecordValidator<'r> {
    type Error = RegistryError;

    fn validate(&self, data: T) -> Result<ValidationResult<T>, RegistryError> {
        let fields = FieldValidator::new(self.registry);

        for descriptor in T::descriptors() {
            let value = data.value(descriptor.id).unwrap_or_default();
            match fields.check(value, &descriptor.constraint) {
                Ok(()) => continue,
                Err(FieldError::Rejected(kind)) => {
                    let tag = FieldError::Rejected(kind).tag(&descriptor.constraint);
                    let name = self.registry.field_name(descriptor);
                    debug!(field = %name, reason = %kind, tag = %tag, "Field failed validation");
                    return Ok(ValidationResult::Invalid(ValidationError::new(
                        &name, kind, tag,
                    )));
                }
                Err(FieldError::Config(e)) => {
                    error!(field = %descriptor.id, error = %e, "Rule lookup failed during validation");
                    return Err(e);
                }
            }
        }

        Ok(ValidationResult::Valid(data))
    }
}
