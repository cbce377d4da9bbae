//! # Rules Module
//!
//! Declarative field validation:
//! - `RuleRegistry` maps rule names to predicates and owns the field naming policy
//! - `FieldValidator` applies one field's constraint
//! - `RecordValidator` walks a record's fields in declaration order, fail-fast

pub mod builtin;
pub mod field;
pub mod record;
pub mod registry;

#[cfg(test)]
mod tests;

pub use builtin::{PasswordRule, UsernameRule, PASSWORD_VALID, USERNAME_VALID};
pub use field::{FieldConstraint, FieldDescriptor, FieldError, FieldValidator};
pub use record::{Record, RecordValidator};
pub use registry::{wire_name_policy, RegistryError, Rule, RuleRegistry};
