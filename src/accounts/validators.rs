// src/accounts/validators.rs

use super::models::Account;
use crate::common::{ValidationResult, Validator};
use crate::rules::{RecordValidator, RegistryError};

/// Validates a raw username/password pair as an `Account`.
///
/// Values are passed through untouched: no trimming or case folding.
pub fn validate_account(
    validator: &RecordValidator<'_>,
    raw_username: String,
    raw_password: String,
) -> Result<ValidationResult<Account>, RegistryError> {
    validator.validate(Account {
        username: raw_username,
        password: raw_password,
    })
}
