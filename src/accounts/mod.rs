//! # Accounts Module
//!
//! HTTP surface for account submissions:
//! - Form or JSON binding of username and password
//! - Validation through the rule engine
//! - Mapping of validation results to responses

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use models::{Account, ACCOUNT_FIELDS};
pub use routes::accounts_routes;
pub use validators::validate_account;
