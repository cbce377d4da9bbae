//! Account handlers

use axum::extract::{Extension, Json};
use tracing::info;

use super::models::{Account, AccountPayload};
use super::validators::validate_account;
use crate::common::{ApiError, AppState, ValidationResult};

/// POST /create
/// Validates an account submission and echoes it back
///
/// # Request Body
/// Form-urlencoded or JSON:
/// ```text
/// username=alice&password=abc123!
/// ```
///
/// # Response
/// 200 with the submitted fields, or 400:
/// ```json
/// {
///   "error": "Field validation for 'username' failed on the 'usernamevalid' tag",
///   "code": "VALIDATION_ERROR",
///   "field": "username",
///   "reason": "FORMAT_MISMATCH"
/// }
/// ```
pub async fn create_account(
    Extension(state): Extension<AppState>,
    payload: AccountPayload,
) -> Result<Json<Account>, ApiError> {
    let validator = state.validator();

    match validate_account(&validator, payload.username, payload.password)? {
        ValidationResult::Valid(account) => {
            info!(username = %account.username, "Account submission accepted");
            Ok(Json(account))
        }
        ValidationResult::Invalid(e) => {
            info!(field = %e.field, reason = %e.kind, "Account submission rejected");
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
