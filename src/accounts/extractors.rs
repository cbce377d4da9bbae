//! Request body extractor for account submissions

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Query, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use tracing::{debug, warn};

use super::models::AccountPayload;
use crate::common::ApiError;

type FormPairs = Vec<(String, String)>;

/// Binds an `AccountPayload` from the request.
///
/// - `application/json`: the JSON body
/// - `application/x-www-form-urlencoded` and `multipart/form-data`: body
///   values first, then query string values
/// - anything else, or no body: query string values only
///
/// For form sources the first value of a repeated key wins.
#[async_trait]
impl<S> FromRequest<S> for AccountPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<AccountPayload>::from_request(req, state)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Failed to decode JSON body");
                    ApiError::BadRequest(e.body_text())
                })?;
            return Ok(payload);
        }

        let Query(query_pairs) = Query::<FormPairs>::try_from_uri(req.uri()).map_err(|e| {
            warn!(error = %e, "Failed to decode query string");
            ApiError::BadRequest(e.body_text())
        })?;

        let mut pairs = if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body_pairs) = Form::<FormPairs>::from_request(req, state)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Failed to decode form body");
                    ApiError::BadRequest(e.body_text())
                })?;
            body_pairs
        } else if content_type.starts_with("multipart/form-data") {
            multipart_pairs(req, state).await?
        } else {
            debug!(content_type = %content_type, "No form body, binding from query string");
            Vec::new()
        };

        pairs.extend(query_pairs);
        Ok(AccountPayload::from_pairs(pairs))
    }
}

/// Collects the text parts of a multipart body. File parts are skipped.
async fn multipart_pairs<S>(req: Request, state: &S) -> Result<FormPairs, ApiError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state).await.map_err(|e| {
        warn!(error = %e, "Failed to read multipart body");
        ApiError::BadRequest(e.body_text())
    })?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Failed to read multipart field");
        ApiError::BadRequest(e.body_text())
    })? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(|e| {
            warn!(error = %e, field = %name, "Failed to read multipart field value");
            ApiError::BadRequest(e.body_text())
        })?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
