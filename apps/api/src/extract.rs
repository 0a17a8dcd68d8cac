//! # Request Extractors
//!
//! Thin wrappers over axum's `Query` and `Form` whose rejections are
//! [`ApiError`]s, so a malformed request answers like any other bad input.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ApiQuery<T>  ── Query<T> rejection ──────────────────► ApiError(400)  │
//! │                                                                         │
//! │  ApiForm<T>   ── wrong Content-Type ──────────────────► ApiError(400)  │
//! │               ── unreadable / oversized body ─────────► ApiError(400)  │
//! │               ── percent-decodes to invalid UTF-8 ────► ApiError(400)  │
//! │               ── Form<T> rejection ───────────────────► ApiError(400)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::body::Body;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Form;
use percent_encoding::percent_decode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Largest form body accepted by [`ApiForm`].
pub const FORM_BODY_LIMIT: usize = 64 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Query string extractor rejecting with [`ApiError`].
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Url-encoded form extractor rejecting with [`ApiError`].
///
/// Unlike plain `Form`, a body whose percent-escapes decode to invalid
/// UTF-8 is refused instead of being stored with replacement characters.
#[derive(Debug, Clone, Default)]
pub struct ApiForm<T>(pub T);

impl<T, S> FromRequest<S> for ApiForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_form_content_type(&req) {
            return Err(ApiError::validation(format!(
                "expected Content-Type: {}",
                FORM_CONTENT_TYPE
            )));
        }

        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, FORM_BODY_LIMIT)
            .await
            .map_err(|e| ApiError::validation(format!("failed to read form body: {}", e)))?;

        percent_decode(&bytes)
            .decode_utf8()
            .map_err(|e| ApiError::validation(format!("form body is not valid UTF-8: {}", e)))?;

        let req = Request::from_parts(parts, Body::from(bytes));
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        Ok(ApiForm(value))
    }
}

fn has_form_content_type(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}
