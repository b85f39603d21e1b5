//! `ActingUser` extractor — identifies the HR user performing a mutation.
//!
//! Authentication is terminated upstream of this service; the gateway
//! forwards the authenticated user id in the `X-User-Id` header. A missing
//! header leaves the actor unset; a malformed one is rejected.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use hrms_core::error::AppError;

use crate::error::ApiError;

/// The acting user id, taken from the `X-User-Id` header.
#[derive(Debug, Clone, Copy)]
pub struct ActingUser(pub Option<Uuid>);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get("x-user-id") else {
            return Ok(ActingUser(None));
        };

        let raw = value
            .to_str()
            .map_err(|_| ApiError(AppError::validation("Invalid X-User-Id header")))?;
        let id = raw
            .parse::<Uuid>()
            .map_err(|_| ApiError(AppError::validation("Invalid X-User-Id header")))?;

        Ok(ActingUser(Some(id)))
    }
}
