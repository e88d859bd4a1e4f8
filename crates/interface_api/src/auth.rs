//! Caller identification
//!
//! Identity is an opaque party token carried in the `X-Caller-Id` header,
//! formatted as the party identifier's display form (`PTY-<uuid>`, bare
//! UUIDs accepted). The API never authenticates callers beyond parsing the
//! token; authorization is the domain's job, which compares the token
//! against the policy's two fixed identities.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use core_kernel::PartyId;

use crate::error::ApiError;

/// Header carrying the caller's party token
pub const CALLER_HEADER: &str = "X-Caller-Id";

/// Extractor for the calling party
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub PartyId);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized(format!("Missing {CALLER_HEADER} header")))?;

        let party = raw
            .parse::<PartyId>()
            .map_err(|_| ApiError::Unauthorized(format!("Malformed {CALLER_HEADER} header")))?;

        Ok(Caller(party))
    }
}
