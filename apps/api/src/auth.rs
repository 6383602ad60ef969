use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;

/// Header carrying the authenticated caller identity, set by the upstream
/// gateway after session resolution. Requests without it are rejected
/// before any handler logic runs.
const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, resolved from the gateway-injected header.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub external_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let external_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser {
            external_id: external_id.to_string(),
        })
    }
}
