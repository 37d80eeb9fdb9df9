//! Bearer-token authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use spendlog_auth::{TokenError, validate_access_token};

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of the authenticated caller, inserted into request extensions
/// by [`require_auth`].
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
}

/// Pull the bearer token out of the `Authorization` header.
///
/// A missing header and a malformed scheme are distinct failures so clients
/// can tell "no credentials sent" from "credentials rejected".
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::AuthorizationRequired)?;
    let header = header.to_str().map_err(|_| ApiError::InvalidToken)?;
    header.strip_prefix("Bearer ").ok_or(ApiError::InvalidToken)
}

/// Gate for protected routes. Validates the access token and attaches the
/// caller's [`AuthUser`] for downstream handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let info = validate_access_token(token, &state.jwt_secret).map_err(|e| match e {
        TokenError::Expired => ApiError::TokenExpired,
        _ => ApiError::InvalidToken,
    })?;

    request.extensions_mut().insert(AuthUser {
        user_id: info.user_id,
    });
    Ok(next.run(request).await)
}
