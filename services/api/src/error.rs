use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants, one per taxonomy entry.
///
/// Uniqueness violations map to 400 rather than 409, matching the wire
/// behavior clients already depend on.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} does not exist")]
    MissingReference(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("Cannot delete currency: there are records using this currency")]
    CurrencyInUse,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("authorization required")]
    AuthorizationRequired,
    #[error("token expired")]
    TokenExpired,
    #[error("invalid token")]
    InvalidToken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::MissingReference(_) => "MISSING_REFERENCE",
            Self::Conflict(_) => "CONFLICT",
            Self::CurrencyInUse => "CURRENCY_IN_USE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AuthorizationRequired => "AUTHORIZATION_REQUIRED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_)
            | Self::MissingReference(_)
            | Self::Conflict(_)
            | Self::CurrencyInUse => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCredentials
            | Self::AuthorizationRequired
            | Self::TokenExpired
            | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. Internal errors need the anyhow chain logged so the
        // root cause is traceable; the client sees a generic message.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

// Malformed bodies, query strings, and path params all surface as 400
// Validation errors instead of axum's default rejections.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: ApiError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_validation() {
        assert_error(
            ApiError::Validation("name is required".into()),
            StatusCode::BAD_REQUEST,
            "VALIDATION",
            "name is required",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_missing_reference() {
        assert_error(
            ApiError::MissingReference("Currency"),
            StatusCode::BAD_REQUEST,
            "MISSING_REFERENCE",
            "Currency does not exist",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_conflict() {
        assert_error(
            ApiError::Conflict("email already registered".into()),
            StatusCode::BAD_REQUEST,
            "CONFLICT",
            "email already registered",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_currency_in_use() {
        assert_error(
            ApiError::CurrencyInUse,
            StatusCode::BAD_REQUEST,
            "CURRENCY_IN_USE",
            "Cannot delete currency: there are records using this currency",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_not_found() {
        assert_error(
            ApiError::NotFound("user"),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "user not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_credentials() {
        assert_error(
            ApiError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Invalid email or password",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_authorization_required() {
        assert_error(
            ApiError::AuthorizationRequired,
            StatusCode::UNAUTHORIZED,
            "AUTHORIZATION_REQUIRED",
            "authorization required",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_token_expired() {
        assert_error(
            ApiError::TokenExpired,
            StatusCode::UNAUTHORIZED,
            "TOKEN_EXPIRED",
            "token expired",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_token() {
        assert_error(
            ApiError::InvalidToken,
            StatusCode::UNAUTHORIZED,
            "INVALID_TOKEN",
            "invalid token",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            ApiError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
