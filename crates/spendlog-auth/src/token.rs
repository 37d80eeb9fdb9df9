//! HS256 access-token creation and validation.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Access-token lifetime in seconds (1 hour).
pub const ACCESS_TOKEN_EXP: u64 = 3600;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: i32,
    pub exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing,
}

/// JWT claims payload.
///
/// `sub` carries the user id as a decimal string; `exp` is seconds since
/// the UNIX epoch.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a signed access token for `user_id`, returning the token and its
/// expiration timestamp.
pub fn issue_access_token(user_id: i32, secret: &str) -> Result<(String, u64), TokenError> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::Signing)?;
    Ok((token, exp))
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer-token value, returning the embedded identity.
///
/// The auth middleware calls this on every protected request.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| TokenError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        exp: claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    fn make_token(sub: &str, exp: u64) -> String {
        let claims = JwtClaims {
            sub: sub.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> u64 {
        // 1 hour from now
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600
    }

    #[test]
    fn should_validate_valid_token() {
        let token = make_token("42", future_exp());

        let info = validate_access_token(&token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, 42);
    }

    #[test]
    fn should_round_trip_issued_token() {
        let (token, exp) = issue_access_token(7, TEST_SECRET).unwrap();

        let info = validate_access_token(&token, TEST_SECRET).unwrap();
        assert_eq!(info.user_id, 7);
        assert_eq!(info.exp, exp);
    }

    #[test]
    fn should_reject_expired_token() {
        // exp far in the past, beyond the 60s leeway
        let token = make_token("42", 1_000_000);

        let err = validate_access_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
    }

    #[test]
    fn should_reject_wrong_secret() {
        let token = make_token("42", future_exp());

        let err = validate_access_token(&token, "wrong-secret").unwrap_err();
        assert!(matches!(err, TokenError::InvalidSignature));
    }

    #[test]
    fn should_reject_malformed_token() {
        let err = validate_access_token("not-a-jwt", TEST_SECRET).unwrap_err();
        assert!(matches!(err, TokenError::Malformed));
    }

    #[test]
    fn should_reject_non_numeric_subject() {
        let token = make_token("not-a-number", future_exp());

        let err = validate_access_token(&token, TEST_SECRET).unwrap_err();
        assert!(matches!(err, TokenError::Malformed));
    }
}
