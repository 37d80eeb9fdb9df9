//! JWT access-token issuance and validation for the spendlog API.

pub mod token;

pub use token::{TokenError, TokenInfo, issue_access_token, validate_access_token};
