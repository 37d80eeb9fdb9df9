use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use spendlog_auth::issue_access_token;

use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, NewUser, User, normalize_email};
use crate::error::ApiError;

/// Hash a password with Argon2id and a fresh random salt, returning the
/// PHC-string form.
fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC-string hash. An unparseable hash
/// counts as a mismatch.
fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

// ── RegisterUser (signup) ────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ApiError> {
        let name = input.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(ApiError::Validation("name is required".into()));
        }
        let email = normalize_email(input.email.as_deref().unwrap_or_default());
        if email.is_empty() {
            return Err(ApiError::Validation("email is required".into()));
        }
        let password = input.password.as_deref().unwrap_or_default();
        if password.is_empty() {
            return Err(ApiError::Validation("password is required".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::Conflict("email already registered".into()));
        }
        let password_hash = hash_password(password)?;
        self.repo
            .create(NewUser {
                name: name.to_owned(),
                email,
                password_hash,
            })
            .await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct LoginOutput {
    pub access_token: String,
    pub user: User,
}

pub struct LoginUseCase<R: UserRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let email = normalize_email(input.email.as_deref().unwrap_or_default());
        if email.is_empty() {
            return Err(ApiError::Validation("email is required".into()));
        }
        let password = input.password.as_deref().unwrap_or_default();
        if password.is_empty() {
            return Err(ApiError::Validation("password is required".into()));
        }

        // Unknown email and wrong password are indistinguishable to the
        // caller, so an attacker cannot probe which emails are registered.
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !verify_password(&user.password_hash, password) {
            return Err(ApiError::InvalidCredentials);
        }

        let (access_token, _exp) = issue_access_token(user.id, &self.jwt_secret)
            .map_err(|e| ApiError::Internal(e.into()))?;

        Ok(LoginOutput { access_token, user })
    }
}
