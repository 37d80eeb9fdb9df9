//! Domain types and input normalization helpers.

use chrono::{DateTime, Utc};

/// Minimum accepted password length at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub default_currency_id: Option<i32>,
}

/// User fields gathered at signup, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub currency_id: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Record fields as validated by the create usecase; `created_at` is
/// defaulted by the store.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub user_id: i32,
    pub category_id: i32,
    pub currency_id: i32,
    pub amount: f64,
}

/// A record joined with the rows it references.
#[derive(Debug, Clone)]
pub struct RecordDetail {
    pub record: Record,
    pub user: User,
    pub category: Category,
    pub currency: Currency,
}

/// Filters for record listing. At least one must be set; set filters are ANDed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.category_id.is_none()
    }
}

/// Canonical email form: trimmed and lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Canonical currency-code form: trimmed and uppercased.
pub fn normalize_currency_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}
