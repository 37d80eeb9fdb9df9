#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Category, Currency, NewRecord, NewUser, Record, RecordDetail, RecordFilter, User,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    /// Fetch a user joined with their default currency, if one is set.
    async fn find_with_default_currency(
        &self,
        id: i32,
    ) -> Result<Option<(User, Option<Currency>)>, ApiError>;
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn create(&self, user: NewUser) -> Result<User, ApiError>;
    async fn set_default_currency(&self, id: i32, currency_id: i32) -> Result<(), ApiError>;
    /// Delete a user. Referencing records are removed by the store's
    /// cascade rule. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for expense categories.
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, ApiError>;
    async fn list(&self) -> Result<Vec<Category>, ApiError>;
    async fn create(&self, name: &str) -> Result<Category, ApiError>;
    /// Delete a category. Referencing records are removed by the store's
    /// cascade rule. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for currencies.
pub trait CurrencyRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Currency>, ApiError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, ApiError>;
    async fn list(&self) -> Result<Vec<Currency>, ApiError>;
    async fn create(&self, code: &str, name: &str) -> Result<Currency, ApiError>;
    /// Delete a currency. Returns `true` if a row was deleted. Callers must
    /// refuse the delete while records reference the currency.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for expense records.
pub trait RecordRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Record>, ApiError>;
    /// Fetch a record joined with its user, category, and currency.
    async fn find_detail(&self, id: i32) -> Result<Option<RecordDetail>, ApiError>;
    /// List joined records matching the filter (set fields are ANDed).
    async fn list(&self, filter: RecordFilter) -> Result<Vec<RecordDetail>, ApiError>;
    async fn create(&self, record: NewRecord) -> Result<Record, ApiError>;
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
    /// Number of records referencing the given currency.
    async fn count_by_currency(&self, currency_id: i32) -> Result<u64, ApiError>;
}
