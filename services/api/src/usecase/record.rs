use crate::domain::repository::{
    CategoryRepository, CurrencyRepository, RecordRepository, UserRepository,
};
use crate::domain::types::{NewRecord, Record, RecordDetail, RecordFilter};
use crate::error::ApiError;

// ── CreateRecord ─────────────────────────────────────────────────────────────

pub struct CreateRecordInput {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub currency_id: Option<i32>,
    pub amount: Option<f64>,
}

pub struct CreateRecordUseCase<U, Cat, Cur, R>
where
    U: UserRepository,
    Cat: CategoryRepository,
    Cur: CurrencyRepository,
    R: RecordRepository,
{
    pub users: U,
    pub categories: Cat,
    pub currencies: Cur,
    pub records: R,
}

impl<U, Cat, Cur, R> CreateRecordUseCase<U, Cat, Cur, R>
where
    U: UserRepository,
    Cat: CategoryRepository,
    Cur: CurrencyRepository,
    R: RecordRepository,
{
    pub async fn execute(&self, input: CreateRecordInput) -> Result<Record, ApiError> {
        let user_id = input
            .user_id
            .ok_or_else(|| ApiError::Validation("userId is required".into()))?;
        let category_id = input
            .category_id
            .ok_or_else(|| ApiError::Validation("categoryId is required".into()))?;
        let amount = input
            .amount
            .ok_or_else(|| ApiError::Validation("amount is required".into()))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::MissingReference("User"))?;
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or(ApiError::MissingReference("Category"))?;

        // Explicit currency wins; otherwise fall back to the user's default.
        let currency_id = match input.currency_id {
            Some(id) => {
                self.currencies
                    .find_by_id(id)
                    .await?
                    .ok_or(ApiError::MissingReference("Currency"))?;
                id
            }
            None => user.default_currency_id.ok_or_else(|| {
                ApiError::Validation("no default currency and no currencyId was provided".into())
            })?,
        };

        self.records
            .create(NewRecord {
                user_id,
                category_id,
                currency_id,
                amount,
            })
            .await
    }
}

// ── GetRecord ────────────────────────────────────────────────────────────────

pub struct GetRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> GetRecordUseCase<R> {
    pub async fn execute(&self, record_id: i32) -> Result<RecordDetail, ApiError> {
        self.repo
            .find_detail(record_id)
            .await?
            .ok_or(ApiError::NotFound("record"))
    }
}

// ── ListRecords ──────────────────────────────────────────────────────────────

pub struct ListRecordsUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> ListRecordsUseCase<R> {
    pub async fn execute(&self, filter: RecordFilter) -> Result<Vec<RecordDetail>, ApiError> {
        if filter.is_empty() {
            return Err(ApiError::Validation(
                "at least one of user_id or category_id is required".into(),
            ));
        }
        self.repo.list(filter).await
    }
}

// ── DeleteRecord ─────────────────────────────────────────────────────────────

pub struct DeleteRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> DeleteRecordUseCase<R> {
    pub async fn execute(&self, record_id: i32) -> Result<(), ApiError> {
        if !self.repo.delete(record_id).await? {
            return Err(ApiError::NotFound("record"));
        }
        Ok(())
    }
}
