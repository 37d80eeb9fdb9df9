use crate::domain::repository::{CurrencyRepository, RecordRepository};
use crate::domain::types::{Currency, normalize_currency_code};
use crate::error::ApiError;

// ── CreateCurrency ───────────────────────────────────────────────────────────

pub struct CreateCurrencyInput {
    pub code: Option<String>,
    pub name: Option<String>,
}

pub struct CreateCurrencyUseCase<R: CurrencyRepository> {
    pub repo: R,
}

impl<R: CurrencyRepository> CreateCurrencyUseCase<R> {
    pub async fn execute(&self, input: CreateCurrencyInput) -> Result<Currency, ApiError> {
        let code = normalize_currency_code(input.code.as_deref().unwrap_or_default());
        if code.is_empty() {
            return Err(ApiError::Validation("code is required".into()));
        }
        let name = input.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(ApiError::Validation("name is required".into()));
        }
        if self.repo.find_by_code(&code).await?.is_some() {
            return Err(ApiError::Conflict("currency code already exists".into()));
        }
        self.repo.create(&code, name).await
    }
}

// ── ListCurrencies ───────────────────────────────────────────────────────────

pub struct ListCurrenciesUseCase<R: CurrencyRepository> {
    pub repo: R,
}

impl<R: CurrencyRepository> ListCurrenciesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Currency>, ApiError> {
        self.repo.list().await
    }
}

// ── DeleteCurrency ───────────────────────────────────────────────────────────

pub struct DeleteCurrencyUseCase<C: CurrencyRepository, R: RecordRepository> {
    pub currencies: C,
    pub records: R,
}

impl<C: CurrencyRepository, R: RecordRepository> DeleteCurrencyUseCase<C, R> {
    /// Currencies are never cascade-deleted: the delete is refused while any
    /// record still references the currency.
    pub async fn execute(&self, currency_id: i32) -> Result<(), ApiError> {
        self.currencies
            .find_by_id(currency_id)
            .await?
            .ok_or(ApiError::NotFound("currency"))?;

        if self.records.count_by_currency(currency_id).await? > 0 {
            return Err(ApiError::CurrencyInUse);
        }

        self.currencies.delete(currency_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{NewRecord, Record, RecordDetail, RecordFilter};

    struct MockCurrencyRepo {
        currency: Option<Currency>,
    }

    impl CurrencyRepository for MockCurrencyRepo {
        async fn find_by_id(&self, _id: i32) -> Result<Option<Currency>, ApiError> {
            Ok(self.currency.clone())
        }
        async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, ApiError> {
            Ok(self.currency.clone().filter(|c| c.code == code))
        }
        async fn list(&self) -> Result<Vec<Currency>, ApiError> {
            Ok(self.currency.clone().into_iter().collect())
        }
        async fn create(&self, code: &str, name: &str) -> Result<Currency, ApiError> {
            Ok(Currency {
                id: 1,
                code: code.to_owned(),
                name: name.to_owned(),
            })
        }
        async fn delete(&self, _id: i32) -> Result<bool, ApiError> {
            Ok(self.currency.is_some())
        }
    }

    struct MockRecordRepo {
        referencing: u64,
    }

    impl RecordRepository for MockRecordRepo {
        async fn find_by_id(&self, _id: i32) -> Result<Option<Record>, ApiError> {
            Ok(None)
        }
        async fn find_detail(&self, _id: i32) -> Result<Option<RecordDetail>, ApiError> {
            Ok(None)
        }
        async fn list(&self, _filter: RecordFilter) -> Result<Vec<RecordDetail>, ApiError> {
            Ok(vec![])
        }
        async fn create(&self, _record: NewRecord) -> Result<Record, ApiError> {
            unreachable!("not used by currency tests")
        }
        async fn delete(&self, _id: i32) -> Result<bool, ApiError> {
            Ok(false)
        }
        async fn count_by_currency(&self, _currency_id: i32) -> Result<u64, ApiError> {
            Ok(self.referencing)
        }
    }

    fn usd() -> Currency {
        Currency {
            id: 1,
            code: "USD".into(),
            name: "US Dollar".into(),
        }
    }

    #[tokio::test]
    async fn should_uppercase_code_on_create() {
        let usecase = CreateCurrencyUseCase {
            repo: MockCurrencyRepo { currency: None },
        };
        let currency = usecase
            .execute(CreateCurrencyInput {
                code: Some(" usd ".into()),
                name: Some("US Dollar".into()),
            })
            .await
            .unwrap();
        assert_eq!(currency.code, "USD");
    }

    #[tokio::test]
    async fn should_reject_duplicate_code_case_insensitively() {
        let usecase = CreateCurrencyUseCase {
            repo: MockCurrencyRepo {
                currency: Some(usd()),
            },
        };
        let result = usecase
            .execute(CreateCurrencyInput {
                code: Some("usd".into()),
                name: Some("US Dollar".into()),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_reject_missing_code_or_name() {
        let usecase = CreateCurrencyUseCase {
            repo: MockCurrencyRepo { currency: None },
        };
        let result = usecase
            .execute(CreateCurrencyInput {
                code: None,
                name: Some("US Dollar".into()),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let result = usecase
            .execute(CreateCurrencyInput {
                code: Some("USD".into()),
                name: None,
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_block_delete_while_records_reference_currency() {
        let usecase = DeleteCurrencyUseCase {
            currencies: MockCurrencyRepo {
                currency: Some(usd()),
            },
            records: MockRecordRepo { referencing: 2 },
        };
        let result = usecase.execute(1).await;
        assert!(matches!(result, Err(ApiError::CurrencyInUse)));
    }

    #[tokio::test]
    async fn should_delete_unreferenced_currency() {
        let usecase = DeleteCurrencyUseCase {
            currencies: MockCurrencyRepo {
                currency: Some(usd()),
            },
            records: MockRecordRepo { referencing: 0 },
        };
        assert!(usecase.execute(1).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_currency() {
        let usecase = DeleteCurrencyUseCase {
            currencies: MockCurrencyRepo { currency: None },
            records: MockRecordRepo { referencing: 0 },
        };
        let result = usecase.execute(1).await;
        assert!(matches!(result, Err(ApiError::NotFound("currency"))));
    }
}
