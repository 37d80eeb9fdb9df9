use crate::domain::repository::{CurrencyRepository, UserRepository};
use crate::domain::types::{Currency, User};
use crate::error::ApiError;

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i32) -> Result<(User, Option<Currency>), ApiError> {
        self.repo
            .find_with_default_currency(user_id)
            .await?
            .ok_or(ApiError::NotFound("user"))
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── SetDefaultCurrency ───────────────────────────────────────────────────────

pub struct SetDefaultCurrencyUseCase<U: UserRepository, C: CurrencyRepository> {
    pub users: U,
    pub currencies: C,
}

impl<U: UserRepository, C: CurrencyRepository> SetDefaultCurrencyUseCase<U, C> {
    pub async fn execute(
        &self,
        user_id: i32,
        currency_id: Option<i32>,
    ) -> Result<(User, Option<Currency>), ApiError> {
        let currency_id =
            currency_id.ok_or_else(|| ApiError::Validation("currencyId is required".into()))?;

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("user"))?;
        self.currencies
            .find_by_id(currency_id)
            .await?
            .ok_or(ApiError::MissingReference("Currency"))?;

        self.users.set_default_currency(user_id, currency_id).await?;

        self.users
            .find_with_default_currency(user_id)
            .await?
            .ok_or(ApiError::NotFound("user"))
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Remove a user; their records go with them via the store's cascade.
    pub async fn execute(&self, user_id: i32) -> Result<(), ApiError> {
        if !self.repo.delete(user_id).await? {
            return Err(ApiError::NotFound("user"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::NewUser;
    use std::sync::Mutex;

    struct MockUserRepo {
        user: Option<User>,
        currency: Option<Currency>,
        set_default: Mutex<Option<i32>>,
    }

    impl MockUserRepo {
        fn with_user(user: User) -> Self {
            Self {
                user: Some(user),
                currency: None,
                set_default: Mutex::new(None),
            }
        }

        fn empty() -> Self {
            Self {
                user: None,
                currency: None,
                set_default: Mutex::new(None),
            }
        }
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_id(&self, _id: i32) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn find_with_default_currency(
            &self,
            _id: i32,
        ) -> Result<Option<(User, Option<Currency>)>, ApiError> {
            Ok(self.user.clone().map(|u| (u, self.currency.clone())))
        }
        async fn list(&self) -> Result<Vec<User>, ApiError> {
            Ok(self.user.clone().into_iter().collect())
        }
        async fn create(&self, user: NewUser) -> Result<User, ApiError> {
            Ok(User {
                id: 1,
                name: user.name,
                email: user.email,
                password_hash: user.password_hash,
                default_currency_id: None,
            })
        }
        async fn set_default_currency(&self, _id: i32, currency_id: i32) -> Result<(), ApiError> {
            *self.set_default.lock().unwrap() = Some(currency_id);
            Ok(())
        }
        async fn delete(&self, _id: i32) -> Result<bool, ApiError> {
            Ok(self.user.is_some())
        }
    }

    struct MockCurrencyRepo {
        currency: Option<Currency>,
    }

    impl CurrencyRepository for MockCurrencyRepo {
        async fn find_by_id(&self, _id: i32) -> Result<Option<Currency>, ApiError> {
            Ok(self.currency.clone())
        }
        async fn find_by_code(&self, _code: &str) -> Result<Option<Currency>, ApiError> {
            Ok(self.currency.clone())
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

    fn test_user() -> User {
        User {
            id: 3,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$test".into(),
            default_currency_id: None,
        }
    }

    fn test_currency() -> Currency {
        Currency {
            id: 5,
            code: "USD".into(),
            name: "US Dollar".into(),
        }
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_user() {
        let usecase = GetUserUseCase {
            repo: MockUserRepo::empty(),
        };
        let result = usecase.execute(3).await;
        assert!(matches!(result, Err(ApiError::NotFound("user"))));
    }

    #[tokio::test]
    async fn should_require_currency_id_for_default_currency_update() {
        let usecase = SetDefaultCurrencyUseCase {
            users: MockUserRepo::with_user(test_user()),
            currencies: MockCurrencyRepo {
                currency: Some(test_currency()),
            },
        };
        let result = usecase.execute(3, None).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn should_reject_default_currency_update_for_missing_user() {
        let usecase = SetDefaultCurrencyUseCase {
            users: MockUserRepo::empty(),
            currencies: MockCurrencyRepo {
                currency: Some(test_currency()),
            },
        };
        let result = usecase.execute(3, Some(5)).await;
        assert!(matches!(result, Err(ApiError::NotFound("user"))));
    }

    #[tokio::test]
    async fn should_reject_default_currency_update_for_missing_currency() {
        let usecase = SetDefaultCurrencyUseCase {
            users: MockUserRepo::with_user(test_user()),
            currencies: MockCurrencyRepo { currency: None },
        };
        let result = usecase.execute(3, Some(5)).await;
        assert!(matches!(result, Err(ApiError::MissingReference("Currency"))));
    }

    #[tokio::test]
    async fn should_persist_new_default_currency() {
        let users = MockUserRepo::with_user(test_user());
        let usecase = SetDefaultCurrencyUseCase {
            users,
            currencies: MockCurrencyRepo {
                currency: Some(test_currency()),
            },
        };
        usecase.execute(3, Some(5)).await.unwrap();
        assert_eq!(*usecase.users.set_default.lock().unwrap(), Some(5));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_user() {
        let usecase = DeleteUserUseCase {
            repo: MockUserRepo::empty(),
        };
        let result = usecase.execute(3).await;
        assert!(matches!(result, Err(ApiError::NotFound("user"))));
    }
}
