use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCategoryRepository, DbCurrencyRepository, DbRecordRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn category_repo(&self) -> DbCategoryRepository {
        DbCategoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn currency_repo(&self) -> DbCurrencyRepository {
        DbCurrencyRepository {
            db: self.db.clone(),
        }
    }

    pub fn record_repo(&self) -> DbRecordRepository {
        DbRecordRepository {
            db: self.db.clone(),
        }
    }
}
