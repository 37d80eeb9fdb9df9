use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use spendlog_schema::{categories, currencies, records, users};

use crate::domain::repository::{
    CategoryRepository, CurrencyRepository, RecordRepository, UserRepository,
};
use crate::domain::types::{
    Category, Currency, NewRecord, NewUser, Record, RecordDetail, RecordFilter, User,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_with_default_currency(
        &self,
        id: i32,
    ) -> Result<Option<(User, Option<Currency>)>, ApiError> {
        let found = users::Entity::find_by_id(id)
            .find_also_related(currencies::Entity)
            .one(&self.db)
            .await
            .context("find user with default currency")?;
        Ok(found.map(|(user, currency)| {
            (user_from_model(user), currency.map(currency_from_model))
        }))
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, ApiError> {
        let model = users::ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            default_currency_id: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn set_default_currency(&self, id: i32, currency_id: i32) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            default_currency_id: Set(Some(currency_id)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set default currency")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        default_currency_id: model.default_currency_id,
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, ApiError> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }

    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .context("list categories")?;
        Ok(models.into_iter().map(category_from_model).collect())
    }

    async fn create(&self, name: &str) -> Result<Category, ApiError> {
        let model = categories::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create category")?;
        Ok(category_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = categories::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete category")?;
        Ok(result.rows_affected > 0)
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
    }
}

// ── Currency repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCurrencyRepository {
    pub db: DatabaseConnection,
}

impl CurrencyRepository for DbCurrencyRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Currency>, ApiError> {
        let model = currencies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find currency by id")?;
        Ok(model.map(currency_from_model))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Currency>, ApiError> {
        let model = currencies::Entity::find()
            .filter(currencies::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find currency by code")?;
        Ok(model.map(currency_from_model))
    }

    async fn list(&self) -> Result<Vec<Currency>, ApiError> {
        let models = currencies::Entity::find()
            .order_by_asc(currencies::Column::Id)
            .all(&self.db)
            .await
            .context("list currencies")?;
        Ok(models.into_iter().map(currency_from_model).collect())
    }

    async fn create(&self, code: &str, name: &str) -> Result<Currency, ApiError> {
        let model = currencies::ActiveModel {
            code: Set(code.to_owned()),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create currency")?;
        Ok(currency_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = currencies::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete currency")?;
        Ok(result.rows_affected > 0)
    }
}

fn currency_from_model(model: currencies::Model) -> Currency {
    Currency {
        id: model.id,
        code: model.code,
        name: model.name,
    }
}

// ── Record repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecordRepository {
    pub db: DatabaseConnection,
}

impl DbRecordRepository {
    /// Join one record model with the rows it references. The FKs guarantee
    /// the referenced rows exist; a miss means the store is inconsistent.
    async fn join_detail(&self, model: records::Model) -> Result<RecordDetail, ApiError> {
        let user = users::Entity::find_by_id(model.user_id)
            .one(&self.db)
            .await
            .context("find record user")?
            .ok_or_else(|| anyhow::anyhow!("user {} missing for record {}", model.user_id, model.id))?;
        let category = categories::Entity::find_by_id(model.category_id)
            .one(&self.db)
            .await
            .context("find record category")?
            .ok_or_else(|| {
                anyhow::anyhow!("category {} missing for record {}", model.category_id, model.id)
            })?;
        let currency = currencies::Entity::find_by_id(model.currency_id)
            .one(&self.db)
            .await
            .context("find record currency")?
            .ok_or_else(|| {
                anyhow::anyhow!("currency {} missing for record {}", model.currency_id, model.id)
            })?;

        Ok(RecordDetail {
            record: record_from_model(model),
            user: user_from_model(user),
            category: category_from_model(category),
            currency: currency_from_model(currency),
        })
    }
}

impl RecordRepository for DbRecordRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Record>, ApiError> {
        let model = records::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find record by id")?;
        Ok(model.map(record_from_model))
    }

    async fn find_detail(&self, id: i32) -> Result<Option<RecordDetail>, ApiError> {
        let Some(model) = records::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find record by id")?
        else {
            return Ok(None);
        };
        Ok(Some(self.join_detail(model).await?))
    }

    async fn list(&self, filter: RecordFilter) -> Result<Vec<RecordDetail>, ApiError> {
        let mut query = records::Entity::find();
        if let Some(user_id) = filter.user_id {
            query = query.filter(records::Column::UserId.eq(user_id));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(records::Column::CategoryId.eq(category_id));
        }
        let models = query
            .order_by_asc(records::Column::Id)
            .all(&self.db)
            .await
            .context("list records")?;

        let mut details = Vec::with_capacity(models.len());
        for model in models {
            details.push(self.join_detail(model).await?);
        }
        Ok(details)
    }

    async fn create(&self, record: NewRecord) -> Result<Record, ApiError> {
        let model = records::ActiveModel {
            user_id: Set(record.user_id),
            category_id: Set(record.category_id),
            currency_id: Set(record.currency_id),
            amount: Set(record.amount),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create record")?;
        Ok(record_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = records::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete record")?;
        Ok(result.rows_affected > 0)
    }

    async fn count_by_currency(&self, currency_id: i32) -> Result<u64, ApiError> {
        let count = records::Entity::find()
            .filter(records::Column::CurrencyId.eq(currency_id))
            .count(&self.db)
            .await
            .context("count records by currency")?;
        Ok(count)
    }
}

fn record_from_model(model: records::Model) -> Record {
    Record {
        id: model.id,
        user_id: model.user_id,
        category_id: model.category_id,
        currency_id: model.currency_id,
        amount: model.amount,
        created_at: model.created_at,
    }
}
