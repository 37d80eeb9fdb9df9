use crate::domain::repository::CategoryRepository;
use crate::domain::types::Category;
use crate::error::ApiError;

// ── CreateCategory ───────────────────────────────────────────────────────────

pub struct CreateCategoryUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> CreateCategoryUseCase<R> {
    pub async fn execute(&self, name: Option<String>) -> Result<Category, ApiError> {
        let name = name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(ApiError::Validation("name is required".into()));
        }
        self.repo.create(name).await
    }
}

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> ListCategoriesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Category>, ApiError> {
        self.repo.list().await
    }
}

// ── DeleteCategory ───────────────────────────────────────────────────────────

pub struct DeleteCategoryUseCase<R: CategoryRepository> {
    pub repo: R,
}

impl<R: CategoryRepository> DeleteCategoryUseCase<R> {
    /// Remove a category; referencing records go with it via the store's
    /// cascade.
    pub async fn execute(&self, category_id: i32) -> Result<(), ApiError> {
        if !self.repo.delete(category_id).await? {
            return Err(ApiError::NotFound("category"));
        }
        Ok(())
    }
}
