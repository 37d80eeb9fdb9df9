use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::Category;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::category::{
    CreateCategoryUseCase, DeleteCategoryUseCase, ListCategoriesUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

// ── GET /category ────────────────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let usecase = ListCategoriesUseCase {
        repo: state.category_repo(),
    };
    let categories = usecase.execute().await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

// ── POST /category ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

pub async fn create_category(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateCategoryRequest>, ApiError>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let usecase = CreateCategoryUseCase {
        repo: state.category_repo(),
    };
    let category = usecase.execute(body.name).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

// ── DELETE /category?id= ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteCategoryQuery {
    pub id: Option<i32>,
}

pub async fn delete_category(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<DeleteCategoryQuery>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let id = query
        .id
        .ok_or_else(|| ApiError::Validation("id query parameter is required".into()))?;
    let usecase = DeleteCategoryUseCase {
        repo: state.category_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
