use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Record, RecordDetail, RecordFilter};
use crate::error::ApiError;
use crate::handlers::category::CategoryResponse;
use crate::handlers::currency::CurrencyResponse;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::record::{
    CreateRecordInput, CreateRecordUseCase, DeleteRecordUseCase, GetRecordUseCase,
    ListRecordsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub currency_id: i32,
    pub amount: f64,
    #[serde(serialize_with = "spendlog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            category_id: record.category_id,
            currency_id: record.currency_id,
            amount: record.amount,
            created_at: record.created_at,
        }
    }
}

/// Record joined with the full user, category, and currency objects.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetailResponse {
    pub id: i32,
    pub amount: f64,
    #[serde(serialize_with = "spendlog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub user: UserResponse,
    pub category: CategoryResponse,
    pub currency: CurrencyResponse,
}

impl From<RecordDetail> for RecordDetailResponse {
    fn from(detail: RecordDetail) -> Self {
        Self {
            id: detail.record.id,
            amount: detail.record.amount,
            created_at: detail.record.created_at,
            user: detail.user.into(),
            category: detail.category.into(),
            currency: detail.currency.into(),
        }
    }
}

// ── POST /record ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub currency_id: Option<i32>,
    pub amount: Option<f64>,
}

pub async fn create_record(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateRecordRequest>, ApiError>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let usecase = CreateRecordUseCase {
        users: state.user_repo(),
        categories: state.category_repo(),
        currencies: state.currency_repo(),
        records: state.record_repo(),
    };
    let record = usecase
        .execute(CreateRecordInput {
            user_id: body.user_id,
            category_id: body.category_id,
            currency_id: body.currency_id,
            amount: body.amount,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

// ── GET /record/{record_id} ──────────────────────────────────────────────────

pub async fn get_record(
    State(state): State<AppState>,
    WithRejection(Path(record_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<RecordDetailResponse>, ApiError> {
    let usecase = GetRecordUseCase {
        repo: state.record_repo(),
    };
    let detail = usecase.execute(record_id).await?;
    Ok(Json(detail.into()))
}

// ── GET /record?user_id=&category_id= ────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordListQuery {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
}

pub async fn list_records(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RecordListQuery>, ApiError>,
) -> Result<Json<Vec<RecordDetailResponse>>, ApiError> {
    let usecase = ListRecordsUseCase {
        repo: state.record_repo(),
    };
    let details = usecase
        .execute(RecordFilter {
            user_id: query.user_id,
            category_id: query.category_id,
        })
        .await?;
    Ok(Json(
        details.into_iter().map(RecordDetailResponse::from).collect(),
    ))
}

// ── DELETE /record/{record_id} ───────────────────────────────────────────────

pub async fn delete_record(
    State(state): State<AppState>,
    WithRejection(Path(record_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteRecordUseCase {
        repo: state.record_repo(),
    };
    usecase.execute(record_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
