use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::Currency;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::currency::{
    CreateCurrencyInput, CreateCurrencyUseCase, DeleteCurrencyUseCase, ListCurrenciesUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CurrencyResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl From<Currency> for CurrencyResponse {
    fn from(currency: Currency) -> Self {
        Self {
            id: currency.id,
            code: currency.code,
            name: currency.name,
        }
    }
}

// ── GET /currency ────────────────────────────────────────────────────────────

pub async fn list_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyResponse>>, ApiError> {
    let usecase = ListCurrenciesUseCase {
        repo: state.currency_repo(),
    };
    let currencies = usecase.execute().await?;
    Ok(Json(
        currencies.into_iter().map(CurrencyResponse::from).collect(),
    ))
}

// ── POST /currency ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCurrencyRequest {
    pub code: Option<String>,
    pub name: Option<String>,
}

pub async fn create_currency(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateCurrencyRequest>, ApiError>,
) -> Result<(StatusCode, Json<CurrencyResponse>), ApiError> {
    let usecase = CreateCurrencyUseCase {
        repo: state.currency_repo(),
    };
    let currency = usecase
        .execute(CreateCurrencyInput {
            code: body.code,
            name: body.name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(currency.into())))
}

// ── DELETE /currency/{currency_id} ───────────────────────────────────────────

pub async fn delete_currency(
    State(state): State<AppState>,
    WithRejection(Path(currency_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteCurrencyUseCase {
        currencies: state.currency_repo(),
        records: state.record_repo(),
    };
    usecase.execute(currency_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
