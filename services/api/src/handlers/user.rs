use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Currency, User};
use crate::error::ApiError;
use crate::handlers::currency::CurrencyResponse;
use crate::state::AppState;
use crate::usecase::auth::{RegisterUserInput, RegisterUserUseCase};
use crate::usecase::user::{
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, SetDefaultCurrencyUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// User projection returned to clients. Never carries the password hash.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub default_currency_id: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            default_currency_id: user.default_currency_id,
        }
    }
}

/// User joined with their default currency.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub default_currency_id: Option<i32>,
    pub default_currency: Option<CurrencyResponse>,
}

impl From<(User, Option<Currency>)> for UserDetailResponse {
    fn from((user, currency): (User, Option<Currency>)) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            default_currency_id: user.default_currency_id,
            default_currency: currency.map(CurrencyResponse::from),
        }
    }
}

// ── POST /user (signup) ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /user/{user_id} ──────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let joined = usecase.execute(user_id).await?;
    Ok(Json(joined.into()))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── PATCH /user/{user_id}/currency ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserCurrencyRequest {
    pub currency_id: Option<i32>,
}

pub async fn update_user_currency(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<UpdateUserCurrencyRequest>, ApiError>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let usecase = SetDefaultCurrencyUseCase {
        users: state.user_repo(),
        currencies: state.currency_repo(),
    };
    let joined = usecase.execute(user_id, body.currency_id).await?;
    Ok(Json(joined.into()))
}

// ── DELETE /user/{user_id} ───────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
