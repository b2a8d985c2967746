//! Account Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};

use crate::application::dto::{
    CreateAccountRequest, CurrentAccountResponse, LoginRequest, TokenResponse,
};
use crate::presentation::middleware::AuthAccount;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new account
pub async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let created = state
        .accounts
        .create_account(&body.username, body.password.as_str())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let logged_in = state
        .accounts
        .login(&body.username, body.password.as_str())
        .await?;

    Ok(Json(logged_in.into()))
}

/// The account the bearer token was issued to
pub async fn current_account(
    Extension(auth): Extension<AuthAccount>,
) -> Json<CurrentAccountResponse> {
    Json(CurrentAccountResponse {
        account_id: auth.account_id,
    })
}
