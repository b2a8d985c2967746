//! Authentication Middleware
//!
//! Bearer token validation for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::domain::AccountId;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated account extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthAccount {
    pub account_id: AccountId,
}

/// Authentication middleware that validates bearer tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Authorization(bearer) = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Unauthorized("Missing or malformed authorization header".into()))?;

    let account_id = state.tokens.verify(bearer.token())?;

    request.extensions_mut().insert(AuthAccount { account_id });

    Ok(next.run(request).await)
}
