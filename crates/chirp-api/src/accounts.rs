use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use chirp_types::api::{LoginRequest, RegisterRequest};

use crate::service::accounts::AccountService;
use crate::service::messages::MessageService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

/// POST /register — 409 when the username is already taken (a pre-check
/// against the store, not a schema constraint), otherwise the created
/// account with its generated id.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    // Check if username is taken
    if state
        .accounts
        .get_account_by_username(&req.username)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .is_some()
    {
        return Err(StatusCode::CONFLICT);
    }

    let account = state
        .accounts
        .create_account(&req.username, &req.password)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(account))
}

/// POST /login — 401 unless the username exists and the supplied password
/// matches the stored one exactly.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let account = state
        .accounts
        .verify_credentials(&req.username, &req.password)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(account))
}
