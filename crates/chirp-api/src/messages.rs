use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use chirp_types::api::{CreateMessageRequest, UpdateMessageRequest};

use crate::accounts::AppState;

/// POST /messages — 400 when validation rejects the message (empty or
/// over-length text, or an author id no account carries).
pub async fn create_message(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    // Run blocking DB work off the async runtime
    let svc = state.messages.clone();
    let created = tokio::task::spawn_blocking(move || svc.create_message(&req))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match created {
        Some(message) => Ok(Json(message)),
        None => Err(StatusCode::BAD_REQUEST),
    }
}

pub async fn get_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    let svc = state.messages.clone();
    let messages = tokio::task::spawn_blocking(move || svc.get_all_messages())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(messages))
}

/// GET /messages/{id} — always 200; the body carries the message, or stays
/// empty when no such id exists (absence is not an error here).
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, StatusCode> {
    let svc = state.messages.clone();
    let found = tokio::task::spawn_blocking(move || svc.get_message_by_id(id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match found {
        Some(message) => Ok(Json(message).into_response()),
        None => Ok(().into_response()),
    }
}

/// DELETE /messages/{id} — idempotent: "1" when a row was removed, an empty
/// body (still 200) when the id was already absent.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, StatusCode> {
    let svc = state.messages.clone();
    let deleted = tokio::task::spawn_blocking(move || svc.delete_message_by_id(id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(if deleted { "1" } else { "" })
}

/// PATCH /messages/{id} — replaces the text and nothing else; 400 with an
/// empty body when the id is unknown or the new text fails validation.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<&'static str, StatusCode> {
    let svc = state.messages.clone();
    let updated = tokio::task::spawn_blocking(move || svc.update_message_by_id(id, &req))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if updated {
        Ok("1")
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, StatusCode> {
    let svc = state.messages.clone();
    let messages = tokio::task::spawn_blocking(move || svc.get_messages_by_account_id(account_id))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(messages))
}
