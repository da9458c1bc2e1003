use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::accounts::{self, AppState};
use crate::messages;

/// The full HTTP surface. Middleware layers (trace, CORS) are applied by
/// the server binary on top of this router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/messages", post(messages::create_message))
        .route("/messages", get(messages::get_messages))
        .route("/messages/{id}", get(messages::get_message))
        .route("/messages/{id}", delete(messages::delete_message))
        .route("/messages/{id}", patch(messages::update_message))
        .route("/accounts/{id}/messages", get(messages::get_messages_by_account))
        .with_state(state)
}
