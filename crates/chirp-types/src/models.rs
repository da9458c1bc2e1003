use serde::{Deserialize, Serialize};

/// A registered user. Responses serialize the whole record, password
/// included — credentials are plaintext by contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A text post authored by an account. `posted_at` is an opaque
/// caller-supplied timestamp; the server never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub posted_at: i64,
}
