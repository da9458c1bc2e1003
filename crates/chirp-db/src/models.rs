//! Database row types — these map directly to SQLite rows.
//! Distinct from the chirp-types API models to keep the DB layer independent.

pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub struct MessageRow {
    pub id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub posted_at: i64,
}
