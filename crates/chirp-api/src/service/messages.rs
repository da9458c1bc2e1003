use std::sync::Arc;

use anyhow::Result;

use chirp_db::Database;
use chirp_db::models::MessageRow;
use chirp_types::api::{CreateMessageRequest, UpdateMessageRequest};
use chirp_types::models::Message;

/// Inclusive upper bound on message text length, in Unicode codepoints.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Message validation, creation, retrieval, update and deletion rules.
/// Uses the store for both message rows and the author-existence check.
#[derive(Clone)]
pub struct MessageService {
    db: Arc<Database>,
}

impl MessageService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Validated create. `None` means the message was rejected: empty text,
    /// text over 255 codepoints, or no account with id == `posted_by` at
    /// this moment. The author check is advisory and not re-run later.
    pub fn create_message(&self, req: &CreateMessageRequest) -> Result<Option<Message>> {
        if !text_is_valid(&req.message_text) {
            return Ok(None);
        }
        if self.db.get_account_by_id(req.posted_by)?.is_none() {
            return Ok(None);
        }

        let id = self
            .db
            .insert_message(req.posted_by, &req.message_text, req.posted_at)?;
        Ok(Some(Message {
            id,
            posted_by: req.posted_by,
            message_text: req.message_text.clone(),
            posted_at: req.posted_at,
        }))
    }

    pub fn get_all_messages(&self) -> Result<Vec<Message>> {
        Ok(self
            .db
            .get_all_messages()?
            .into_iter()
            .map(message_from_row)
            .collect())
    }

    pub fn get_message_by_id(&self, id: i64) -> Result<Option<Message>> {
        Ok(self.db.get_message_by_id(id)?.map(message_from_row))
    }

    /// Idempotent delete: `true` when exactly one row was removed, `false`
    /// when the id was already absent.
    pub fn delete_message_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.db.delete_message(id)? > 0)
    }

    /// Text-only update. The stored id, author and timestamp are never
    /// touched; any id in the request body is ignored in favor of `id`.
    /// `false` when the replacement text fails validation or no message
    /// with `id` exists.
    pub fn update_message_by_id(&self, id: i64, update: &UpdateMessageRequest) -> Result<bool> {
        if !text_is_valid(&update.message_text) {
            return Ok(false);
        }
        Ok(self.db.update_message_text(id, &update.message_text)? > 0)
    }

    pub fn get_messages_by_account_id(&self, account_id: i64) -> Result<Vec<Message>> {
        Ok(self
            .db
            .get_messages_by_account(account_id)?
            .into_iter()
            .map(message_from_row)
            .collect())
    }
}

// Empty means zero-length exactly, no trimming. Length counts codepoints,
// and 255 of them is still valid.
fn text_is_valid(text: &str) -> bool {
    !text.is_empty() && text.chars().count() <= MAX_MESSAGE_LEN
}

fn message_from_row(row: MessageRow) -> Message {
    Message {
        id: row.id,
        posted_by: row.posted_by,
        message_text: row.message_text,
        posted_at: row.posted_at,
    }
}
