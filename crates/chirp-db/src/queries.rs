use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

use crate::Database;
use crate::models::{AccountRow, MessageRow};

impl Database {
    // -- Accounts --

    /// Insert a new account and return the generated id.
    pub fn insert_account(&self, username: &str, password: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO accounts (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| query_account_by_id(conn, id))
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| query_account_by_username(conn, username))
    }

    // -- Messages --

    /// Insert a new message and return the generated id.
    pub fn insert_message(&self, posted_by: i64, text: &str, posted_at: i64) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (posted_by, message_text, posted_at) VALUES (?1, ?2, ?3)",
                params![posted_by, text, posted_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_message_by_id(&self, id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| query_message_by_id(conn, id))
    }

    /// All stored messages, in storage order — callers must not assume any
    /// particular ordering.
    pub fn get_all_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "SELECT id, posted_by, message_text, posted_at FROM messages",
                params![],
            )
        })
    }

    pub fn get_messages_by_account(&self, account_id: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "SELECT id, posted_by, message_text, posted_at FROM messages
                 WHERE posted_by = ?1",
                params![account_id],
            )
        })
    }

    /// Overwrite the text of an existing message. Returns the number of rows
    /// changed (0 when no such id exists).
    pub fn update_message_text(&self, id: i64, text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE messages SET message_text = ?1 WHERE id = ?2",
                params![text, id],
            )?;
            Ok(changed)
        })
    }

    /// Delete a message by id. A missing id is a no-op, not an error; the
    /// returned row count is 0 in that case.
    pub fn delete_message(&self, id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM messages WHERE id = ?1", params![id])?;
            Ok(changed)
        })
    }
}

fn query_account_by_id(conn: &Connection, id: i64) -> Result<Option<AccountRow>> {
    let mut stmt = conn.prepare("SELECT id, username, password FROM accounts WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(AccountRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_account_by_username(conn: &Connection, username: &str) -> Result<Option<AccountRow>> {
    let mut stmt =
        conn.prepare("SELECT id, username, password FROM accounts WHERE username = ?1")?;

    let row = stmt
        .query_row([username], |row| {
            Ok(AccountRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_message_by_id(conn: &Connection, id: i64) -> Result<Option<MessageRow>> {
    let mut stmt =
        conn.prepare("SELECT id, posted_by, message_text, posted_at FROM messages WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                posted_by: row.get(1)?,
                message_text: row.get(2)?,
                posted_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_messages(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare(sql)?;

    let rows = stmt
        .query_map(params, |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                posted_by: row.get(1)?,
                message_text: row.get(2)?,
                posted_at: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
