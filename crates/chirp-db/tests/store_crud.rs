use chirp_db::Database;

#[test]
fn insert_and_get_account_roundtrip() {
    let db = Database::open_in_memory().unwrap();

    let id = db.insert_account("alice", "pw1").unwrap();
    assert!(id > 0);

    let row = db.get_account_by_id(id).unwrap().unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.username, "alice");
    assert_eq!(row.password, "pw1");
}

#[test]
fn account_ids_start_at_one_and_increase() {
    let db = Database::open_in_memory().unwrap();

    assert_eq!(db.insert_account("first", "x").unwrap(), 1);
    assert_eq!(db.insert_account("second", "y").unwrap(), 2);
}

#[test]
fn get_account_by_username_is_exact_match() {
    let db = Database::open_in_memory().unwrap();
    db.insert_account("alice", "pw1").unwrap();

    assert!(db.get_account_by_username("alice").unwrap().is_some());
    assert!(db.get_account_by_username("Alice").unwrap().is_none());
    assert!(db.get_account_by_username("bob").unwrap().is_none());
}

#[test]
fn store_accepts_duplicate_usernames() {
    // Username uniqueness is the service layer's invariant, not the store's.
    let db = Database::open_in_memory().unwrap();

    let a = db.insert_account("alice", "pw1").unwrap();
    let b = db.insert_account("alice", "pw2").unwrap();
    assert_ne!(a, b);
}

#[test]
fn insert_and_get_message_roundtrip() {
    let db = Database::open_in_memory().unwrap();
    let author = db.insert_account("alice", "pw1").unwrap();

    let id = db.insert_message(author, "hello there", 1_700_000_000_000).unwrap();

    let row = db.get_message_by_id(id).unwrap().unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.posted_by, author);
    assert_eq!(row.message_text, "hello there");
    assert_eq!(row.posted_at, 1_700_000_000_000);
}

#[test]
fn get_message_by_id_absent_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_message_by_id(42).unwrap().is_none());
}

#[test]
fn get_all_messages_returns_every_row() {
    let db = Database::open_in_memory().unwrap();
    let author = db.insert_account("alice", "pw1").unwrap();

    let a = db.insert_message(author, "one", 1).unwrap();
    let b = db.insert_message(author, "two", 2).unwrap();
    let c = db.insert_message(author, "three", 3).unwrap();

    let mut ids: Vec<i64> = db.get_all_messages().unwrap().iter().map(|m| m.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn get_messages_by_account_filters_by_author() {
    let db = Database::open_in_memory().unwrap();
    let alice = db.insert_account("alice", "pw1").unwrap();
    let bob = db.insert_account("bob", "pw2").unwrap();

    db.insert_message(alice, "from alice", 1).unwrap();
    db.insert_message(bob, "from bob", 2).unwrap();
    db.insert_message(alice, "alice again", 3).unwrap();

    let rows = db.get_messages_by_account(alice).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|m| m.posted_by == alice));

    assert!(db.get_messages_by_account(999).unwrap().is_empty());
}

#[test]
fn update_message_text_touches_only_text() {
    let db = Database::open_in_memory().unwrap();
    let author = db.insert_account("alice", "pw1").unwrap();
    let id = db.insert_message(author, "before", 77).unwrap();

    let changed = db.update_message_text(id, "after").unwrap();
    assert_eq!(changed, 1);

    let row = db.get_message_by_id(id).unwrap().unwrap();
    assert_eq!(row.message_text, "after");
    assert_eq!(row.posted_by, author);
    assert_eq!(row.posted_at, 77);
}

#[test]
fn update_absent_message_changes_no_rows() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.update_message_text(42, "anything").unwrap(), 0);
}

#[test]
fn delete_message_reports_rows_changed_and_absent_id_is_noop() {
    let db = Database::open_in_memory().unwrap();
    let author = db.insert_account("alice", "pw1").unwrap();
    let id = db.insert_message(author, "short lived", 1).unwrap();

    assert_eq!(db.delete_message(id).unwrap(), 1);
    assert!(db.get_message_by_id(id).unwrap().is_none());

    // repeat delete is a no-op, not an error
    assert_eq!(db.delete_message(id).unwrap(), 0);
}
