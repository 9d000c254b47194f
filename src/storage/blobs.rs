//! Blob Queries
//!
//! Parameterized reads and full overwrites of keyed snapshots.

use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};

use super::StorageResult;

/// Get the blob stored under `key`
pub fn get_blob(conn: &Connection, key: &str) -> StorageResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM blobs WHERE key = ?1", [key], |row| row.get(0))
        .optional()?;
    Ok(value)
}

/// Overwrite the blob stored under `key`
pub fn put_blob(conn: &Connection, key: &str, value: &str) -> StorageResult<()> {
    conn.execute(
        r#"
        INSERT INTO blobs (key, value, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema::init_schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_key() {
        let conn = setup();
        assert_eq!(get_blob(&conn, "contacts").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let conn = setup();

        put_blob(&conn, "students", r#"[{"name":"Ann"}]"#).unwrap();
        put_blob(&conn, "students", "[]").unwrap();

        assert_eq!(get_blob(&conn, "students").unwrap().as_deref(), Some("[]"));

        let rows: i32 = conn
            .query_row("SELECT COUNT(*) FROM blobs WHERE key = 'students'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let conn = setup();

        put_blob(&conn, "students", "[1]").unwrap();
        put_blob(&conn, "contacts", "[2]").unwrap();

        assert_eq!(get_blob(&conn, "students").unwrap().as_deref(), Some("[1]"));
        assert_eq!(get_blob(&conn, "contacts").unwrap().as_deref(), Some("[2]"));
    }
}
