//! Database Connection Management
//!
//! Opens the SQLite file that backs the blob namespace.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::schema::{get_schema_version, init_schema};
use super::{blobs, BlobStore, StorageResult};

const IN_MEMORY: &str = ":memory:";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: PathBuf,
    /// Enable WAL mode for file databases
    pub wal_mode: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            wal_mode: true,
        }
    }
}

impl DatabaseConfig {
    /// Create config for in-memory database (testing)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(IN_MEMORY),
            wal_mode: false,
        }
    }

    /// Create config for a specific path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    fn is_in_memory(&self) -> bool {
        self.path.to_str() == Some(IN_MEMORY)
    }
}

/// Get default database path (<data dir>/formdesk/formdesk.db)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formdesk")
        .join("formdesk.db")
}

/// Database wrapper with connection management
pub struct Database {
    conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Open or create a database with the given config
    pub fn open(config: DatabaseConfig) -> StorageResult<Self> {
        let conn = if config.is_in_memory() {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = config.path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX;
            Connection::open_with_flags(&config.path, flags)?
        };

        if config.wal_mode && !config.is_in_memory() {
            conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        }

        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        init_schema(&conn)?;

        tracing::debug!(
            path = %config.path.display(),
            schema_version = get_schema_version(&conn)?,
            "opened blob database"
        );
        Ok(Self { conn, config })
    }

    /// Open in-memory database for testing
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::open(DatabaseConfig::in_memory())
    }

    /// Get database path
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl BlobStore for Database {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        blobs::get_blob(&self.conn, key)
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        blobs::put_blob(&self.conn, key, value)
    }
}
