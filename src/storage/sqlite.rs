//! SQLite storage implementation

use std::path::Path;
use std::time::Duration;
use rusqlite::{Connection, Transaction, TransactionBehavior, params};
use crate::{Error, Result};
use crate::config::ensure_db_dir;
use super::schema;

/// How long a call waits for another process to release the write lock
pub const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed bucket store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates it and its directory if missing)
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_lock_timeout(path, LOCK_TIMEOUT)
    }

    /// Open a database file, giving up on a locked database after `timeout`
    pub fn open_with_lock_timeout(path: &Path, timeout: Duration) -> Result<Self> {
        ensure_db_dir(path)?;
        create_db_file(path)?;

        let open_err = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open(path).map_err(open_err)?;
        conn.busy_timeout(timeout).map_err(open_err)?;
        let store = Self { conn };
        store.initialize_schema().map_err(open_err)?;

        tracing::debug!("Opened database {} (lock timeout {:?})", path.display(), timeout);
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> rusqlite::Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Run `f` inside a write transaction.
    ///
    /// The transaction commits when `f` returns `Ok` and rolls back otherwise.
    pub fn update<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Tx<'_>) -> Result<T>,
    {
        let tx = Tx {
            inner: self
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)?,
        };
        let out = f(&tx)?;
        tx.inner.commit()?;
        Ok(out)
    }

    /// Close the connection, surfacing any error from the engine
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))
    }
}

/// Create the database file with owner-only permissions if it doesn't exist yet
fn create_db_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path).map(drop).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// An open write transaction
pub struct Tx<'conn> {
    inner: Transaction<'conn>,
}

impl Tx<'_> {
    /// Get a bucket, creating it if it doesn't exist yet
    pub fn ensure_bucket(&self, name: &str) -> Result<Bucket<'_>> {
        self.inner
            .execute("INSERT OR IGNORE INTO buckets (name) VALUES (?1)", [name])
            .map_err(|source| Error::Bucket {
                bucket: name.to_string(),
                source,
            })?;

        Ok(Bucket {
            conn: &self.inner,
            name: name.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn has_bucket(&self, name: &str) -> Result<bool> {
        let count: i64 = self.inner.query_row(
            "SELECT COUNT(*) FROM buckets WHERE name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

/// A named key/value namespace inside a transaction
pub struct Bucket<'tx> {
    conn: &'tx Connection,
    name: String,
}

impl Bucket<'_> {
    /// Insert or replace a value
    pub fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO entries (bucket, key, value) VALUES (?1, ?2, ?3)",
                params![self.name, key, value],
            )
            .map_err(|source| Error::Write {
                bucket: self.name.clone(),
                key: key.to_string(),
                source,
            })?;
        Ok(())
    }

    /// Visit every pair in ascending key order.
    ///
    /// Stops at the first error returned by `f`.
    pub fn for_each<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&str, &[u8]) -> Result<()>,
    {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM entries WHERE bucket = ?1 ORDER BY key")?;
        let mut rows = stmt.query([&self.name])?;

        while let Some(row) = rows.next()? {
            let key: String = row.get(0)?;
            let value: Vec<u8> = row.get(1)?;
            f(&key, &value)?;
        }
        Ok(())
    }
}
