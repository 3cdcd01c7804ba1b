//! # groom-db - install database for groom
//!
//! Records which packages and plugins groom has installed.
//!
//! groom-db provides:
//! - Database location resolution (`$XDG_DATA_HOME` or `~/.local/share`)
//! - A single-file SQLite store split into named buckets
//! - JSON records for packages and plugins
//! - A facade that opens, transacts and closes the store per call

pub mod config;
pub mod storage;
pub mod record;
pub mod codec;
pub mod database;
pub mod ui;

use std::path::PathBuf;

// Re-exports for convenient access
pub use config::database_path;
pub use record::{Package, Plugin, Record};
pub use database::{add_package, add_plugin, parse_database, Database, GroomDatabase};
pub use storage::SqliteStore;

/// Result type alias for groom-db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for groom-db operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot determine $HOME directory")]
    HomeDirUnavailable,

    #[error("failed to open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to prepare database file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open bucket '{bucket}': {source}")]
    Bucket {
        bucket: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to encode '{key}' for bucket '{bucket}': {source}")]
    Encode {
        bucket: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode '{key}' in bucket '{bucket}': {source}")]
    Decode {
        bucket: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write '{key}' into bucket '{bucket}': {source}")]
    Write {
        bucket: String,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
