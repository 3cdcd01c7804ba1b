//! Storage Layer - SQLite-backed bucket store
//!
//! A single database file holds named buckets of key/value pairs:
//! - buckets(name)
//! - entries(bucket, key, value)
//!
//! Keys are UTF-8 names, values are opaque blobs (JSON records in practice).

pub mod schema;
pub mod sqlite;

pub use sqlite::{Bucket, SqliteStore, Tx};
