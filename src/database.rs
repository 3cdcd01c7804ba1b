//! Database facade
//!
//! Every operation opens the store, runs one transaction and closes the store
//! again. No handle outlives a call.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::config;
use crate::record::{Package, Plugin, Record};
use crate::storage::{SqliteStore, Tx};
use crate::Result;

/// Snapshot of everything groom has installed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomDatabase {
    pub packages: BTreeMap<String, Package>,
    pub plugins: BTreeMap<String, Plugin>,
}

impl GroomDatabase {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.plugins.is_empty()
    }
}

/// Handle on a database file
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Database at the location resolved from the environment
    pub fn locate() -> Result<Self> {
        Ok(Self::at(config::database_path()?))
    }

    /// Database at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read both collections into memory, creating the buckets on first use
    pub fn parse(&self) -> Result<GroomDatabase> {
        let mut store = SqliteStore::open(&self.path)?;
        let snapshot = store.update(|tx| {
            Ok(GroomDatabase {
                packages: scan::<Package>(tx)?,
                plugins: scan::<Plugin>(tx)?,
            })
        })?;
        store.close()?;

        tracing::debug!(
            "Loaded {} packages and {} plugins from {}",
            snapshot.packages.len(),
            snapshot.plugins.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    /// Record a package, replacing any package with the same name
    pub fn add_package(&self, package: &Package) -> Result<()> {
        self.upsert(package)
    }

    /// Record a plugin, replacing any plugin with the same name
    pub fn add_plugin(&self, plugin: &Plugin) -> Result<()> {
        self.upsert(plugin)
    }

    fn upsert<R: Record>(&self, record: &R) -> Result<()> {
        let mut store = SqliteStore::open(&self.path)?;
        store.update(|tx| {
            let bucket = tx.ensure_bucket(R::BUCKET)?;
            let contents = codec::encode(record)?;
            bucket.put(record.key(), &contents)
        })?;
        store.close()?;

        tracing::debug!("Stored '{}' in {}", record.key(), R::BUCKET);
        Ok(())
    }
}

/// Decode every record in the bucket for `R`
fn scan<R: Record>(tx: &Tx<'_>) -> Result<BTreeMap<String, R>> {
    let bucket = tx.ensure_bucket(R::BUCKET)?;
    let mut records = BTreeMap::new();
    bucket.for_each(|key, value| {
        records.insert(key.to_string(), codec::decode::<R>(key, value)?);
        Ok(())
    })?;
    Ok(records)
}

/// Read every installed package and plugin
pub fn parse_database() -> Result<GroomDatabase> {
    Database::locate()?.parse()
}

/// Record an installed package
pub fn add_package(package: &Package) -> Result<()> {
    Database::locate()?.add_package(package)
}

/// Record an installed plugin
pub fn add_plugin(plugin: &Plugin) -> Result<()> {
    Database::locate()?.add_plugin(plugin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use chrono::{TimeZone, Utc};

    fn temp_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::at(config::default_database_path_in(dir.path()));
        (dir, db)
    }

    fn sample_package(name: &str, version: &str) -> Package {
        Package::new(name, "abc123", version, format!("/opt/{name}"))
            .installed_at(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn test_fresh_store_bootstrap() {
        let (_dir, db) = temp_db();
        assert!(!db.path().exists());

        let snapshot = db.parse().unwrap();

        assert!(snapshot.is_empty());
        assert!(db.path().is_file());

        let mut store = SqliteStore::open(db.path()).unwrap();
        let buckets = store
            .update(|tx| Ok((tx.has_bucket("packages")?, tx.has_bucket("plugins")?)))
            .unwrap();
        assert_eq!(buckets, (true, true));
    }

    #[test]
    fn test_add_package_then_parse() {
        let (_dir, db) = temp_db();
        let package = sample_package("foo", "1.0.0");

        db.add_package(&package).unwrap();
        let snapshot = db.parse().unwrap();

        assert_eq!(snapshot.packages.len(), 1);
        assert_eq!(snapshot.packages["foo"], package);
        assert!(snapshot.plugins.is_empty());
    }

    #[test]
    fn test_add_package_overwrites_same_name() {
        let (_dir, db) = temp_db();

        db.add_package(&sample_package("foo", "1.0.0")).unwrap();
        let newer = Package::new("foo", "def456", "2.0.0", "/usr/local/foo")
            .installed_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        db.add_package(&newer).unwrap();

        let snapshot = db.parse().unwrap();
        assert_eq!(snapshot.packages.len(), 1);
        assert_eq!(snapshot.packages["foo"], newer);
    }

    #[test]
    fn test_collections_are_isolated() {
        let (_dir, db) = temp_db();
        let plugin = Plugin::new("foo", "a plugin named like a package", "/opt/plugins/foo");

        db.add_plugin(&plugin).unwrap();

        let mut store = SqliteStore::open(db.path()).unwrap();
        let packages_bucket = store.update(|tx| tx.has_bucket("packages")).unwrap();
        assert!(!packages_bucket);
        drop(store);

        db.add_package(&sample_package("bar", "0.1.0")).unwrap();
        let snapshot = db.parse().unwrap();

        assert_eq!(snapshot.plugins.len(), 1);
        assert_eq!(snapshot.plugins["foo"], plugin);
        assert_eq!(snapshot.packages.keys().collect::<Vec<_>>(), vec!["bar"]);
    }

    #[test]
    fn test_add_package_leaves_plugins_untouched() {
        let (_dir, db) = temp_db();
        let package = sample_package("foo", "1.0.0");

        db.add_package(&package).unwrap();

        let mut store = SqliteStore::open(db.path()).unwrap();
        let plugins_bucket = store.update(|tx| tx.has_bucket("plugins")).unwrap();
        assert!(!plugins_bucket);
        drop(store);

        db.add_plugin(&Plugin::new("bar", "a plugin", "/opt/plugins/bar")).unwrap();
        let snapshot = db.parse().unwrap();

        assert_eq!(snapshot.packages.len(), 1);
        assert_eq!(snapshot.packages["foo"], package);
        assert_eq!(snapshot.plugins.keys().collect::<Vec<_>>(), vec!["bar"]);
    }

    #[test]
    fn test_corrupt_value_fails_whole_parse() {
        let (_dir, db) = temp_db();
        db.add_package(&sample_package("alpha", "1.0.0")).unwrap();
        db.add_package(&sample_package("zulu", "1.0.0")).unwrap();

        let mut store = SqliteStore::open(db.path()).unwrap();
        store
            .update(|tx| tx.ensure_bucket("packages")?.put("mike", b"{\"name\": truncated"))
            .unwrap();
        store.close().unwrap();

        let err = db.parse().unwrap_err();
        match err {
            Error::Decode { bucket, key, .. } => {
                assert_eq!(bucket, "packages");
                assert_eq!(key, "mike");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_snapshot_serializes_with_collection_fields() {
        let (_dir, db) = temp_db();
        db.add_package(&sample_package("foo", "1.0.0")).unwrap();

        let json = serde_json::to_value(db.parse().unwrap()).unwrap();

        assert_eq!(json["packages"]["foo"]["checkSum"], "abc123");
        assert!(json["plugins"].as_object().unwrap().is_empty());
    }
}
