//! Install records
//!
//! Each record type lives in its own bucket and is keyed by its name.
//! Field names are the stored JSON contract and must not change.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record that can be stored in a named bucket
pub trait Record: Serialize + DeserializeOwned {
    /// Bucket that holds records of this type
    const BUCKET: &'static str;

    /// Key the record is stored under
    fn key(&self) -> &str;
}

/// An installed package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(rename = "checkSum")]
    pub checksum: String,
    pub version: String,
    pub path: String,
    pub installed: DateTime<Utc>,
}

impl Package {
    pub fn new(
        name: impl Into<String>,
        checksum: impl Into<String>,
        version: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            checksum: checksum.into(),
            version: version.into(),
            path: path.into(),
            installed: Utc::now(),
        }
    }

    pub fn installed_at(mut self, installed: DateTime<Utc>) -> Self {
        self.installed = installed;
        self
    }
}

impl Record for Package {
    const BUCKET: &'static str = "packages";

    fn key(&self) -> &str {
        &self.name
    }
}

/// An installed plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub path: String,
    pub installed: DateTime<Utc>,
}

impl Plugin {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            path: path.into(),
            installed: Utc::now(),
        }
    }

    pub fn installed_at(mut self, installed: DateTime<Utc>) -> Self {
        self.installed = installed;
        self
    }
}

impl Record for Plugin {
    const BUCKET: &'static str = "plugins";

    fn key(&self) -> &str {
        &self.name
    }
}
