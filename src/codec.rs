//! JSON codec for stored records

use crate::record::Record;
use crate::{Error, Result};

/// Serialize a record into the bytes stored in its bucket
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|source| Error::Encode {
        bucket: R::BUCKET.to_string(),
        key: record.key().to_string(),
        source,
    })
}

/// Deserialize the value stored under `key`
pub fn decode<R: Record>(key: &str, bytes: &[u8]) -> Result<R> {
    serde_json::from_slice(bytes).map_err(|source| Error::Decode {
        bucket: R::BUCKET.to_string(),
        key: key.to_string(),
        source,
    })
}
