//! Database schema definitions

/// SQL to create the bucket registry
pub const CREATE_BUCKETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS buckets (
    name TEXT PRIMARY KEY
)
"#;

/// SQL to create the entries table
/// Every key/value pair lives here, namespaced by its bucket
pub const CREATE_ENTRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    bucket TEXT NOT NULL REFERENCES buckets(name),
    key TEXT NOT NULL,
    value BLOB NOT NULL,
    PRIMARY KEY (bucket, key)
) WITHOUT ROWID
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_BUCKETS_TABLE, CREATE_ENTRIES_TABLE]
}
