//! Domain types.

use chrono::{DateTime, Utc};

/// One persisted record representing a unique accepted value.
///
/// Entries are immutable once created. The only way to remove them is a
/// full-table reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Monotonically increasing identifier assigned by the store on insert
    pub id: i64,

    /// Original trimmed text as supplied by the user
    pub value: String,

    /// Canonical key derived from `value`; unique across all entries
    pub normalized: String,

    /// When the entry was inserted (UTC, second precision)
    pub created_at: DateTime<Utc>,
}
