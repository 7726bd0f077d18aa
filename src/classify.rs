//! Input classification against the store.

use anyhow::Result;

use crate::normalize::normalize;
use crate::store::Store;

/// Outcome of examining a candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Absent, empty, or whitespace-only input
    Invalid,

    /// The normalized key is already stored
    Duplicate,

    /// Not seen before
    Novel,
}

/// Classify a raw input without modifying the store.
///
/// Missing and blank inputs collapse to [`Classification::Invalid`] before
/// any duplicate check runs.
pub fn classify(store: &Store, raw: Option<&str>) -> Result<Classification> {
    let Some(raw) = raw else {
        return Ok(Classification::Invalid);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Classification::Invalid);
    }

    if store.exists(&normalize(trimmed))? {
        Ok(Classification::Duplicate)
    } else {
        Ok(Classification::Novel)
    }
}
