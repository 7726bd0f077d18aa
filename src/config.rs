//! Database location resolution.
//!
//! Sources (highest priority first):
//! 1. `DEDUP_DB` environment variable
//! 2. Platform data directory (e.g. ~/.local/share/dedup/entries.db)

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "DEDUP_DB";

/// Resolve the database file path.
pub fn database_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(DB_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let data_dir =
        dirs::data_local_dir().context("Could not determine the platform data directory")?;

    Ok(data_dir.join("dedup").join("entries.db"))
}
