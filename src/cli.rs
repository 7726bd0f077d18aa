//! Command-line interface.
//!
//! One optional flag; everything else happens inside the interactive
//! session.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::config;
use crate::session;
use crate::store::Store;

/// Persistent duplicate-rejecting value store
#[derive(Parser, Debug)]
#[command(name = "dedup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Drop and recreate the table at startup (start fresh)
    #[arg(long)]
    pub reset: bool,
}

impl Cli {
    /// Acquire the store, then hand control to the session loop.
    ///
    /// The connection lives for the whole process and is released when the
    /// store drops on return.
    pub fn execute(self) -> Result<()> {
        let db_path = config::database_path()?;
        debug!(path = %db_path.display(), reset = self.reset, "starting session");

        let store = Store::open(&db_path)?;
        store
            .initialize(self.reset)
            .context("Failed to initialize entry table")?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        session::run(&store, stdin.lock(), &mut stdout.lock())
    }
}
