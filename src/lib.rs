//! dedup - persistent duplicate-rejecting value store.
//!
//! Accepts textual entries interactively, normalizes them, and keeps only
//! the first occurrence of each normalized value in a SQLite table.
//!
//! # Architecture
//!
//! Data flows one direction:
//! raw input → normalizer → classifier (consults the store) → store
//! (conditionally) → session loop (prints the outcome).
//!
//! # Modules
//!
//! - `normalize`: canonical-key derivation
//! - `classify`: invalid / duplicate / novel decision
//! - `store`: SQLite persistence with the uniqueness constraint
//! - `session`: interactive read-eval-print loop
//! - `cli`: argument parsing and startup
//! - `config`: database location
//!
//! # Usage
//!
//! ```bash
//! # Open the store and start the session
//! dedup
//!
//! # Drop and recreate the table first
//! dedup --reset
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod domain;
pub mod normalize;
pub mod session;
pub mod store;

// Re-export main types at crate root for convenience
pub use classify::{classify, Classification};
pub use domain::Entry;
pub use normalize::normalize;
pub use store::{Store, StoreError};
