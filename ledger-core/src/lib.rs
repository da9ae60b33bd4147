//! Ledger Core
//!
//! Minimal thread-safe single-account ledger: one balance behind a
//! mutex, safe to mutate from any number of concurrent callers.
//!
//! # Architecture
//!
//! - **Shared Handle**: `Ledger` is a cheap clone over reference-counted
//!   state; every worker holds its own handle to the same balance
//! - **Single Guard**: one private mutex serializes every mutation
//! - **Validation First**: amounts are checked before the lock is taken,
//!   so a rejected call never touches shared state
//!
//! # Invariants
//!
//! - Non-negative balance: balance >= 0 at every point where no caller
//!   holds the guard
//! - Serialized mutations: each deposit/withdraw is an atomic
//!   read-modify-write; no partial update is observable
//! - Guaranteed release: the guard is released on every exit path

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod error;
pub mod ledger;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use ledger::Ledger;
