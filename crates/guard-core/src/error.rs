//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `GuardError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `guard-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `guard-*` crates.
pub type GuardResult<T> = Result<T, GuardError>;
