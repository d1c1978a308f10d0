//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant, whichever keeps error sites
//! clean.

use thiserror::Error;

/// The top-level error type for `fare-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown vehicle mode {0:?}: expected \"bus\", \"car\", \"train\", or \"plane\"")]
    UnknownMode(String),
}

/// Shorthand result type for all `fare-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
