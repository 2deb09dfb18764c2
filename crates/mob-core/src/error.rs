//! Library error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `MobError` via `From` impls, or keep them separate and wrap `MobError`
//! as one variant. `mob-model` does the latter.
//!
//! Note what is deliberately *not* here: contract violations at query time
//! (e.g. asking a movement model for a path before it has been replicated
//! and placed) are programming errors and panic instead of returning a
//! degraded value.

use thiserror::Error;

/// The top-level error type for `mob-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MobError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `mob-*` crates.
pub type MobResult<T> = Result<T, MobError>;
