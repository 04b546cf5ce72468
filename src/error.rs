//! Error types for pattern index construction.
//!
//! Queries never fail; the only fallible operation is inserting a pattern.

use thiserror::Error;

/// Result type alias for index construction.
pub type Result<T> = core::result::Result<T, PatternError>;

/// Errors raised while building a [`PatternIndex`](crate::PatternIndex).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// Attempted to insert an empty pattern (PATTERN-001).
    ///
    /// An empty pattern would "occur" at every offset of every text.
    #[error("[PATTERN-001] invalid pattern: pattern must be non-empty")]
    InvalidPattern,
}
