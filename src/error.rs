//! Error types for the aged cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the aged cache.
///
/// The only fallible operation is `put`; lookups report absence through
/// `Option`, never through an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A required argument was absent (empty key or value)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// == Result Type Alias ==
/// Convenience Result type for the aged cache.
pub type Result<T> = std::result::Result<T, CacheError>;
