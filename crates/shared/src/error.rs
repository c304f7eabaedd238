//! Storage collaborator error type.

use thiserror::Error;

/// Opaque failure reported by a storage collaborator.
///
/// The core never inspects store failures beyond their message; retry and
/// recovery policy belongs to the embedding application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage failure: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Creates a store error from any displayable cause.
    #[must_use]
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}
