//! Errors returned by tree operations.

/// Errors triggered by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The item asked to be removed is not stored in the tree.
    #[error("item not present in tree")]
    NotFound,
}
