//! Errors raised by the runtime capability queries.
//!
//! The type-level surface never fails at runtime: a missing capability is a
//! compile error. These errors come from the value-level mirror, where
//! categories are inspected or combined dynamically.

use thiserror::Error;

use crate::category::{Access, Category, Operation};

/// A capability query that has no answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Neither access kind implies the other.
    #[error("access kinds `{0}` and `{1}` are unrelated; no meet exists")]
    UnrelatedAccess(Access, Access),

    /// The two categories disagree on direction between their components.
    #[error("categories `{0}` and `{1}` are unrelated; no meet exists")]
    UnrelatedCategory(Category, Category),

    /// The operation is absent from a cursor of this category.
    #[error("`{operation}` is not available on a `{category}` cursor")]
    Unsupported {
        operation: Operation,
        category: Category,
    },
}
