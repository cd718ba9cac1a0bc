//! Error types for placement computation

use crate::roster::EntryId;
use thiserror::Error;

/// Result type for placement operations
pub type PlacementResult<T> = Result<T, PlacementError>;

/// Placement computation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// Points value is NaN or infinite
    #[error("Entry {entry_id} has non-finite points")]
    NonFinitePoints { entry_id: EntryId },

    /// Entry ID listed more than once for the same table
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(EntryId),
}
