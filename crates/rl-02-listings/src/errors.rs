//! # Error Types

use shared_types::{Hash, LedgerError};
use thiserror::Error;

/// Errors from the announcement catalog.
#[derive(Debug, Clone, Error)]
pub enum ListingError {
    /// No announcement exists under the given key.
    #[error("announcement not found: 0x{}", hex::encode(.0))]
    UnknownAnnouncement(Hash),

    /// A persisted record failed to decode.
    #[error(transparent)]
    Record(#[from] LedgerError),
}
