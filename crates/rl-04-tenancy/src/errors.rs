//! # Error Types

use shared_types::{Hash, LedgerError};
use thiserror::Error;

/// Errors from the rent-contract lifecycle.
#[derive(Debug, Clone, Error)]
pub enum TenancyError {
    /// No contract exists under the given key.
    #[error("rent contract not found: 0x{}", hex::encode(.0))]
    UnknownContract(Hash),

    /// A contract already exists under the given key.
    #[error("rent contract already exists: 0x{}", hex::encode(.0))]
    ContractExists(Hash),

    /// A persisted record failed to decode.
    #[error(transparent)]
    Record(#[from] LedgerError),
}
