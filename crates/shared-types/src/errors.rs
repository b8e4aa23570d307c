//! # Error Types
//!
//! Errors shared across subsystems: record codec and version failures.

use thiserror::Error;

/// Errors raised when decoding persisted ledger records.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// Record version not supported by this build.
    #[error("unsupported record version: received {received}, supported {supported}")]
    UnsupportedVersion { received: u16, supported: u16 },

    /// Record bytes failed to decode.
    #[error("record codec failure: {0}")]
    Codec(String),
}

impl From<bincode::Error> for LedgerError {
    fn from(err: bincode::Error) -> Self {
        Self::Codec(err.to_string())
    }
}
