//! # Error Types
//!
//! Failures raised while validating witness records. Structural claim
//! rejections are not errors; they are reported through
//! [`crate::domain::services::ClaimVerdict`].

use shared_types::TransferId;
use thiserror::Error;

/// Errors from the escrow engine's witness handling.
#[derive(Debug, Clone, Error)]
pub enum EscrowError {
    /// The witness public key is not a valid Ed25519 point.
    #[error("malformed witness public key")]
    MalformedWitnessKey,

    /// The witness signature does not verify over the transfer id.
    #[error("witness signature rejected for transfer {0}")]
    WitnessRejected(TransferId),
}
