//! # Error Types

use crate::domain::entities::RequestId;
use rl_02_listings::errors::ListingError;
use rl_04_tenancy::errors::TenancyError;
use shared_types::LedgerError;
use thiserror::Error;

/// Errors from the negotiation layer.
///
/// Nested cross-contract failures are carried through unchanged so the
/// outer dispatch can report the originating subsystem.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// No pending request exists under the fingerprint.
    #[error("rent request not found: {0:?}")]
    UnknownRequest(RequestId),

    /// The listings subsystem aborted the nested call.
    #[error("listing lookup failed: {0}")]
    Listing(#[from] ListingError),

    /// The tenancy subsystem aborted the nested call.
    #[error("contract creation failed: {0}")]
    Tenancy(#[from] TenancyError),

    /// A persisted record failed to decode.
    #[error(transparent)]
    Record(#[from] LedgerError),
}
