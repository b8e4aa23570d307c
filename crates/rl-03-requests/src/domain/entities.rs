//! # Request Entities
//!
//! The rent request and its fingerprint.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_types::{Address, Hash, TransferId};
use std::fmt;

/// Fingerprint of a rent request: the announcement hash joined with the
/// tenant identity. One live request may exist per fingerprint and owner.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(#[serde_as(as = "Bytes")] pub [u8; 52]);

impl RequestId {
    /// Builds the fingerprint for a tenant applying to an announcement.
    #[must_use]
    pub fn new(announcement: Hash, tenant: Address) -> Self {
        let mut bytes = [0u8; 52];
        bytes[..32].copy_from_slice(&announcement);
        bytes[32..].copy_from_slice(&tenant);
        Self(bytes)
    }

    /// The announcement component.
    #[must_use]
    pub fn announcement(&self) -> Hash {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&self.0[..32]);
        hash
    }

    /// The tenant component.
    #[must_use]
    pub fn tenant(&self) -> Address {
        let mut address = [0u8; 20];
        address.copy_from_slice(&self.0[32..]);
        address
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId(0x{}...)", hex::encode(&self.0[..4]))
    }
}

/// A tenant's pending application for an announced room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRequest {
    /// The announcement applied to.
    pub announcement: Hash,
    /// Applying tenant.
    pub tenant: Address,
    /// Fingerprint; redundant with the two fields above but persisted for
    /// index symmetry with the live-id list.
    pub id: RequestId,
    /// Requested term in days; 0 means open-ended.
    pub term_days: u64,
    /// The transfer that escrowed the tenant's deposit.
    pub deposit_transfer: TransferId,
}

impl RentRequest {
    /// Builds a request, deriving its fingerprint.
    #[must_use]
    pub fn new(
        announcement: Hash,
        tenant: Address,
        term_days: u64,
        deposit_transfer: TransferId,
    ) -> Self {
        Self {
            announcement,
            tenant,
            id: RequestId::new(announcement, tenant),
            term_days,
            deposit_transfer,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
