//! # Catalog Entities
//!
//! The announcement record and its deterministic keys.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{Address, Hash};

/// A published rental announcement.
///
/// Immutable once created; its existence implies the owner previously
/// proved room ownership via a registration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Content hash identifying the room.
    pub room_hash: Hash,
    /// Identity of the registered owner.
    pub owner: Address,
    /// Length of one rent period in days.
    pub pay_period_days: u64,
    /// Rent due per period, in base units.
    pub price: u64,
}

impl Announcement {
    /// Deterministic catalog key: content hash of all four fields.
    #[must_use]
    pub fn key(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(self.room_hash);
        hasher.update(self.owner);
        hasher.update(self.pay_period_days.to_be_bytes());
        hasher.update(self.price.to_be_bytes());
        hasher.finalize().into()
    }
}

// =============================================================================
// TESTS
// =============================================================================
