//! # Driving Ports (Inbound)
//!
//! The catalog's command surface, invoked by owners and by the
//! request-negotiation subsystem.

use crate::domain::entities::Announcement;
use crate::errors::ListingError;
use rl_01_escrow::ports::outbound::TransferView;
use shared_types::{Address, Hash};

/// Announcement catalog commands.
pub trait ListingCatalog: Send + Sync {
    /// Records proof of room ownership. Requires the owner's witness;
    /// returns false otherwise.
    fn register_room_and_owner(
        &self,
        view: &dyn TransferView,
        room_hash: Hash,
        owner: Address,
    ) -> bool;

    /// Publishes an announcement and returns its catalog key.
    ///
    /// Requires the owner's witness and a prior room/owner registration;
    /// returns `Ok(None)` when either is missing.
    fn create_announcement(
        &self,
        view: &dyn TransferView,
        room_hash: Hash,
        owner: Address,
        pay_period_days: u64,
        price: u64,
    ) -> Result<Option<Hash>, ListingError>;

    /// Whether the `(owner, room_hash)` registration exists.
    fn check_room_and_owner(&self, room_hash: Hash, owner: Address) -> bool;

    /// Whether an announcement exists under `key`.
    fn check_announcement(&self, key: Hash) -> Result<bool, ListingError>;

    /// Resolves an announcement's parameters.
    ///
    /// A missing key is an aborting error: callers run inside a nested
    /// cross-contract call and must not proceed on a dangling reference.
    fn announcement_parameters(&self, key: Hash) -> Result<Announcement, ListingError>;
}
