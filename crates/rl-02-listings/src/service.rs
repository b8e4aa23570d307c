//! # Listing Service
//!
//! Implements the catalog command surface over a [`ListingStore`]. Every
//! mutation requires the owner's witness on the executing transfer; every
//! rejection is logged with its reason and surfaces as a false/empty
//! result, never a panic.

use crate::domain::entities::Announcement;
use crate::errors::ListingError;
use crate::ports::inbound::ListingCatalog;
use crate::ports::outbound::ListingStore;
use rl_01_escrow::ports::outbound::TransferView;
use shared_types::{Address, Hash};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The announcement catalog service.
pub struct ListingService<S: ListingStore> {
    store: Arc<S>,
}

impl<S: ListingStore> ListingService<S> {
    /// Creates a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: ListingStore> ListingCatalog for ListingService<S> {
    fn register_room_and_owner(
        &self,
        view: &dyn TransferView,
        room_hash: Hash,
        owner: Address,
    ) -> bool {
        if !view.check_witness(owner) {
            warn!("room registration rejected: owner witness missing");
            return false;
        }

        self.store.register_room_owner(room_hash, owner);
        debug!("room/owner registration recorded");
        true
    }

    fn create_announcement(
        &self,
        view: &dyn TransferView,
        room_hash: Hash,
        owner: Address,
        pay_period_days: u64,
        price: u64,
    ) -> Result<Option<Hash>, ListingError> {
        if !view.check_witness(owner) {
            warn!("announcement rejected: owner witness missing");
            return Ok(None);
        }

        if !self.store.room_owner_registered(room_hash, owner) {
            warn!("announcement rejected: room/owner pair not registered");
            return Ok(None);
        }

        let announcement = Announcement {
            room_hash,
            owner,
            pay_period_days,
            price,
        };
        let key = announcement.key();
        self.store.put_announcement(key, &announcement)?;

        info!(key = %hex::encode(&key[..4]), "announcement published");
        Ok(Some(key))
    }

    fn check_room_and_owner(&self, room_hash: Hash, owner: Address) -> bool {
        self.store.room_owner_registered(room_hash, owner)
    }

    fn check_announcement(&self, key: Hash) -> Result<bool, ListingError> {
        Ok(self.store.get_announcement(key)?.is_some())
    }

    fn announcement_parameters(&self, key: Hash) -> Result<Announcement, ListingError> {
        self.store
            .get_announcement(key)?
            .ok_or(ListingError::UnknownAnnouncement(key))
    }
}

// =============================================================================
// TESTS
// =============================================================================
