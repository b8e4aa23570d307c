//! # In-Memory Listing Store
//!
//! Persists announcements as versioned record bytes, the same shape a
//! production key/value backend would hold.

use crate::domain::entities::Announcement;
use crate::errors::ListingError;
use crate::ports::outbound::ListingStore;
use shared_types::envelope::{decode_record, encode_record};
use shared_types::{Address, Hash};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// In-memory catalog storage.
#[derive(Debug, Default)]
pub struct InMemoryListingStore {
    /// `(owner, room_hash)` registration table.
    registrations: RwLock<HashSet<(Address, Hash)>>,
    /// Announcement key -> versioned record bytes.
    announcements: RwLock<HashMap<Hash, Vec<u8>>>,
}

impl InMemoryListingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingStore for InMemoryListingStore {
    fn register_room_owner(&self, room_hash: Hash, owner: Address) {
        self.registrations
            .write()
            .unwrap()
            .insert((owner, room_hash));
    }

    fn room_owner_registered(&self, room_hash: Hash, owner: Address) -> bool {
        self.registrations
            .read()
            .unwrap()
            .contains(&(owner, room_hash))
    }

    fn put_announcement(&self, key: Hash, announcement: &Announcement) -> Result<(), ListingError> {
        let bytes = encode_record(announcement)?;
        self.announcements.write().unwrap().insert(key, bytes);
        Ok(())
    }

    fn get_announcement(&self, key: Hash) -> Result<Option<Announcement>, ListingError> {
        match self.announcements.read().unwrap().get(&key) {
            Some(bytes) => Ok(Some(decode_record(bytes)?)),
            None => Ok(None),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
