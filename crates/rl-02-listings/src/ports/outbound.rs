//! # Driven Ports (Outbound)
//!
//! Storage the catalog depends on: the room/owner registration table and
//! the announcement table. Adapters persist announcements as versioned
//! records.

use crate::domain::entities::Announcement;
use crate::errors::ListingError;
use shared_types::{Address, Hash};

/// Catalog persistence.
pub trait ListingStore: Send + Sync {
    /// Records that `owner` proved ownership of `room_hash`.
    fn register_room_owner(&self, room_hash: Hash, owner: Address);

    /// Whether the `(owner, room_hash)` registration exists.
    fn room_owner_registered(&self, room_hash: Hash, owner: Address) -> bool;

    /// Persists an announcement under its catalog key.
    fn put_announcement(&self, key: Hash, announcement: &Announcement) -> Result<(), ListingError>;

    /// Loads an announcement, `None` if the key is unknown.
    fn get_announcement(&self, key: Hash) -> Result<Option<Announcement>, ListingError>;
}
