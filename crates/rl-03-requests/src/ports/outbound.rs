//! # Driven Ports (Outbound)
//!
//! What the negotiation layer depends on: request persistence, announcement
//! resolution and rent-contract creation. The latter two are synchronous
//! nested cross-contract calls; their failures abort the outer operation.

use crate::domain::entities::{RentRequest, RequestId};
use crate::errors::RequestError;
use rl_01_escrow::ports::outbound::TransferView;
use rl_02_listings::domain::entities::Announcement;
use rl_04_tenancy::domain::entities::LeaseTerms;
use shared_types::{Address, Hash};

/// Persistence for pending requests.
///
/// Each owner holds a map of live requests plus an insertion-ordered,
/// duplicate-free index of their ids; removal preserves the relative order
/// of the remaining entries.
pub trait RequestStore: Send + Sync {
    /// Persists a new request and appends its id to the owner's index.
    ///
    /// Callers check for an existing fingerprint first; inserting over a
    /// live request is a store-level overwrite of the record but never
    /// duplicates the index entry.
    fn insert(&self, owner: Address, request: &RentRequest) -> Result<(), RequestError>;

    /// Loads a request, `None` if unknown.
    fn get(&self, owner: Address, id: RequestId) -> Result<Option<RentRequest>, RequestError>;

    /// Removes a request and its index entry.
    fn remove(&self, owner: Address, id: RequestId) -> Result<(), RequestError>;

    /// Whether a live request exists under the fingerprint.
    fn contains(&self, owner: Address, id: RequestId) -> bool;

    /// The owner's live request ids, in creation order.
    fn ids(&self, owner: Address) -> Vec<RequestId>;
}

/// Announcement resolution, backed by the listings subsystem.
pub trait ListingDirectory: Send + Sync {
    /// Resolves an announcement's frozen terms; a miss aborts the caller.
    fn announcement_parameters(&self, key: Hash) -> Result<Announcement, RequestError>;
}

/// Rent-contract creation, backed by the tenancy subsystem.
pub trait TenancyFactory: Send + Sync {
    /// Opens a rent contract and returns its key; failures abort the caller.
    fn create(&self, view: &dyn TransferView, terms: LeaseTerms) -> Result<Hash, RequestError>;
}
