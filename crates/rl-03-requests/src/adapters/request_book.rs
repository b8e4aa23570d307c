//! # In-Memory Request Book
//!
//! Pending requests persisted as versioned bytes, with one
//! insertion-ordered id index per owner.

use crate::domain::entities::{RentRequest, RequestId};
use crate::errors::RequestError;
use crate::ports::outbound::RequestStore;
use shared_types::envelope::{decode_record, encode_record};
use shared_types::Address;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory negotiation storage.
#[derive(Debug, Default)]
pub struct InMemoryRequestBook {
    /// `(owner, id)` -> versioned record bytes.
    requests: RwLock<HashMap<(Address, RequestId), Vec<u8>>>,
    /// Owner -> live request ids, in creation order.
    index: RwLock<HashMap<Address, Vec<RequestId>>>,
}

impl InMemoryRequestBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestStore for InMemoryRequestBook {
    fn insert(&self, owner: Address, request: &RentRequest) -> Result<(), RequestError> {
        let bytes = encode_record(request)?;
        self.requests
            .write()
            .unwrap()
            .insert((owner, request.id), bytes);

        let mut index = self.index.write().unwrap();
        let ids = index.entry(owner).or_default();
        if !ids.contains(&request.id) {
            ids.push(request.id);
        }
        Ok(())
    }

    fn get(&self, owner: Address, id: RequestId) -> Result<Option<RentRequest>, RequestError> {
        match self.requests.read().unwrap().get(&(owner, id)) {
            Some(bytes) => Ok(Some(decode_record(bytes)?)),
            None => Ok(None),
        }
    }

    fn remove(&self, owner: Address, id: RequestId) -> Result<(), RequestError> {
        self.requests.write().unwrap().remove(&(owner, id));
        if let Some(ids) = self.index.write().unwrap().get_mut(&owner) {
            ids.retain(|r| *r != id);
        }
        Ok(())
    }

    fn contains(&self, owner: Address, id: RequestId) -> bool {
        self.requests.read().unwrap().contains_key(&(owner, id))
    }

    fn ids(&self, owner: Address) -> Vec<RequestId> {
        self.index
            .read()
            .unwrap()
            .get(&owner)
            .cloned()
            .unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================
