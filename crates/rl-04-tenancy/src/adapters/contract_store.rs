//! # In-Memory Contract Store
//!
//! Contract records persisted as versioned bytes plus the termination
//! queue.

use crate::domain::entities::RentContract;
use crate::domain::queue::TerminationQueue;
use crate::errors::TenancyError;
use crate::ports::outbound::ContractStore;
use shared_types::envelope::{decode_record, encode_record};
use shared_types::Hash;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory tenancy storage.
#[derive(Debug, Default)]
pub struct InMemoryContractStore {
    /// Contract key -> versioned record bytes.
    contracts: RwLock<HashMap<Hash, Vec<u8>>>,
    /// Pending termination requests.
    queue: RwLock<TerminationQueue>,
}

impl InMemoryContractStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractStore for InMemoryContractStore {
    fn put_contract(&self, key: Hash, contract: &RentContract) -> Result<(), TenancyError> {
        let bytes = encode_record(contract)?;
        self.contracts.write().unwrap().insert(key, bytes);
        Ok(())
    }

    fn get_contract(&self, key: Hash) -> Result<Option<RentContract>, TenancyError> {
        match self.contracts.read().unwrap().get(&key) {
            Some(bytes) => Ok(Some(decode_record(bytes)?)),
            None => Ok(None),
        }
    }

    fn enqueue_termination(&self, key: Hash) -> bool {
        self.queue.write().unwrap().insert(key)
    }

    fn remove_termination(&self, key: Hash) {
        self.queue.write().unwrap().remove(key);
    }

    fn termination_requests(&self) -> Vec<Hash> {
        self.queue.read().unwrap().entries().to_vec()
    }
}

// =============================================================================
// TESTS
// =============================================================================
