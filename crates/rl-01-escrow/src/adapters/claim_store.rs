//! # In-Memory Claim Store
//!
//! Claim persistence for tests and single-process deployments. Keeps the
//! transfer-to-claimant map and the per-claimant index consistent under
//! overwrites.

use crate::ports::outbound::ClaimStore;
use shared_types::{Address, TransferId};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory claim authorization records.
#[derive(Debug, Default)]
pub struct InMemoryClaimStore {
    /// Settled transfer -> authorized claimant.
    claims: RwLock<HashMap<TransferId, Address>>,
    /// Claimant -> claimable transfers, in authorization order.
    index: RwLock<HashMap<Address, Vec<TransferId>>>,
}

impl InMemoryClaimStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimStore for InMemoryClaimStore {
    fn authorize(&self, transfer: TransferId, claimant: Address) {
        let mut claims = self.claims.write().unwrap();
        let mut index = self.index.write().unwrap();

        if let Some(previous) = claims.insert(transfer, claimant) {
            if previous != claimant {
                if let Some(list) = index.get_mut(&previous) {
                    list.retain(|t| *t != transfer);
                }
            }
        }

        let list = index.entry(claimant).or_default();
        if !list.contains(&transfer) {
            list.push(transfer);
        }
    }

    fn claimant_of(&self, transfer: TransferId) -> Option<Address> {
        self.claims.read().unwrap().get(&transfer).copied()
    }

    fn claimable_by(&self, claimant: Address) -> Vec<TransferId> {
        self.index
            .read()
            .unwrap()
            .get(&claimant)
            .cloned()
            .unwrap_or_default()
    }

    fn revoke(&self, transfer: TransferId) {
        let mut claims = self.claims.write().unwrap();
        if let Some(claimant) = claims.remove(&transfer) {
            if let Some(list) = self.index.write().unwrap().get_mut(&claimant) {
                list.retain(|t| *t != transfer);
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
