//! # Termination Queue
//!
//! Termination requests awaiting manual confirmation. Insertion-ordered
//! with set semantics keyed by contract hash: re-requesting termination of
//! the same contract never grows the queue.

use serde::{Deserialize, Serialize};
use shared_types::Hash;

/// Pending termination requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationQueue {
    entries: Vec<Hash>,
}

impl TerminationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a contract, returning false if it was already pending.
    pub fn insert(&mut self, contract: Hash) -> bool {
        if self.entries.contains(&contract) {
            return false;
        }
        self.entries.push(contract);
        true
    }

    /// Removes a contract from the queue, if present.
    pub fn remove(&mut self, contract: Hash) {
        self.entries.retain(|c| *c != contract);
    }

    /// Whether a contract is pending confirmation.
    #[must_use]
    pub fn contains(&self, contract: Hash) -> bool {
        self.entries.contains(&contract)
    }

    /// Pending contracts in request order.
    #[must_use]
    pub fn entries(&self) -> &[Hash] {
        &self.entries
    }
}

// =============================================================================
// TESTS
// =============================================================================
