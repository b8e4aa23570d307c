//! # Transfer Context
//!
//! In-memory [`TransferView`] carrying the executing transfer, the
//! contract's execution address, the set of witnessed identities and the
//! chain timestamp. The host ledger hands one of these to every contract
//! invocation; tests build them directly.

use crate::adapters::witness::Ed25519Witness;
use crate::errors::EscrowError;
use crate::ports::outbound::TransferView;
use shared_types::{Address, Transfer};
use std::collections::HashSet;

/// One contract invocation's view of the ledger.
#[derive(Debug, Clone)]
pub struct TransferContext {
    transfer: Transfer,
    executing_address: Address,
    witnesses: HashSet<Address>,
    timestamp: u64,
}

impl TransferContext {
    /// Creates a context for `transfer` executing at `executing_address`,
    /// with no witnesses and timestamp 0.
    #[must_use]
    pub fn new(transfer: Transfer, executing_address: Address) -> Self {
        Self {
            transfer,
            executing_address,
            witnesses: HashSet::new(),
            timestamp: 0,
        }
    }

    /// Attaches an already-validated witness identity.
    #[must_use]
    pub fn with_witness(mut self, identity: Address) -> Self {
        self.witnesses.insert(identity);
        self
    }

    /// Verifies an Ed25519 witness over the transfer id and attaches the
    /// derived identity on success.
    pub fn with_verified_witness(mut self, witness: &Ed25519Witness) -> Result<Self, EscrowError> {
        let identity = witness.verify(self.transfer.id)?;
        self.witnesses.insert(identity);
        Ok(self)
    }

    /// Sets the chain timestamp.
    #[must_use]
    pub fn at_time(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl TransferView for TransferContext {
    fn transfer(&self) -> &Transfer {
        &self.transfer
    }

    fn executing_address(&self) -> Address {
        self.executing_address
    }

    fn check_witness(&self, identity: Address) -> bool {
        self.witnesses.contains(&identity)
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

// =============================================================================
// TESTS
// =============================================================================
