//! # Driven Ports (Outbound)
//!
//! Persistence the lifecycle depends on: contract records (stored as
//! versioned records, never deleted) and the termination queue.

use crate::domain::entities::RentContract;
use crate::errors::TenancyError;
use shared_types::Hash;

/// Contract and termination-queue persistence.
pub trait ContractStore: Send + Sync {
    /// Persists a contract under its key, overwriting the previous record.
    fn put_contract(&self, key: Hash, contract: &RentContract) -> Result<(), TenancyError>;

    /// Loads a contract, `None` if the key is unknown.
    fn get_contract(&self, key: Hash) -> Result<Option<RentContract>, TenancyError>;

    /// Adds a contract to the termination queue; false if already pending.
    fn enqueue_termination(&self, key: Hash) -> bool;

    /// Drops a contract from the termination queue.
    fn remove_termination(&self, key: Hash);

    /// Pending termination requests in request order.
    fn termination_requests(&self) -> Vec<Hash>;
}
