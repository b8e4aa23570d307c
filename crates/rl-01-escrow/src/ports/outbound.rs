//! # Driven Ports (Outbound)
//!
//! Interfaces the escrow engine depends on. Adapters implement these to
//! provide:
//! - read-only access to the currently executing transfer (host ledger)
//! - persistence for claim authorization records
//!
//! Dependencies point inward: adapters implement these traits; domain code
//! only ever sees the trait objects.

use shared_types::{Address, Transfer, TransferId};

// =============================================================================
// LEDGER TRANSFER VIEW
// =============================================================================

/// Read-only view of the transfer currently being executed or validated.
///
/// Provided by the host ledger for the duration of one atomic contract
/// invocation. Nothing behind this trait may be mutated by contract code.
pub trait TransferView: Send + Sync {
    /// The executing transfer: its inputs and outputs.
    fn transfer(&self) -> &Transfer;

    /// The contract's own execution address.
    fn executing_address(&self) -> Address;

    /// Whether the transfer carries a valid signature for `identity`.
    fn check_witness(&self, identity: Address) -> bool;

    /// Current chain timestamp (unix seconds).
    fn timestamp(&self) -> u64;
}

// =============================================================================
// CLAIM STORE
// =============================================================================

/// Persistent mapping from a settled transfer to the single identity
/// permitted to later claim it, plus a per-claimant index.
///
/// Entries are written only by the contract logic that produced the
/// transfer, never by the claimant. Consumed exclusively by the claim
/// verification engine and the claim query commands.
pub trait ClaimStore: Send + Sync {
    /// Grants `claimant` the right to spend `transfer`.
    ///
    /// Overwrites any previous claimant; the transfer moves to the new
    /// claimant's index. Re-authorizing the same pair is idempotent.
    fn authorize(&self, transfer: TransferId, claimant: Address);

    /// The identity currently permitted to claim `transfer`, if any.
    fn claimant_of(&self, transfer: TransferId) -> Option<Address>;

    /// Transfers claimable by `claimant`, in authorization order.
    fn claimable_by(&self, claimant: Address) -> Vec<TransferId>;

    /// Removes the authorization record for `transfer`.
    fn revoke(&self, transfer: TransferId);
}
