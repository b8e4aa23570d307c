//! # Adapters
//!
//! In-memory implementations of the escrow ports plus the Ed25519 witness
//! record. Production deployments would back the claim store with the host
//! ledger's persistent storage.

mod claim_store;
mod transfer_context;
mod witness;

pub use claim_store::InMemoryClaimStore;
pub use transfer_context::TransferContext;
pub use witness::{witness_address, Ed25519Witness};
