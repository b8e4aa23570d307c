//! # Claim Invariants
//!
//! Structural conditions a spending transfer must satisfy before any
//! authorization record is even consulted. A violation here is the system's
//! last line of defense against fund diversion.

use shared_types::{Address, Transfer, TransferId};
use thiserror::Error;

// =============================================================================
// REJECTION REASONS
// =============================================================================

/// Why a candidate spending transfer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimRejection {
    /// An output pays the contract's own execution address.
    #[error("output addressed to the executing contract")]
    SelfAddressedOutput,

    /// Outputs name more than one distinct recipient.
    #[error("outputs split across multiple recipients")]
    MultipleRecipients,

    /// An input's origin has no witnessed claimant.
    #[error("input {0} has no witnessed claimant")]
    UnauthorizedInput(TransferId),

    /// The transfer spends nothing.
    #[error("transfer has no inputs")]
    NoInputs,
}

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Output structure invariant.
///
/// Escrowed funds must leave the contract, never loop back silently, and all
/// value must flow to a single sink: the first observed recipient becomes
/// the required sink and any later differing recipient invalidates the
/// transfer.
pub fn check_outputs_invariant(
    transfer: &Transfer,
    contract: Address,
) -> Result<(), ClaimRejection> {
    let mut sink: Option<Address> = None;

    for output in &transfer.outputs {
        if output.recipient == contract {
            return Err(ClaimRejection::SelfAddressedOutput);
        }
        match sink {
            None => sink = Some(output.recipient),
            Some(required) if required != output.recipient => {
                return Err(ClaimRejection::MultipleRecipients);
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Spend invariant.
///
/// A claim must consume at least one previously settled transfer; a transfer
/// with no inputs redirects nothing and is never valid.
pub fn check_spend_invariant(transfer: &Transfer) -> Result<(), ClaimRejection> {
    if transfer.has_inputs() {
        Ok(())
    } else {
        Err(ClaimRejection::NoInputs)
    }
}

// =============================================================================
// TESTS
// =============================================================================
