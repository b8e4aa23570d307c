//! # Escrow Domain Services
//!
//! Deposit computation and the claim verification engine. Both contract
//! subsystems run exactly this logic; the host ledger consults
//! [`verify_claim`] before committing any transfer that spends a previously
//! authorized one.

use crate::domain::invariants::{check_outputs_invariant, check_spend_invariant, ClaimRejection};
use crate::ports::outbound::{ClaimStore, TransferView};
use shared_types::{Address, Transfer};
use tracing::{debug, warn};

// =============================================================================
// DEPOSIT CALCULATOR
// =============================================================================

/// Computes how much value the given transfer deposits into the contract.
///
/// Sums every output addressed to `self_address`. A transfer that references
/// no prior inputs carries no deposit and yields 0 regardless of its
/// outputs; absence of qualifying outputs also yields 0. There is no error
/// path.
#[must_use]
pub fn compute_deposit(transfer: &Transfer, self_address: Address) -> u64 {
    if !transfer.has_inputs() {
        debug!("transfer spends nothing, deposit is 0");
        return 0;
    }

    transfer.paid_to(self_address)
}

// =============================================================================
// CLAIM VERIFICATION ENGINE
// =============================================================================

/// Outcome of spend validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimVerdict {
    /// Whether the host ledger may commit the spending transfer.
    pub valid: bool,
    /// Rejection reason when invalid.
    pub reason: Option<ClaimRejection>,
}

impl ClaimVerdict {
    /// An approving verdict.
    #[must_use]
    pub const fn allowed() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A rejecting verdict with its reason.
    #[must_use]
    pub const fn rejected(reason: ClaimRejection) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Validates a transfer that spends previously escrowed value.
///
/// 1. No output may pay the contract's own execution address.
/// 2. All outputs must flow to a single sink.
/// 3. Every input must resolve, via the claim store, to a claimant whose
///    witness is attached to the candidate transfer. A missing store entry
///    fails that input.
/// 4. At least one input must have been evaluated.
pub fn verify_claim(view: &dyn TransferView, store: &dyn ClaimStore) -> ClaimVerdict {
    let transfer = view.transfer();
    let contract = view.executing_address();

    if let Err(reason) = check_outputs_invariant(transfer, contract) {
        warn!(%reason, "claim rejected on output structure");
        return ClaimVerdict::rejected(reason);
    }

    if let Err(reason) = check_spend_invariant(transfer) {
        warn!(%reason, "claim rejected: nothing spent");
        return ClaimVerdict::rejected(reason);
    }

    for input in &transfer.inputs {
        let witnessed = store
            .claimant_of(input.prev_transfer)
            .is_some_and(|claimant| view.check_witness(claimant));

        if !witnessed {
            warn!(origin = %input.prev_transfer, "claim rejected: input not witnessed by its claimant");
            return ClaimVerdict::rejected(ClaimRejection::UnauthorizedInput(input.prev_transfer));
        }
    }

    debug!("claim allowed");
    ClaimVerdict::allowed()
}

// =============================================================================
// TESTS
// =============================================================================
