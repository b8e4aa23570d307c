//! # RL-01 Escrow - Claim Authorization Engine
//!
//! ## Purpose
//!
//! The single mechanism that keeps escrowed value from being diverted.
//! Provides, for every contract subsystem:
//!
//! - the **deposit calculator** — how much value the currently executing
//!   transfer pays into the contract's own address;
//! - the **claim store** — which identity is authorized to later claim a
//!   settled transfer;
//! - the **claim verification engine** — the verdict the host ledger
//!   consults before committing any transfer that spends escrowed value.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Escrowed value never loops back to the contract | `domain/invariants.rs` - `check_outputs_invariant()` |
//! | All value flows to a single sink | `domain/invariants.rs` - `check_outputs_invariant()` |
//! | A claim spends at least one prior transfer | `domain/invariants.rs` - `check_spend_invariant()` |
//! | Every spent input is witnessed by its claimant | `domain/services.rs` - `verify_claim()` |
//!
//! Claim authorization is capability-based: possession of the key behind the
//! stored claimant identity is necessary and sufficient to redirect a
//! previously escrowed value, regardless of which contract produced the
//! authorization record.

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain services
    pub use crate::domain::services::{compute_deposit, verify_claim, ClaimVerdict};

    // Invariants
    pub use crate::domain::invariants::{
        check_outputs_invariant, check_spend_invariant, ClaimRejection,
    };

    // Ports
    pub use crate::ports::inbound::SpendValidation;
    pub use crate::ports::outbound::{ClaimStore, TransferView};

    // Adapters
    pub use crate::adapters::{Ed25519Witness, InMemoryClaimStore, TransferContext};

    // Errors
    pub use crate::errors::EscrowError;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 1;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Escrow Engine";

// =============================================================================
// TESTS
// =============================================================================
