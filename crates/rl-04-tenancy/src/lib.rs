//! # RL-04 Tenancy - Rent Contract Lifecycle
//!
//! ## Purpose
//!
//! Tracks a single tenancy from creation through per-period payments to
//! termination. Each accepted payment makes the owner the authorized
//! claimant of the paying transfer in the shared escrow engine; an
//! underpayment instead hands the claim back to the tenant. The lifecycle
//! therefore decides *who may take which escrowed value* and is driven by
//! the same claim store the verification engine consults.
//!
//! ## State Machine
//!
//! `Active -> {WarnedTermination} -> Terminated`; `Terminated` is absorbing
//! and contracts are never physically deleted.
//!
//! | Transition | Gate |
//! |------------|------|
//! | `pay` | sufficient deposit |
//! | `warn_termination` | owner or tenant witness, open-ended tenancy only |
//! | `terminate` (warning expired) | none - the notice period has run out |
//! | `terminate` (non-payment) | owner witness |
//! | `terminate` (queued) | owner or tenant witness |
//! | `confirm_termination` | operator identity when one is configured |

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
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::InMemoryContractStore;
    pub use crate::domain::entities::{ContractInfo, LeaseTerms, RentContract};
    pub use crate::domain::policy::{AccessPolicy, Action};
    pub use crate::domain::queue::TerminationQueue;
    pub use crate::errors::TenancyError;
    pub use crate::ports::inbound::{TenancyApi, TerminateOutcome};
    pub use crate::ports::outbound::ContractStore;
    pub use crate::service::{TenancyConfig, TenancyService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 4;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Rent Contract Lifecycle";
