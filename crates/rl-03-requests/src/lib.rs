//! # RL-03 Requests - Negotiation Layer
//!
//! ## Purpose
//!
//! Mediates between tenants and owners: a tenant applies for an announced
//! room by escrowing one period's rent; the owner either accepts (which
//! opens a rent contract and hands the owner the claim on the deposit) or
//! the request is cancelled (a tenant-initiated cancellation hands the
//! claim back to the tenant).
//!
//! ## State Machine
//!
//! Per `(owner, request id)`:
//! `NonExistent -> Pending -> {Accepted, Cancelled}`
//!
//! At most one live request exists per `(owner, announcement, tenant)`
//! triple; the request id is the announcement hash joined with the tenant
//! identity, so the duplicate check is a plain existence probe.
//!
//! ## Outbound Dependencies
//!
//! | Subsystem | Trait | Purpose |
//! |-----------|-------|---------|
//! | 01 (Escrow) | `ClaimStore`, `TransferView` | deposits and claim authorization |
//! | 02 (Listings) | `ListingDirectory` | resolve announcement terms |
//! | 04 (Tenancy) | `TenancyFactory` | open the rent contract on acceptance |

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
    pub use crate::adapters::{CatalogDirectory, InMemoryRequestBook, TenancyBridge};
    pub use crate::domain::entities::{RentRequest, RequestId};
    pub use crate::errors::RequestError;
    pub use crate::ports::inbound::RequestApi;
    pub use crate::ports::outbound::{ListingDirectory, RequestStore, TenancyFactory};
    pub use crate::service::RequestService;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 3;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Request Negotiation";
