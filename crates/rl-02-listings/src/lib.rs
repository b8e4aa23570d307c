//! # RL-02 Listings - Announcement Catalog
//!
//! ## Purpose
//!
//! The marketplace's listing registry: owners first register proof of room
//! ownership, then publish announcements (room, owner, pay period, price)
//! keyed by the content hash of those four fields. The request-negotiation
//! subsystem resolves announcements here when tenants apply.
//!
//! Pure key/value CRUD; the catalog never touches escrowed value and never
//! consults the claim engine.

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
    pub use crate::adapters::InMemoryListingStore;
    pub use crate::domain::entities::Announcement;
    pub use crate::errors::ListingError;
    pub use crate::ports::inbound::ListingCatalog;
    pub use crate::ports::outbound::ListingStore;
    pub use crate::service::ListingService;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Announcement Catalog";
