//! # Cross-Contract Bridges
//!
//! Synchronous adapters wiring the negotiation layer's outbound ports to
//! the listings and tenancy services. A failure inside either nested call
//! surfaces as a [`RequestError`] and aborts the outer operation, leaving
//! all stores unchanged.

use crate::errors::RequestError;
use crate::ports::outbound::{ListingDirectory, TenancyFactory};
use rl_01_escrow::ports::outbound::TransferView;
use rl_02_listings::domain::entities::Announcement;
use rl_02_listings::ports::inbound::ListingCatalog;
use rl_04_tenancy::domain::entities::LeaseTerms;
use rl_04_tenancy::ports::inbound::TenancyApi;
use shared_types::Hash;
use std::sync::Arc;

/// Resolves announcements through the catalog service.
pub struct CatalogDirectory<C: ListingCatalog> {
    catalog: Arc<C>,
}

impl<C: ListingCatalog> CatalogDirectory<C> {
    /// Wraps a catalog service.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

impl<C: ListingCatalog> ListingDirectory for CatalogDirectory<C> {
    fn announcement_parameters(&self, key: Hash) -> Result<Announcement, RequestError> {
        Ok(self.catalog.announcement_parameters(key)?)
    }
}

/// Opens rent contracts through the tenancy service.
pub struct TenancyBridge<T: TenancyApi> {
    tenancy: Arc<T>,
}

impl<T: TenancyApi> TenancyBridge<T> {
    /// Wraps a tenancy service.
    pub fn new(tenancy: Arc<T>) -> Self {
        Self { tenancy }
    }
}

impl<T: TenancyApi> TenancyFactory for TenancyBridge<T> {
    fn create(&self, view: &dyn TransferView, terms: LeaseTerms) -> Result<Hash, RequestError> {
        Ok(self.tenancy.create(view, terms)?)
    }
}
