//! # Request Service
//!
//! Implements the negotiation command surface. Deposits and claim
//! redirections run through the shared escrow engine; announcement
//! resolution and contract creation are synchronous nested calls whose
//! failures abort the whole operation.

use crate::domain::entities::{RentRequest, RequestId};
use crate::errors::RequestError;
use crate::ports::inbound::RequestApi;
use crate::ports::outbound::{ListingDirectory, RequestStore, TenancyFactory};
use rl_01_escrow::domain::services::{compute_deposit, verify_claim, ClaimVerdict};
use rl_01_escrow::ports::inbound::SpendValidation;
use rl_01_escrow::ports::outbound::{ClaimStore, TransferView};
use rl_04_tenancy::domain::entities::LeaseTerms;
use shared_types::{Address, Hash, TransferId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The request negotiation service.
pub struct RequestService<S, C, D, F>
where
    S: RequestStore,
    C: ClaimStore,
    D: ListingDirectory,
    F: TenancyFactory,
{
    store: Arc<S>,
    claims: Arc<C>,
    directory: Arc<D>,
    factory: Arc<F>,
}

impl<S, C, D, F> RequestService<S, C, D, F>
where
    S: RequestStore,
    C: ClaimStore,
    D: ListingDirectory,
    F: TenancyFactory,
{
    /// Creates a service over its stores and collaborators.
    pub fn new(store: Arc<S>, claims: Arc<C>, directory: Arc<D>, factory: Arc<F>) -> Self {
        Self {
            store,
            claims,
            directory,
            factory,
        }
    }
}

impl<S, C, D, F> RequestApi for RequestService<S, C, D, F>
where
    S: RequestStore,
    C: ClaimStore,
    D: ListingDirectory,
    F: TenancyFactory,
{
    fn create_request(
        &self,
        view: &dyn TransferView,
        announcement: Hash,
        tenant: Address,
        term_days: u64,
    ) -> Result<bool, RequestError> {
        if !view.check_witness(tenant) {
            warn!("request rejected: tenant witness missing");
            return Ok(false);
        }

        let params = self.directory.announcement_parameters(announcement)?;
        let id = RequestId::new(announcement, tenant);

        if self.store.contains(params.owner, id) {
            warn!("request rejected: fingerprint already live");
            return Ok(false);
        }

        let deposit = compute_deposit(view.transfer(), view.executing_address());
        if deposit < params.price {
            // Not an error: the proposal is rejected and the depositor may
            // reclaim the escrowing transfer.
            self.claims.authorize(view.transfer().id, tenant);
            warn!(deposit, price = params.price, "request rejected: deposit below price");
            return Ok(false);
        }

        let request = RentRequest::new(announcement, tenant, term_days, view.transfer().id);
        self.store.insert(params.owner, &request)?;

        info!(deposit, "rent request created");
        Ok(true)
    }

    fn accept_request(
        &self,
        view: &dyn TransferView,
        id: RequestId,
        owner: Address,
    ) -> Result<Option<Hash>, RequestError> {
        if !view.check_witness(owner) {
            warn!("acceptance rejected: owner witness missing");
            return Ok(None);
        }

        let request = self
            .store
            .get(owner, id)?
            .ok_or(RequestError::UnknownRequest(id))?;

        // Re-resolve the announcement so the contract freezes the terms as
        // currently listed, not as remembered at application time.
        let params = self.directory.announcement_parameters(request.announcement)?;
        let terms = LeaseTerms {
            owner,
            tenant: request.tenant,
            room_hash: params.room_hash,
            price: params.price,
            pay_period_days: params.pay_period_days,
            term_days: request.term_days,
        };

        let contract = self.factory.create(view, terms)?;

        self.claims.authorize(request.deposit_transfer, owner);
        self.store.remove(owner, id)?;

        info!(contract = %hex::encode(&contract[..4]), "request accepted");
        Ok(Some(contract))
    }

    fn delete_request(
        &self,
        view: &dyn TransferView,
        id: RequestId,
        owner: Address,
    ) -> Result<bool, RequestError> {
        let request = self
            .store
            .get(owner, id)?
            .ok_or(RequestError::UnknownRequest(id))?;

        let is_tenant = view.check_witness(request.tenant);
        let is_owner = view.check_witness(owner);

        if !is_tenant && !is_owner {
            debug!("deletion ignored: no party witness");
            return Ok(false);
        }

        self.store.remove(owner, id)?;

        if is_tenant {
            self.claims.authorize(request.deposit_transfer, request.tenant);
            info!("request cancelled by tenant, deposit reclaimable");
        } else {
            info!("request cancelled by owner");
        }

        Ok(true)
    }

    fn check_request(
        &self,
        owner: Address,
        id: RequestId,
    ) -> Result<Option<RentRequest>, RequestError> {
        self.store.get(owner, id)
    }

    fn request_ids(&self, owner: Address) -> Vec<RequestId> {
        self.store.ids(owner)
    }

    fn check_claim(&self, transfer: TransferId) -> Option<Address> {
        self.claims.claimant_of(transfer)
    }

    fn delete_claim(&self, transfer: TransferId) {
        self.claims.revoke(transfer);
    }
}

impl<S, C, D, F> SpendValidation for RequestService<S, C, D, F>
where
    S: RequestStore,
    C: ClaimStore,
    D: ListingDirectory,
    F: TenancyFactory,
{
    fn validate_spend(&self, view: &dyn TransferView) -> ClaimVerdict {
        verify_claim(view, &*self.claims)
    }
}

// =============================================================================
// TESTS
// =============================================================================
