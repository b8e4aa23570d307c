//! # Tenancy Service
//!
//! Implements the lifecycle command surface over a [`ContractStore`] and
//! the shared escrow [`ClaimStore`]. Runs transaction-scoped and
//! synchronous: each command either commits its full state delta or, on a
//! rejection, commits nothing beyond the claim redirection the rejection
//! itself mandates.

use crate::domain::entities::{ContractInfo, LeaseTerms, RentContract};
use crate::domain::policy::{AccessPolicy, Action};
use crate::errors::TenancyError;
use crate::ports::inbound::{TenancyApi, TerminateOutcome};
use crate::ports::outbound::ContractStore;
use rl_01_escrow::domain::services::{compute_deposit, verify_claim, ClaimVerdict};
use rl_01_escrow::ports::inbound::SpendValidation;
use rl_01_escrow::ports::outbound::{ClaimStore, TransferView};
use shared_types::{Address, Hash, TransferId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tenancy service configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TenancyConfig {
    /// Identity permitted to confirm terminations; `None` leaves
    /// confirmation open to any caller.
    pub operator: Option<Address>,
}

/// The rent-contract lifecycle service.
pub struct TenancyService<S: ContractStore, C: ClaimStore> {
    store: Arc<S>,
    claims: Arc<C>,
    policy: AccessPolicy,
}

impl<S: ContractStore, C: ClaimStore> TenancyService<S, C> {
    /// Creates a service over the given stores.
    pub fn new(store: Arc<S>, claims: Arc<C>, config: TenancyConfig) -> Self {
        let policy = match config.operator {
            Some(operator) => AccessPolicy::with_operator(operator),
            None => AccessPolicy::open(),
        };
        Self {
            store,
            claims,
            policy,
        }
    }

    fn load(&self, key: Hash) -> Result<RentContract, TenancyError> {
        self.store
            .get_contract(key)?
            .ok_or(TenancyError::UnknownContract(key))
    }
}

impl<S: ContractStore, C: ClaimStore> TenancyApi for TenancyService<S, C> {
    fn create(&self, view: &dyn TransferView, terms: LeaseTerms) -> Result<Hash, TenancyError> {
        let key = RentContract::contract_key(terms.owner, terms.tenant, terms.room_hash);
        if self.store.get_contract(key)?.is_some() {
            return Err(TenancyError::ContractExists(key));
        }

        let contract = RentContract::open(terms, view.timestamp());
        self.store.put_contract(key, &contract)?;

        info!(key = %hex::encode(&key[..4]), "rent contract created");
        Ok(key)
    }

    fn pay(&self, view: &dyn TransferView, contract: Hash) -> Result<bool, TenancyError> {
        let mut record = self.load(contract)?;
        let transfer_id = view.transfer().id;
        let deposit = compute_deposit(view.transfer(), view.executing_address());

        if deposit < record.price {
            self.claims.authorize(transfer_id, record.tenant);
            warn!(deposit, price = record.price, "insufficient rent deposit");
            return Ok(false);
        }

        record.paid_periods += 1;
        self.store.put_contract(contract, &record)?;
        self.claims.authorize(transfer_id, record.owner);

        debug!(paid_periods = record.paid_periods, "rent period paid");
        Ok(true)
    }

    fn get_info(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<ContractInfo, TenancyError> {
        let record = self.load(contract)?;
        Ok(ContractInfo {
            is_paid: record.is_paid_at(view.timestamp()),
            contract: record,
        })
    }

    fn get_txs_to_claim(&self, claimant: Address) -> Vec<TransferId> {
        self.claims.claimable_by(claimant)
    }

    fn warn_termination(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<bool, TenancyError> {
        let mut record = self.load(contract)?;

        if !self
            .policy
            .can_invoke(Action::WarnTermination, view, &record)
        {
            warn!("termination warning rejected: no party witness");
            return Ok(false);
        }

        if !record.is_open_ended() {
            warn!("termination warning rejected: fixed-term tenancy");
            return Ok(false);
        }

        record.warned_termination_at = Some(view.timestamp());
        self.store.put_contract(contract, &record)?;

        info!("termination warned");
        Ok(true)
    }

    fn terminate(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<TerminateOutcome, TenancyError> {
        let mut record = self.load(contract)?;
        let now = view.timestamp();

        // An expired warning terminates regardless of who submits the call:
        // the notice period has run out.
        if record.warning_expired_at(now) {
            record.terminated = true;
            self.store.put_contract(contract, &record)?;
            info!("terminated: warning notice period elapsed");
            return Ok(TerminateOutcome::Terminated);
        }

        if view.check_witness(record.owner)
            && record.periods_due_at(now) > record.paid_periods + 1
        {
            record.terminated = true;
            self.store.put_contract(contract, &record)?;
            info!(
                due = record.periods_due_at(now),
                paid = record.paid_periods,
                "terminated: rent overdue"
            );
            return Ok(TerminateOutcome::Terminated);
        }

        if !self.policy.can_invoke(Action::Terminate, view, &record) {
            debug!("termination request ignored: no party witness");
            return Ok(TerminateOutcome::Ignored);
        }

        self.store.enqueue_termination(contract);
        info!("termination queued for confirmation");
        Ok(TerminateOutcome::Queued)
    }

    fn confirm_termination(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<bool, TenancyError> {
        let mut record = self.load(contract)?;

        if !self
            .policy
            .can_invoke(Action::ConfirmTermination, view, &record)
        {
            warn!("termination confirmation rejected: operator witness missing");
            return Ok(false);
        }

        record.terminated = true;
        self.store.put_contract(contract, &record)?;
        self.store.remove_termination(contract);

        info!("termination confirmed");
        Ok(true)
    }

    fn get_termination_requests(&self) -> Vec<Hash> {
        self.store.termination_requests()
    }
}

impl<S: ContractStore, C: ClaimStore> SpendValidation for TenancyService<S, C> {
    fn validate_spend(&self, view: &dyn TransferView) -> ClaimVerdict {
        verify_claim(view, &*self.claims)
    }
}

// =============================================================================
// TESTS
// =============================================================================
