//! # Driving Ports (Inbound)
//!
//! The rent-contract command surface. Creation is invoked by the
//! request-negotiation subsystem upon acceptance; the remaining commands by
//! the tenancy's parties (and, for confirmation, the operator).

use crate::domain::entities::{ContractInfo, LeaseTerms};
use crate::errors::TenancyError;
use rl_01_escrow::ports::outbound::TransferView;
use shared_types::{Address, Hash, TransferId};

/// How a termination request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminateOutcome {
    /// The contract was terminated immediately.
    Terminated,
    /// The request was queued for manual confirmation.
    Queued,
    /// The caller carried no authorizing witness; nothing happened.
    Ignored,
}

/// Rent-contract lifecycle commands.
pub trait TenancyApi: Send + Sync {
    /// Opens a tenancy on frozen terms and returns its key.
    ///
    /// Stamps the chain timestamp and counts the accepted request's deposit
    /// as the first paid period. An existing key is an aborting error.
    fn create(&self, view: &dyn TransferView, terms: LeaseTerms) -> Result<Hash, TenancyError>;

    /// Deposits one period's rent.
    ///
    /// An insufficient deposit authorizes the tenant to reclaim the paying
    /// transfer and returns `Ok(false)` with no state change; otherwise the
    /// paid-period count advances and the owner becomes the transfer's
    /// authorized claimant.
    fn pay(&self, view: &dyn TransferView, contract: Hash) -> Result<bool, TenancyError>;

    /// Reads the contract together with its rent-coverage flag. Pure read.
    fn get_info(&self, view: &dyn TransferView, contract: Hash)
        -> Result<ContractInfo, TenancyError>;

    /// Transfers the given identity may currently claim.
    fn get_txs_to_claim(&self, claimant: Address) -> Vec<TransferId>;

    /// Warns an open-ended tenancy of upcoming termination.
    ///
    /// Requires an owner or tenant witness; fixed-term tenancies cannot be
    /// warned.
    fn warn_termination(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<bool, TenancyError>;

    /// Requests termination.
    ///
    /// Immediate when an expired warning exists or when the owner invokes
    /// it against more than one unpaid period; otherwise queued for manual
    /// confirmation under an owner or tenant witness.
    fn terminate(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<TerminateOutcome, TenancyError>;

    /// Confirms a queued termination request.
    fn confirm_termination(
        &self,
        view: &dyn TransferView,
        contract: Hash,
    ) -> Result<bool, TenancyError>;

    /// Pending termination requests in request order.
    fn get_termination_requests(&self) -> Vec<Hash>;
}
