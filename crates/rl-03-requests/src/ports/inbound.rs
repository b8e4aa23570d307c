//! # Driving Ports (Inbound)
//!
//! The negotiation command surface.

use crate::domain::entities::{RentRequest, RequestId};
use crate::errors::RequestError;
use rl_01_escrow::ports::outbound::TransferView;
use shared_types::{Address, Hash, TransferId};

/// Request negotiation commands.
pub trait RequestApi: Send + Sync {
    /// Applies for an announced room.
    ///
    /// Requires the tenant's witness. A live request under the same
    /// fingerprint, or a deposit below the announced price, rejects the
    /// proposal with `Ok(false)`; the underfunded case authorizes the
    /// tenant to reclaim the escrowing transfer.
    fn create_request(
        &self,
        view: &dyn TransferView,
        announcement: Hash,
        tenant: Address,
        term_days: u64,
    ) -> Result<bool, RequestError>;

    /// Accepts a pending request.
    ///
    /// Requires the owner's witness (`Ok(None)` otherwise). Opens the rent
    /// contract on the announcement's frozen terms, makes the owner the
    /// claimant of the tenant's deposit transfer, deletes the request and
    /// returns the contract key.
    fn accept_request(
        &self,
        view: &dyn TransferView,
        id: RequestId,
        owner: Address,
    ) -> Result<Option<Hash>, RequestError>;

    /// Cancels a pending request.
    ///
    /// Requires the tenant's or the owner's witness; a no-op `Ok(false)`
    /// otherwise. A tenant-initiated cancellation authorizes the tenant to
    /// reclaim the deposit transfer.
    fn delete_request(
        &self,
        view: &dyn TransferView,
        id: RequestId,
        owner: Address,
    ) -> Result<bool, RequestError>;

    /// Reads a pending request.
    fn check_request(
        &self,
        owner: Address,
        id: RequestId,
    ) -> Result<Option<RentRequest>, RequestError>;

    /// The owner's live request ids, in creation order.
    fn request_ids(&self, owner: Address) -> Vec<RequestId>;

    /// The identity currently authorized to claim a transfer, if any.
    fn check_claim(&self, transfer: TransferId) -> Option<Address>;

    /// Drops a claim authorization record.
    fn delete_claim(&self, transfer: TransferId);
}
