//! # Access Policy
//!
//! Explicit authorization predicate for lifecycle actions, replacing the
//! scattered raw identity comparisons of an implicit scheme. Termination
//! confirmation is gated to a distinguished operator identity when one is
//! configured; without one the action is open to any caller.

use crate::domain::entities::RentContract;
use rl_01_escrow::ports::outbound::TransferView;
use shared_types::Address;

/// Lifecycle actions subject to authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Deposit a period's rent.
    Pay,
    /// Warn an open-ended tenancy of upcoming termination.
    WarnTermination,
    /// Request (or trigger) termination.
    Terminate,
    /// Confirm a queued termination request.
    ConfirmTermination,
}

/// Who may invoke which lifecycle action.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy {
    operator: Option<Address>,
}

impl AccessPolicy {
    /// Policy with termination confirmation gated to `operator`.
    #[must_use]
    pub fn with_operator(operator: Address) -> Self {
        Self {
            operator: Some(operator),
        }
    }

    /// Policy with no operator: confirmation is open to any caller.
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    /// Whether the witnesses on the executing transfer authorize `action`
    /// against `contract`.
    #[must_use]
    pub fn can_invoke(
        &self,
        action: Action,
        view: &dyn TransferView,
        contract: &RentContract,
    ) -> bool {
        match action {
            // Anyone may pay rent into the escrow.
            Action::Pay => true,
            Action::WarnTermination | Action::Terminate => {
                view.check_witness(contract.owner) || view.check_witness(contract.tenant)
            }
            Action::ConfirmTermination => match self.operator {
                Some(operator) => view.check_witness(operator),
                None => true,
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
