//! # Tenancy Entities
//!
//! The rent-contract record and its time arithmetic.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{Address, Hash};

/// Seconds in one calendar day.
pub const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Notice period after a termination warning: three 31-day months.
pub const TERMINATION_NOTICE_SECS: u64 = 3 * 31 * SECS_PER_DAY;

/// The frozen terms a tenancy is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseTerms {
    /// Room owner.
    pub owner: Address,
    /// Tenant.
    pub tenant: Address,
    /// Content hash of the rented room.
    pub room_hash: Hash,
    /// Rent due per period, in base units.
    pub price: u64,
    /// Length of one rent period in days.
    pub pay_period_days: u64,
    /// Fixed term in days; 0 means open-ended.
    pub term_days: u64,
}

/// A single tenancy's persistent state.
///
/// Never physically deleted; `terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentContract {
    /// Chain timestamp at creation.
    pub created_at: u64,
    /// Room owner.
    pub owner: Address,
    /// Tenant.
    pub tenant: Address,
    /// Content hash of the rented room.
    pub room_hash: Hash,
    /// Length of one rent period in days.
    pub pay_period_days: u64,
    /// Rent due per period, in base units.
    pub price: u64,
    /// Fixed term in days; 0 means open-ended.
    pub term_days: u64,
    /// Periods paid so far; the accepted request's deposit counts as 1.
    pub paid_periods: u64,
    /// Whether the tenancy has ended.
    pub terminated: bool,
    /// Chain timestamp of the termination warning, if one was given.
    pub warned_termination_at: Option<u64>,
}

impl RentContract {
    /// Opens a tenancy on the given terms.
    #[must_use]
    pub fn open(terms: LeaseTerms, created_at: u64) -> Self {
        Self {
            created_at,
            owner: terms.owner,
            tenant: terms.tenant,
            room_hash: terms.room_hash,
            pay_period_days: terms.pay_period_days,
            price: terms.price,
            term_days: terms.term_days,
            paid_periods: 1,
            terminated: false,
            warned_termination_at: None,
        }
    }

    /// Deterministic key: content hash of owner, tenant and room.
    #[must_use]
    pub fn contract_key(owner: Address, tenant: Address, room_hash: Hash) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(owner);
        hasher.update(tenant);
        hasher.update(room_hash);
        hasher.finalize().into()
    }

    /// This contract's key.
    #[must_use]
    pub fn key(&self) -> Hash {
        Self::contract_key(self.owner, self.tenant, self.room_hash)
    }

    /// Whether the tenancy runs until terminated rather than to a fixed term.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.term_days == 0
    }

    /// Whether rent is covered at `now`: the paid periods span more time
    /// than has elapsed since creation.
    #[must_use]
    pub fn is_paid_at(&self, now: u64) -> bool {
        let elapsed = now.saturating_sub(self.created_at);
        self.pay_period_days * self.paid_periods * SECS_PER_DAY > elapsed
    }

    /// Number of periods that should have been paid by `now`.
    ///
    /// The period in progress counts as due. A zero-day period never falls
    /// due.
    #[must_use]
    pub fn periods_due_at(&self, now: u64) -> u64 {
        if self.pay_period_days == 0 {
            return self.paid_periods;
        }
        let elapsed_days = now.saturating_sub(self.created_at) / SECS_PER_DAY;
        elapsed_days / self.pay_period_days + 1
    }

    /// Whether a given termination warning has outlived the notice period.
    #[must_use]
    pub fn warning_expired_at(&self, now: u64) -> bool {
        match self.warned_termination_at {
            Some(warned_at) => warned_at + TERMINATION_NOTICE_SECS < now,
            None => false,
        }
    }
}

/// Read-model returned by the info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    /// Whether rent is covered at query time.
    pub is_paid: bool,
    /// The underlying contract record.
    pub contract: RentContract,
}

// =============================================================================
// TESTS
// =============================================================================
