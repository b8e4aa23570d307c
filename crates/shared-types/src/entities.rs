//! # Core Ledger Entities
//!
//! Defines the transfer model every contract subsystem operates on: a
//! transfer spends prior transfers (inputs) and pays value to recipient
//! identities (outputs).
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `PublicKey`, `Signature`, `Hash`
//! - **Value Movement**: `Transfer`, `TransferInput`, `TransferOutput`, `TransferId`

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte content hash (SHA-256).
pub type Hash = [u8; 32];

/// A 64-byte Ed25519 signature.
pub type Signature = [u8; 64];

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// A 20-byte ledger identity.
///
/// Owners, tenants, claimants, transfer recipients and contract execution
/// addresses are all values of this type.
pub type Address = [u8; 20];

/// Computes the SHA-256 hash of a byte slice.
#[must_use]
pub fn sha256(bytes: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

// =============================================================================
// CLUSTER B: VALUE MOVEMENT
// =============================================================================

/// Unique identifier of a settled transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TransferId(pub [u8; 32]);

impl TransferId {
    /// The zero id.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a transfer id from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}...", hex::encode(&self.0[..4]))
    }
}

impl From<[u8; 32]> for TransferId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A reference to a prior transfer being spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    /// Identifier of the transfer whose value is consumed.
    pub prev_transfer: TransferId,
    /// Index of the consumed output within that transfer.
    pub output_index: u16,
}

impl TransferInput {
    /// Creates an input spending the first output of a prior transfer.
    #[must_use]
    pub fn spending(prev_transfer: TransferId) -> Self {
        Self {
            prev_transfer,
            output_index: 0,
        }
    }
}

/// A single payment leg of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    /// Identity receiving the value.
    pub recipient: Address,
    /// Amount in base units.
    pub amount: u64,
}

impl TransferOutput {
    /// Creates a new output.
    #[must_use]
    pub fn new(recipient: Address, amount: u64) -> Self {
        Self { recipient, amount }
    }
}

/// A ledger-recorded movement of value.
///
/// Inputs reference the prior transfers being spent; outputs name the
/// recipients. A transfer with no inputs moves nothing and is treated as
/// carrying no deposit by every consumer of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Transfer {
    /// Deterministic identifier (content hash of inputs and outputs).
    pub id: TransferId,
    /// Prior transfers consumed by this one.
    pub inputs: Vec<TransferInput>,
    /// Payment legs.
    pub outputs: Vec<TransferOutput>,
}

impl Transfer {
    /// Builds a transfer and stamps its content-hash identifier.
    #[must_use]
    pub fn new(inputs: Vec<TransferInput>, outputs: Vec<TransferOutput>) -> Self {
        let mut transfer = Self {
            id: TransferId::ZERO,
            inputs,
            outputs,
        };
        transfer.id = transfer.content_id();
        transfer
    }

    /// Computes the content-hash identifier over inputs and outputs.
    #[must_use]
    pub fn content_id(&self) -> TransferId {
        let mut hasher = Sha256::new();
        for input in &self.inputs {
            hasher.update(input.prev_transfer.as_bytes());
            hasher.update(input.output_index.to_be_bytes());
        }
        for output in &self.outputs {
            hasher.update(output.recipient);
            hasher.update(output.amount.to_be_bytes());
        }
        TransferId(hasher.finalize().into())
    }

    /// Returns true if this transfer spends at least one prior transfer.
    #[must_use]
    pub fn has_inputs(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Total value paid to the given identity.
    #[must_use]
    pub fn paid_to(&self, recipient: Address) -> u64 {
        self.outputs
            .iter()
            .filter(|o| o.recipient == recipient)
            .map(|o| o.amount)
            .sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================
