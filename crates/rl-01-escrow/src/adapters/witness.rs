//! # Ed25519 Witness
//!
//! A witness record attached to a transfer: the signer's public key and an
//! Ed25519 signature over the transfer id. The ledger identity of a signer
//! is the first 20 bytes of the SHA-256 of their public key.

use crate::errors::EscrowError;
use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use shared_types::{sha256, Address, PublicKey, Signature, TransferId};

/// Derives the ledger identity for a public key.
#[must_use]
pub fn witness_address(public_key: &PublicKey) -> Address {
    let digest = sha256(public_key);
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[..20]);
    address
}

/// A signature attached to a transfer by one party.
#[derive(Debug, Clone, Copy)]
pub struct Ed25519Witness {
    /// Signer's Ed25519 public key.
    pub public_key: PublicKey,
    /// Signature over the transfer id bytes.
    pub signature: Signature,
}

impl Ed25519Witness {
    /// Verifies the signature over `transfer` and returns the signer's
    /// ledger identity.
    pub fn verify(&self, transfer: TransferId) -> Result<Address, EscrowError> {
        let key = VerifyingKey::from_bytes(&self.public_key)
            .map_err(|_| EscrowError::MalformedWitnessKey)?;
        let signature = DalekSignature::from_bytes(&self.signature);

        key.verify(transfer.as_bytes(), &signature)
            .map_err(|_| EscrowError::WitnessRejected(transfer))?;

        Ok(witness_address(&self.public_key))
    }
}

// =============================================================================
// TESTS
// =============================================================================
