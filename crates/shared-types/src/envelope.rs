//! # Versioned Record Envelope
//!
//! The universal wrapper for all persisted contract records.
//!
//! ## Properties
//!
//! - **Versioning**: every stored record carries a `version` field that is
//!   checked before the payload is handed to domain code.
//! - **Named Fields**: payloads are typed structs; positional arrays are
//!   never persisted.

use crate::errors::LedgerError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A persisted record together with its schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    /// Schema version for forward compatibility.
    /// MUST be checked by deserializers before processing.
    pub version: u16,
    /// The wrapped record.
    pub payload: T,
}

impl<T> Versioned<T> {
    /// Current record schema version.
    pub const CURRENT_VERSION: u16 = 1;

    /// Wraps a record at the current schema version.
    #[must_use]
    pub fn wrap(payload: T) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            payload,
        }
    }

    /// Unwraps the record, rejecting unknown schema versions.
    pub fn open(self) -> Result<T, LedgerError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(LedgerError::UnsupportedVersion {
                received: self.version,
                supported: Self::CURRENT_VERSION,
            });
        }
        Ok(self.payload)
    }
}

/// Encodes a record into versioned storage bytes.
pub fn encode_record<T: Serialize>(payload: &T) -> Result<Vec<u8>, LedgerError> {
    let wrapped = Versioned {
        version: Versioned::<()>::CURRENT_VERSION,
        payload,
    };
    Ok(bincode::serialize(&wrapped)?)
}

/// Decodes versioned storage bytes back into a record.
pub fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, LedgerError> {
    let wrapped: Versioned<T> = bincode::deserialize(bytes)?;
    wrapped.open()
}

// =============================================================================
// TESTS
// =============================================================================
