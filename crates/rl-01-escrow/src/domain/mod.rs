//! # Escrow Domain
//!
//! Pure logic: deposit computation, claim verdicts and the invariants the
//! verification engine enforces. No storage or host access happens here.

pub mod invariants;
pub mod services;
