//! # Integration Tests
//!
//! Cross-subsystem flows exercising listings, negotiation, tenancy and the
//! shared claim engine together.

pub mod marketplace_flows;
