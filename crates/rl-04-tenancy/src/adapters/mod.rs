//! # Adapters

mod contract_store;

pub use contract_store::InMemoryContractStore;
