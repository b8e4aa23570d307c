//! # Test Fixtures
//!
//! A fully wired marketplace (listings, requests, tenancy, one shared claim
//! store) plus transfer/witness builders used across the suite.

use rl_01_escrow::adapters::{Ed25519Witness, InMemoryClaimStore, TransferContext};
use rl_02_listings::adapters::InMemoryListingStore;
use rl_02_listings::ports::inbound::ListingCatalog;
use rl_02_listings::service::ListingService;
use rl_03_requests::adapters::{CatalogDirectory, InMemoryRequestBook, TenancyBridge};
use rl_03_requests::service::RequestService;
use rl_04_tenancy::adapters::InMemoryContractStore;
use rl_04_tenancy::service::{TenancyConfig, TenancyService};
use shared_types::{Address, Hash, Transfer, TransferId, TransferInput, TransferOutput};
use std::sync::Arc;

use ed25519_dalek::{Signer, SigningKey};

/// Execution address both contracts escrow into during tests.
pub const CONTRACT_ADDR: Address = [0xCC; 20];

/// Concrete listing service used by the harness.
pub type Listings = ListingService<InMemoryListingStore>;
/// Concrete tenancy service used by the harness.
pub type Tenancy = TenancyService<InMemoryContractStore, InMemoryClaimStore>;
/// Concrete request service used by the harness.
pub type Requests = RequestService<
    InMemoryRequestBook,
    InMemoryClaimStore,
    CatalogDirectory<Listings>,
    TenancyBridge<Tenancy>,
>;

/// A marketplace with all three contracts wired over one claim store.
pub struct Marketplace {
    /// Announcement catalog.
    pub listings: Arc<Listings>,
    /// Negotiation layer.
    pub requests: Requests,
    /// Rent-contract lifecycle.
    pub tenancy: Arc<Tenancy>,
    /// The shared escrow authorization records.
    pub claims: Arc<InMemoryClaimStore>,
}

impl Marketplace {
    /// Wires up a marketplace; `operator` gates termination confirmation.
    pub fn new(operator: Option<Address>) -> Self {
        let claims = Arc::new(InMemoryClaimStore::new());
        let listings = Arc::new(ListingService::new(Arc::new(InMemoryListingStore::new())));
        let tenancy = Arc::new(TenancyService::new(
            Arc::new(InMemoryContractStore::new()),
            Arc::clone(&claims),
            TenancyConfig { operator },
        ));
        let requests = RequestService::new(
            Arc::new(InMemoryRequestBook::new()),
            Arc::clone(&claims),
            Arc::new(CatalogDirectory::new(Arc::clone(&listings))),
            Arc::new(TenancyBridge::new(Arc::clone(&tenancy))),
        );

        Self {
            listings,
            requests,
            tenancy,
            claims,
        }
    }

    /// Registers a room and publishes an announcement, returning its key.
    pub fn publish(&self, room: Hash, owner: Address, pay_period_days: u64, price: u64) -> Hash {
        let view = plain_view(owner, 0);
        assert!(self.listings.register_room_and_owner(&view, room, owner));
        self.listings
            .create_announcement(&view, room, owner, pay_period_days, price)
            .unwrap()
            .expect("announcement should publish")
    }
}

/// A transfer escrowing `amount` into the contract, witnessed by `witness`.
pub fn deposit_view(amount: u64, witness: Address, timestamp: u64) -> TransferContext {
    let transfer = Transfer::new(
        vec![TransferInput::spending(TransferId::new([0x77; 32]))],
        vec![TransferOutput::new(CONTRACT_ADDR, amount)],
    );
    TransferContext::new(transfer, CONTRACT_ADDR)
        .with_witness(witness)
        .at_time(timestamp)
}

/// A transfer moving nothing, witnessed by `witness`.
pub fn plain_view(witness: Address, timestamp: u64) -> TransferContext {
    TransferContext::new(Transfer::default(), CONTRACT_ADDR)
        .with_witness(witness)
        .at_time(timestamp)
}

/// A deterministic Ed25519 keypair for test parties.
pub struct Party {
    key: SigningKey,
}

impl Party {
    /// Derives a party from a fixed seed.
    pub fn from_seed(seed: u8) -> Self {
        Self {
            key: SigningKey::from_bytes(&[seed; 32]),
        }
    }

    /// The party's ledger identity.
    pub fn address(&self) -> Address {
        rl_01_escrow::adapters::witness_address(&self.key.verifying_key().to_bytes())
    }

    /// Signs a transfer, producing an attachable witness record.
    pub fn witness(&self, transfer: TransferId) -> Ed25519Witness {
        Ed25519Witness {
            public_key: self.key.verifying_key().to_bytes(),
            signature: self.key.sign(transfer.as_bytes()).to_bytes(),
        }
    }
}
