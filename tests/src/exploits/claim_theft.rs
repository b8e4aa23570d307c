//! # Claim Theft Attempts
//!
//! Simulates the fund-diversion attacks the verification engine exists to
//! stop: forged witnesses, split exfiltration, contract loop-backs and
//! spend-free synthetic deposits.

#[cfg(test)]
mod tests {
    use crate::fixtures::{deposit_view, plain_view, Marketplace, CONTRACT_ADDR};
    use crate::init_tracing;
    use rl_01_escrow::adapters::TransferContext;
    use rl_01_escrow::domain::invariants::ClaimRejection;
    use rl_01_escrow::ports::inbound::SpendValidation;
    use rl_01_escrow::ports::outbound::{ClaimStore, TransferView};
    use rl_03_requests::domain::entities::RequestId;
    use rl_03_requests::ports::inbound::RequestApi;
    use rl_04_tenancy::ports::inbound::TenancyApi;
    use shared_types::{Address, Hash, Transfer, TransferId, TransferInput, TransferOutput};

    const OWNER: Address = [0x01; 20];
    const TENANT: Address = [0x02; 20];
    const THIEF: Address = [0x66; 20];
    const ROOM: Hash = [0x03; 32];

    /// Sets up a tenancy with one rent payment claimable by the owner and
    /// returns the claimable transfer.
    fn market_with_owner_claim() -> (Marketplace, TransferId) {
        let market = Marketplace::new(None);
        let announcement = market.publish(ROOM, OWNER, 30, 100);
        market
            .requests
            .create_request(&deposit_view(100, TENANT, 0), announcement, TENANT, 0)
            .unwrap();
        let contract = market
            .requests
            .accept_request(&plain_view(OWNER, 0), RequestId::new(announcement, TENANT), OWNER)
            .unwrap()
            .unwrap();

        let rent = deposit_view(120, TENANT, 5);
        market.tenancy.pay(&rent, contract).unwrap();
        (market, rent.transfer().id)
    }

    #[test]
    fn test_thief_with_own_witness_is_rejected() {
        init_tracing();
        let (market, claimable) = market_with_owner_claim();

        let spend = Transfer::new(
            vec![TransferInput::spending(claimable)],
            vec![TransferOutput::new(THIEF, 100)],
        );
        // The thief signs the spending transfer; the signature is genuine
        // but belongs to nobody the store authorized.
        let view = TransferContext::new(spend, CONTRACT_ADDR).with_witness(THIEF);

        let verdict = market.tenancy.validate_spend(&view);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.reason,
            Some(ClaimRejection::UnauthorizedInput(claimable))
        );
    }

    #[test]
    fn test_split_exfiltration_is_rejected() {
        init_tracing();
        let (market, claimable) = market_with_owner_claim();

        // The owner colludes to siphon part of the value to a second sink.
        let spend = Transfer::new(
            vec![TransferInput::spending(claimable)],
            vec![
                TransferOutput::new(OWNER, 60),
                TransferOutput::new(THIEF, 40),
            ],
        );
        let view = TransferContext::new(spend, CONTRACT_ADDR).with_witness(OWNER);

        let verdict = market.tenancy.validate_spend(&view);
        assert_eq!(verdict.reason, Some(ClaimRejection::MultipleRecipients));
    }

    #[test]
    fn test_loopback_to_contract_is_rejected() {
        init_tracing();
        let (market, claimable) = market_with_owner_claim();

        let spend = Transfer::new(
            vec![TransferInput::spending(claimable)],
            vec![TransferOutput::new(CONTRACT_ADDR, 100)],
        );
        let view = TransferContext::new(spend, CONTRACT_ADDR).with_witness(OWNER);

        let verdict = market.tenancy.validate_spend(&view);
        assert_eq!(verdict.reason, Some(ClaimRejection::SelfAddressedOutput));
    }

    #[test]
    fn test_inputless_spend_is_rejected_even_with_witness() {
        init_tracing();
        let (market, _) = market_with_owner_claim();

        let spend = Transfer::new(vec![], vec![TransferOutput::new(OWNER, 100)]);
        let view = TransferContext::new(spend, CONTRACT_ADDR).with_witness(OWNER);

        let verdict = market.tenancy.validate_spend(&view);
        assert_eq!(verdict.reason, Some(ClaimRejection::NoInputs));
    }

    #[test]
    fn test_synthetic_inputless_deposit_counts_as_zero() {
        init_tracing();
        let market = Marketplace::new(None);
        let announcement = market.publish(ROOM, OWNER, 30, 100);

        // An inputless transfer "paying" 1000 into the contract moves no
        // value, so the application is rejected as underfunded.
        let fake = Transfer::new(vec![], vec![TransferOutput::new(CONTRACT_ADDR, 1_000)]);
        let view = TransferContext::new(fake, CONTRACT_ADDR).with_witness(TENANT);

        assert!(!market
            .requests
            .create_request(&view, announcement, TENANT, 0)
            .unwrap());
        assert!(market.requests.request_ids(OWNER).is_empty());
    }

    #[test]
    fn test_batched_inputs_need_every_claimants_witness() {
        init_tracing();
        let (market, owner_claimable) = market_with_owner_claim();

        // A second escrow, claimable by the tenant.
        let tenant_claimable = TransferId::new([0x55; 32]);
        market.claims.authorize(tenant_claimable, TENANT);

        let spend = Transfer::new(
            vec![
                TransferInput::spending(owner_claimable),
                TransferInput::spending(tenant_claimable),
            ],
            vec![TransferOutput::new(OWNER, 110)],
        );

        let owner_only = TransferContext::new(spend.clone(), CONTRACT_ADDR).with_witness(OWNER);
        assert!(!market.tenancy.validate_spend(&owner_only).valid);

        let both = TransferContext::new(spend, CONTRACT_ADDR)
            .with_witness(OWNER)
            .with_witness(TENANT);
        assert!(market.tenancy.validate_spend(&both).valid);
    }
}
