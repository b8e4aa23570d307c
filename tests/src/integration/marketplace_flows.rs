//! # Marketplace Flows
//!
//! Full tenant/owner journeys: publishing, applying, accepting, paying and
//! terminating, with claim authorization checked at every hand-off.

#[cfg(test)]
mod tests {
    use crate::fixtures::{deposit_view, plain_view, Marketplace, Party, CONTRACT_ADDR};
    use crate::init_tracing;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rl_01_escrow::adapters::TransferContext;
    use rl_01_escrow::ports::inbound::SpendValidation;
    use rl_01_escrow::ports::outbound::{ClaimStore, TransferView};
    use rl_03_requests::domain::entities::RequestId;
    use rl_03_requests::ports::inbound::RequestApi;
    use rl_04_tenancy::domain::entities::SECS_PER_DAY;
    use rl_04_tenancy::ports::inbound::{TenancyApi, TerminateOutcome};
    use shared_types::{Address, Hash, Transfer, TransferInput, TransferOutput};

    const OWNER: Address = [0x01; 20];
    const TENANT: Address = [0x02; 20];
    const OPERATOR: Address = [0x0F; 20];
    const ROOM: Hash = [0x03; 32];

    #[test]
    fn test_open_ended_tenancy_from_listing_to_termination() {
        init_tracing();
        let market = Marketplace::new(None);

        // Owner lists the room at 100 per 30-day period, open-ended.
        let announcement = market.publish(ROOM, OWNER, 30, 100);

        // Tenant applies, escrowing exactly one period's rent.
        let application = deposit_view(100, TENANT, 0);
        let deposit = application.transfer().id;
        assert!(market
            .requests
            .create_request(&application, announcement, TENANT, 0)
            .unwrap());

        // Owner accepts: the contract opens with the deposit as period 1
        // and the deposit becomes the owner's to claim.
        let id = RequestId::new(announcement, TENANT);
        let contract = market
            .requests
            .accept_request(&plain_view(OWNER, 0), id, OWNER)
            .unwrap()
            .expect("owner witness attached");

        let info = market.tenancy.get_info(&plain_view(OWNER, 0), contract).unwrap();
        assert_eq!(info.contract.paid_periods, 1);
        assert!(info.is_paid);
        assert_eq!(market.claims.claimant_of(deposit), Some(OWNER));

        // Open-ended tenancy: the owner may warn termination.
        assert!(market
            .tenancy
            .warn_termination(&plain_view(OWNER, 0), contract)
            .unwrap());

        // 95 days later the three-month notice has run out.
        let later = 95 * SECS_PER_DAY;
        let outcome = market
            .tenancy
            .terminate(&plain_view(OWNER, later), contract)
            .unwrap();
        assert_eq!(outcome, TerminateOutcome::Terminated);
        assert!(market
            .tenancy
            .get_info(&plain_view(OWNER, later), contract)
            .unwrap()
            .contract
            .terminated);
    }

    #[test]
    fn test_fixed_term_tenancy_cannot_be_warned() {
        init_tracing();
        let market = Marketplace::new(None);
        let announcement = market.publish(ROOM, OWNER, 30, 100);

        market
            .requests
            .create_request(&deposit_view(100, TENANT, 0), announcement, TENANT, 365)
            .unwrap();
        let contract = market
            .requests
            .accept_request(&plain_view(OWNER, 0), RequestId::new(announcement, TENANT), OWNER)
            .unwrap()
            .unwrap();

        for party in [OWNER, TENANT] {
            assert!(!market
                .tenancy
                .warn_termination(&plain_view(party, 10), contract)
                .unwrap());
        }
    }

    #[test]
    fn test_rent_payments_move_claims_per_funding() {
        init_tracing();
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

        // Overpayment succeeds and the owner claims the transfer.
        let generous = deposit_view(150, TENANT, 5 * SECS_PER_DAY);
        assert!(market.tenancy.pay(&generous, contract).unwrap());
        assert_eq!(
            market.claims.claimant_of(generous.transfer().id),
            Some(OWNER)
        );

        // Underpayment fails, the count holds and the tenant may reclaim.
        let short = deposit_view(50, TENANT, 6 * SECS_PER_DAY);
        assert!(!market.tenancy.pay(&short, contract).unwrap());
        assert_eq!(market.claims.claimant_of(short.transfer().id), Some(TENANT));

        let info = market
            .tenancy
            .get_info(&plain_view(OWNER, 6 * SECS_PER_DAY), contract)
            .unwrap();
        assert_eq!(info.contract.paid_periods, 2);

        // Owner's claimable list holds the accepted deposit and the rent.
        assert_eq!(market.tenancy.get_txs_to_claim(OWNER).len(), 2);
    }

    #[test]
    fn test_tenant_walks_away_and_reclaims_deposit() {
        init_tracing();
        let market = Marketplace::new(None);
        let announcement = market.publish(ROOM, OWNER, 30, 100);

        let application = deposit_view(100, TENANT, 0);
        let deposit = application.transfer().id;
        market
            .requests
            .create_request(&application, announcement, TENANT, 0)
            .unwrap();

        let id = RequestId::new(announcement, TENANT);
        assert!(market
            .requests
            .delete_request(&plain_view(TENANT, 1), id, OWNER)
            .unwrap());

        // The refund spend passes validation only under the tenant's witness.
        let refund = Transfer::new(
            vec![TransferInput::spending(deposit)],
            vec![TransferOutput::new(TENANT, 100)],
        );
        let honest = TransferContext::new(refund.clone(), CONTRACT_ADDR).with_witness(TENANT);
        assert!(market.requests.validate_spend(&honest).valid);

        let dishonest = TransferContext::new(refund, CONTRACT_ADDR).with_witness(OWNER);
        assert!(!market.requests.validate_spend(&dishonest).valid);
    }

    #[test]
    fn test_signed_witnesses_drive_the_whole_flow() {
        init_tracing();
        let market = Marketplace::new(None);
        let owner = Party::from_seed(0x51);
        let tenant = Party::from_seed(0x52);
        let announcement = market.publish(ROOM, owner.address(), 30, 100);

        // The tenant's application transfer carries a real signature.
        let escrow = Transfer::new(
            vec![TransferInput::spending(shared_types::TransferId::new([0x77; 32]))],
            vec![TransferOutput::new(CONTRACT_ADDR, 100)],
        );
        let application = TransferContext::new(escrow.clone(), CONTRACT_ADDR)
            .with_verified_witness(&tenant.witness(escrow.id))
            .unwrap();
        assert!(market
            .requests
            .create_request(&application, announcement, tenant.address(), 0)
            .unwrap());

        let id = RequestId::new(announcement, tenant.address());
        let acceptance = Transfer::default();
        let acceptance_view = TransferContext::new(acceptance.clone(), CONTRACT_ADDR)
            .with_verified_witness(&owner.witness(acceptance.id))
            .unwrap();
        let contract = market
            .requests
            .accept_request(&acceptance_view, id, owner.address())
            .unwrap()
            .expect("signed owner witness");

        // The owner spends the deposit with a genuine signature over the
        // spending transfer; the tenant's signature cannot.
        let spend = Transfer::new(
            vec![TransferInput::spending(escrow.id)],
            vec![TransferOutput::new(owner.address(), 100)],
        );
        let owner_spend = TransferContext::new(spend.clone(), CONTRACT_ADDR)
            .with_verified_witness(&owner.witness(spend.id))
            .unwrap();
        assert!(market.requests.validate_spend(&owner_spend).valid);

        let tenant_spend = TransferContext::new(spend.clone(), CONTRACT_ADDR)
            .with_verified_witness(&tenant.witness(spend.id))
            .unwrap();
        assert!(!market.requests.validate_spend(&tenant_spend).valid);

        let info = market
            .tenancy
            .get_info(&plain_view(owner.address(), 0), contract)
            .unwrap();
        assert_eq!(info.contract.tenant, tenant.address());
    }

    #[test]
    fn test_confirmation_gate_both_interpretations() {
        init_tracing();

        for operator in [None, Some(OPERATOR)] {
            let market = Marketplace::new(operator);
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

            market
                .tenancy
                .terminate(&plain_view(TENANT, 10), contract)
                .unwrap();
            assert_eq!(market.tenancy.get_termination_requests(), vec![contract]);

            // A non-operator party tries to confirm.
            let confirmed = market
                .tenancy
                .confirm_termination(&plain_view(OWNER, 11), contract)
                .unwrap();
            assert_eq!(confirmed, operator.is_none());

            if let Some(op) = operator {
                assert!(market
                    .tenancy
                    .confirm_termination(&plain_view(op, 12), contract)
                    .unwrap());
            }

            assert!(market.tenancy.get_termination_requests().is_empty());
            assert!(market
                .tenancy
                .get_info(&plain_view(OWNER, 13), contract)
                .unwrap()
                .contract
                .terminated);
        }
    }

    #[test]
    fn test_many_tenants_queue_in_order() {
        init_tracing();
        let market = Marketplace::new(None);
        let announcement = market.publish(ROOM, OWNER, 30, 100);

        let mut rng = StdRng::seed_from_u64(11);
        let tenants: Vec<Address> = (0..8).map(|_| rng.gen()).collect();

        for tenant in &tenants {
            assert!(market
                .requests
                .create_request(&deposit_view(100, *tenant, 0), announcement, *tenant, 0)
                .unwrap());
        }

        let expected: Vec<RequestId> = tenants
            .iter()
            .map(|t| RequestId::new(announcement, *t))
            .collect();
        assert_eq!(market.requests.request_ids(OWNER), expected);

        // Dropping two from the middle keeps the rest in creation order.
        for victim in [&tenants[2], &tenants[5]] {
            market
                .requests
                .delete_request(
                    &plain_view(*victim, 1),
                    RequestId::new(announcement, *victim),
                    OWNER,
                )
                .unwrap();
        }
        let remaining: Vec<RequestId> = expected
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .map(|(_, id)| *id)
            .collect();
        assert_eq!(market.requests.request_ids(OWNER), remaining);
    }
}
