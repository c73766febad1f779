//! # Zone Node Flow
//!
//! A leaf node resolves addresses against the partition table, builds a block
//! from in-scope and cross-shard transfers, and runs both validation passes.
//!
//! ## Flow Tested:
//!
//! 1. **Location (01)**: node coordinates from a name
//! 2. **Sharding (02)**: scope and cross-shard decisions per transfer
//! 3. **Block Validation (03)**: body commitments, then execution results

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use hc_01_location::{Location, NodeContext, Tier};
    use hc_02_sharding::{PrefixTable, ShardResolver, ShardingApi};
    use hc_03_block_validation::{
        BodyError, Body, ErrorClass, Log, Receipt, ReceiptStatus, StateError, Transaction,
    };
    use rand::Rng;
    use shared_types::{Address, Hash};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn cyprus1() -> Location {
        "cyprus1".parse().unwrap()
    }

    fn hydra2() -> Location {
        Location::zone(2, 1).unwrap()
    }

    fn resolver() -> ShardResolver {
        ShardResolver::reference(NodeContext::new(cyprus1()))
    }

    /// Receipts for `txs`, the first one emitting `etxs`.
    fn receipts_for(txs: &[Transaction], etxs: &[Transaction]) -> Vec<Receipt> {
        txs.iter()
            .enumerate()
            .map(|(i, tx)| Receipt {
                status: ReceiptStatus::Successful,
                cumulative_gas_used: TX_GAS * (i as u64 + 1),
                gas_used: TX_GAS,
                tx_hash: tx.hash(),
                logs: vec![Log {
                    address: tx.to.unwrap_or_default(),
                    topics: vec![tx.hash()],
                    data: Vec::new(),
                }],
                etxs: if i == 0 { etxs.to_vec() } else { Vec::new() },
            })
            .collect()
    }

    // =============================================================================
    // INTEGRATION TESTS: SHARDING -> VALIDATION
    // =============================================================================

    #[test]
    fn test_in_scope_transfers_pass_both_stages() {
        let resolver = resolver();
        let table = resolver.table().clone();
        let alice = address_in(&table, &cyprus1(), 0xa1);
        let bob = address_in(&table, &cyprus1(), 0xb0);
        assert!(resolver.is_in_chain_scope(&alice));
        assert!(resolver.is_in_chain_scope(&bob));
        assert!(!resolver.is_cross_shard(&alice, &bob));

        let fixture = ChainFixture::new();
        let validator = fixture.validator(resolver.node_location());
        let txs = vec![transfer(alice, bob, 0), transfer(bob, alice, 0)];
        let receipts = receipts_for(&txs, &[]);
        let body = Body {
            transactions: txs,
            ..Default::default()
        };
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            body,
            &receipts,
        );

        assert_eq!(validator.validate_body(&block), Ok(()));
        assert_eq!(
            validator.validate_state(
                &block,
                &StaticPostState(STATE_ROOT),
                &receipts,
                2 * TX_GAS
            ),
            Ok(())
        );
    }

    #[test]
    fn test_cross_shard_transfer_carried_as_etx() {
        let resolver = resolver();
        let table = resolver.table().clone();
        let alice = address_in(&table, &cyprus1(), 0xa1);
        let carol = address_in(&table, &hydra2(), 0xc0);
        assert_eq!(resolver.resolve(&carol), Some(hydra2()));
        assert!(resolver.is_cross_shard(&alice, &carol));
        assert!(!resolver.is_in_chain_scope(&carol));

        let fixture = ChainFixture::new();
        let validator = fixture.validator(cyprus1());
        let tx = transfer(alice, carol, 0);
        let etx = as_etx(&tx);
        let receipts = receipts_for(std::slice::from_ref(&tx), std::slice::from_ref(&etx));
        let body = Body {
            transactions: vec![tx],
            ext_transactions: vec![etx],
            ..Default::default()
        };
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            body,
            &receipts,
        );

        assert_eq!(validator.validate_body(&block), Ok(()));
        assert_eq!(
            validator.validate_state(&block, &StaticPostState(STATE_ROOT), &receipts, TX_GAS),
            Ok(())
        );
    }

    #[test]
    fn test_emitted_etx_missing_from_body_rejected_after_execution() {
        let table = PrefixTable::reference();
        let alice = address_in(&table, &cyprus1(), 0xa1);
        let carol = address_in(&table, &hydra2(), 0xc0);

        let fixture = ChainFixture::new();
        let validator = fixture.validator(cyprus1());
        let tx = transfer(alice, carol, 0);
        let receipts = receipts_for(std::slice::from_ref(&tx), &[as_etx(&tx)]);
        let body = Body {
            transactions: vec![tx],
            ..Default::default()
        };
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            body,
            &receipts,
        );

        // The body is self-consistent; only execution reveals the omission
        assert_eq!(validator.validate_body(&block), Ok(()));
        let err = validator
            .validate_state(&block, &StaticPostState(STATE_ROOT), &receipts, TX_GAS)
            .unwrap_err();
        assert!(matches!(err, StateError::EtxEmissionMismatch { .. }));
        assert_eq!(err.class(), ErrorClass::Invalid);
    }

    #[test]
    fn test_tampered_body_rejected() {
        let table = PrefixTable::reference();
        let alice = address_in(&table, &cyprus1(), 0xa1);
        let bob = address_in(&table, &cyprus1(), 0xb0);

        let fixture = ChainFixture::new();
        let validator = fixture.validator(cyprus1());
        let body = Body {
            transactions: vec![transfer(alice, bob, 0)],
            ..Default::default()
        };
        let sealed = seal(&validator, fixture.next_header(), body);

        let (header, mut body) = sealed.into_parts();
        body.transactions[0].nonce = 7;
        let tampered = hc_03_block_validation::Block::new(header, body);

        let err = validator.validate_body(&tampered).unwrap_err();
        assert!(matches!(err, BodyError::TxRootMismatch { .. }));
        assert!(err.class().rejects_block());
    }

    #[test]
    fn test_resubmitted_block_is_benign() {
        let fixture = ChainFixture::new();
        let validator = fixture.validator(cyprus1());
        let block = seal(&validator, fixture.next_header(), Body::default());
        assert_eq!(validator.validate_body(&block), Ok(()));

        fixture.chain.insert_with_state(block.header().clone());
        let err = validator.validate_body(&block).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Benign);
    }

    #[test]
    fn test_leaf_node_ignores_manifest() {
        let location = cyprus1();
        assert_eq!(location.tier(), Tier::Leaf);

        let fixture = ChainFixture::new();
        let validator = fixture.validator(location);
        let mut header = fixture.next_header();
        header.set_manifest_hash(Tier::Leaf, Hash::new([0xee; 32]));
        let block = seal(&validator, header, Body::default());
        assert_eq!(validator.validate_body(&block), Ok(()));
    }

    // =============================================================================
    // INTEGRATION TESTS: RESOLUTION ACROSS NODES
    // =============================================================================

    #[test]
    fn test_unowned_prefix_is_never_cross_shard() {
        let resolver = resolver();
        let mut bytes = [0x42; 20];
        bytes[0] = 200;
        let stray = Address::new(bytes);
        let alice = address_in(resolver.table(), &cyprus1(), 0xa1);

        assert_eq!(resolver.resolve(&stray), None);
        assert!(!resolver.is_in_chain_scope(&stray));
        assert!(!resolver.is_cross_shard(&alice, &stray));
    }

    #[test]
    fn test_every_node_agrees_on_owner() {
        let table = PrefixTable::reference();
        let resolvers: Vec<ShardResolver> = Location::all()
            .into_iter()
            .map(|loc| ShardResolver::new(table.clone(), NodeContext::new(loc)))
            .collect();

        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let mut bytes = [0u8; 20];
            rng.fill(&mut bytes);
            let address = Address::new(bytes);
            let expected = if address.is_zero() {
                Some(Location::top())
            } else {
                table.owner_of_prefix(address.prefix())
            };
            for resolver in &resolvers {
                assert_eq!(resolver.resolve(&address), expected);
            }
        }
    }

    #[test]
    fn test_zero_address_in_every_scope() {
        for location in Location::all() {
            let resolver = ShardResolver::reference(NodeContext::new(location));
            assert!(resolver.is_in_chain_scope(&Address::ZERO));
        }
    }
}
