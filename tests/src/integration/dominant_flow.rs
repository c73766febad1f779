//! # Dominant Chain Flow
//!
//! Region and prime nodes commit to their subordinates through a manifest,
//! and every chain rolls up the ETXs emitted since the last coincident block.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use hc_01_location::{Location, Tier};
    use hc_03_block_validation::{
        calc_gas_limit, Block, Body, BodyError, ErrorClass, Header, Receipt, StateError,
        MIN_GAS_LIMIT,
    };
    use shared_types::{Address, Hash, EMPTY_ROOT_HASH};

    fn sub_blocks(n: u8) -> Vec<Hash> {
        (1..=n).map(|i| Hash::new([i; 32])).collect()
    }

    fn etx(nonce: u64) -> hc_03_block_validation::Transaction {
        as_etx(&transfer(
            Address::new([0x14; 20]),
            Address::new([0x77; 20]),
            nonce,
        ))
    }

    // =============================================================================
    // SUBORDINATE MANIFEST
    // =============================================================================

    #[test]
    fn test_region_block_commits_to_zone_manifest() {
        let fixture = ChainFixture::new();
        let validator = fixture.validator(Location::region(0).unwrap());
        let body = Body {
            sub_manifest: sub_blocks(3),
            ..Default::default()
        };
        let block = seal(&validator, fixture.next_header(), body);

        assert_ne!(block.header().manifest_hash(Tier::Leaf), EMPTY_ROOT_HASH);
        assert_eq!(validator.validate_body(&block), Ok(()));
    }

    #[test]
    fn test_region_block_without_manifest_rejected() {
        let fixture = ChainFixture::new();
        let validator = fixture.validator(Location::region(1).unwrap());
        let block = seal(&validator, fixture.next_header(), Body::default());

        let err = validator.validate_body(&block).unwrap_err();
        assert_eq!(
            err,
            BodyError::BadSubManifest {
                remote: EMPTY_ROOT_HASH,
                local: EMPTY_ROOT_HASH,
            }
        );
        assert_eq!(err.class(), ErrorClass::Invalid);
    }

    #[test]
    fn test_prime_checks_region_slot_only() {
        let fixture = ChainFixture::new();
        let validator = fixture.validator(Location::top());
        let mut header = fixture.next_header();
        header.set_manifest_hash(Tier::Leaf, Hash::new([0xdd; 32]));
        let body = Body {
            sub_manifest: sub_blocks(2),
            ..Default::default()
        };
        let block = seal(&validator, header, body);
        assert_eq!(validator.validate_body(&block), Ok(()));

        // Same manifest committed in the wrong slot
        let (mut header, body) = block.into_parts();
        let committed = header.manifest_hash(Tier::Mid);
        header.set_manifest_hash(Tier::Mid, EMPTY_ROOT_HASH);
        header.set_manifest_hash(Tier::Leaf, committed);
        let misplaced = Block::new(header, body);
        assert!(matches!(
            validator.validate_body(&misplaced),
            Err(BodyError::BadSubManifest { .. })
        ));
    }

    // =============================================================================
    // ETX ROLLUP
    // =============================================================================

    #[test]
    fn test_rollup_since_coincident_block() {
        let mut fixture = ChainFixture::new();
        let coincident = fixture.extend(vec![etx(1), etx(2)]);
        fixture.chain.mark_coincident(coincident);
        fixture.extend(vec![etx(3)]);
        fixture.extend(vec![etx(4), etx(5)]);

        let validator = fixture.validator(Location::zone(1, 2).unwrap());
        let receipts = vec![Receipt {
            cumulative_gas_used: TX_GAS,
            gas_used: TX_GAS,
            etxs: vec![etx(6)],
            ..Default::default()
        }];
        let body = Body {
            ext_transactions: vec![etx(6)],
            ..Default::default()
        };
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            body,
            &receipts,
        );
        // History since the coincident block, then this block's own ETX
        assert_eq!(
            block.header().etx_rollup_hash,
            validator.derive_root(&[etx(3), etx(4), etx(5), etx(6)])
        );
        assert_eq!(
            validator.validate_state(&block, &StaticPostState(STATE_ROOT), &receipts, TX_GAS),
            Ok(())
        );
    }

    #[test]
    fn test_rollup_missing_own_etxs_rejected() {
        let mut fixture = ChainFixture::new();
        fixture.extend(vec![etx(1)]);

        let validator = fixture.validator(Location::zone(2, 2).unwrap());
        let receipts = vec![Receipt {
            cumulative_gas_used: TX_GAS,
            gas_used: TX_GAS,
            etxs: vec![etx(2)],
            ..Default::default()
        }];
        let body = Body {
            ext_transactions: vec![etx(2)],
            ..Default::default()
        };
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            body,
            &receipts,
        );
        let (mut header, body) = block.into_parts();
        header.etx_rollup_hash = validator.derive_root(&[etx(1)]);
        let block = Block::new(header, body);

        assert_eq!(
            validator.validate_state(&block, &StaticPostState(STATE_ROOT), &receipts, TX_GAS),
            Err(StateError::RollupRootMismatch {
                remote: validator.derive_root(&[etx(1)]),
                local: validator.derive_root(&[etx(1), etx(2)]),
            })
        );
    }

    #[test]
    fn test_rollup_root_mismatch_rejected() {
        let mut fixture = ChainFixture::new();
        fixture.extend(vec![etx(1)]);

        let validator = fixture.validator(Location::zone(0, 1).unwrap());
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            Body::default(),
            &[],
        );
        let (mut header, body) = block.into_parts();
        header.etx_rollup_hash = EMPTY_ROOT_HASH;
        let block = Block::new(header, body);

        let err = validator
            .validate_state(&block, &StaticPostState(STATE_ROOT), &[], 0)
            .unwrap_err();
        assert!(matches!(err, StateError::RollupRootMismatch { .. }));
    }

    #[test]
    fn test_broken_history_defers_state_validation() {
        let fixture = ChainFixture::new();
        // Orphan segment: height 5 whose parent is unknown
        let orphan = fixture.chain.insert_with_state(Header {
            parent_hash: Hash::new([0x99; 32]),
            number: 5,
            ..Default::default()
        });
        let validator = fixture.validator(Location::zone(2, 0).unwrap());
        let header = Header {
            parent_hash: orphan,
            number: 6,
            root: STATE_ROOT,
            ..Default::default()
        };
        let block = seal(&validator, header, Body::default());

        assert_eq!(validator.validate_body(&block), Ok(()));
        let err = validator
            .validate_state(&block, &StaticPostState(STATE_ROOT), &[], 0)
            .unwrap_err();
        assert!(matches!(err, StateError::RollupUnavailable(_)));
        assert_eq!(err.class(), ErrorClass::DataUnavailable);
    }

    #[test]
    fn test_pruned_parent_defers_body_validation() {
        let fixture = ChainFixture::new();
        fixture.chain.prune_state(&fixture.head);
        let validator = fixture.validator(Location::zone(0, 0).unwrap());
        let block = seal(&validator, fixture.next_header(), Body::default());

        let err = validator.validate_body(&block).unwrap_err();
        assert_eq!(
            err,
            BodyError::PrunedAncestor {
                hash: fixture.head,
                number: 1,
            }
        );
        assert!(!err.class().rejects_block());
    }

    #[test]
    fn test_state_root_mismatch_after_execution() {
        let fixture = ChainFixture::new();
        let validator = fixture.validator(Location::zone(0, 0).unwrap());
        let receipts: Vec<Receipt> = Vec::new();
        let block = seal_executed(
            &validator,
            &fixture.chain,
            fixture.next_header(),
            Body::default(),
            &receipts,
        );
        let err = validator
            .validate_state(&block, &StaticPostState(Hash::new([1; 32])), &receipts, 0)
            .unwrap_err();
        assert_eq!(
            err,
            StateError::StateRootMismatch {
                remote: STATE_ROOT,
                local: Hash::new([1; 32]),
            }
        );
    }

    // =============================================================================
    // GAS LIMIT PROGRESSION
    // =============================================================================

    #[test]
    fn test_gas_limit_converges_on_target() {
        let target = 8_100_000;
        let mut limit = 8_000_000;
        let mut steps = 0;
        while limit != target {
            let next = calc_gas_limit(limit, target);
            assert!(next > limit && next <= target);
            assert!(next - limit < limit / 1024);
            limit = next;
            steps += 1;
        }
        assert!(steps > 1);
        assert_eq!(calc_gas_limit(limit, target), target);
    }

    #[test]
    fn test_gas_limit_never_drops_below_floor() {
        let mut limit = 1_000_000;
        for _ in 0..20_000 {
            limit = calc_gas_limit(limit, 0);
            assert!(limit >= MIN_GAS_LIMIT);
        }
        assert_eq!(limit, MIN_GAS_LIMIT);
    }
}
