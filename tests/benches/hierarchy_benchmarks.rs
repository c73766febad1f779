//! # Hierarchy-Chain Benchmarks
//!
//! | Subsystem | Operation | Expectation |
//! |-----------|-----------|-------------|
//! | hc-02 Sharding | Address resolution | Own-slice hits in the first probes |
//! | hc-03 Block Validation | Body validation | Linear in transaction count |
//! | hc-03 Block Validation | Gas limit step | Constant |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hc_01_location::{Location, NodeContext};
use hc_02_sharding::{PrefixTable, ShardResolver, ShardingApi};
use hc_03_block_validation::{calc_gas_limit, Body};
use hc_tests::integration::fixtures::{address_in, seal, transfer, ChainFixture};
use rand::Rng;
use shared_types::Address;
use std::time::Duration;

// ============================================================================
// HC-02: Address Resolution
// ============================================================================

fn bench_address_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc-02-resolution");
    group.measurement_time(Duration::from_secs(5));

    let table = PrefixTable::reference();
    let node = Location::zone(0, 0).unwrap_or_default();
    let resolver = ShardResolver::new(table.clone(), NodeContext::new(node));

    let local = address_in(&table, &node, 0x11);
    let far = address_in(&table, &Location::region(2).unwrap_or_default(), 0x22);
    let mut stray_bytes = [0x33; 20];
    stray_bytes[0] = 0xf0;
    let stray = Address::new(stray_bytes);

    for (name, address) in [("own_zone", local), ("far_region", far), ("unowned", stray)] {
        group.bench_with_input(BenchmarkId::new("resolve", name), &address, |b, addr| {
            b.iter(|| resolver.resolve(black_box(addr)))
        });
    }

    let mut rng = rand::thread_rng();
    let random: Vec<Address> = (0..1_000)
        .map(|_| {
            let mut bytes = [0u8; 20];
            rng.fill(&mut bytes);
            Address::new(bytes)
        })
        .collect();
    group.throughput(Throughput::Elements(random.len() as u64));
    group.bench_function("resolve_random_1000", |b| {
        b.iter(|| {
            random
                .iter()
                .filter(|addr| resolver.resolve(addr).is_some())
                .count()
        })
    });

    group.finish();
}

// ============================================================================
// HC-03: Body Validation
// ============================================================================

fn bench_body_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc-03-body-validation");
    group.measurement_time(Duration::from_secs(10));

    let fixture = ChainFixture::new();
    let node = Location::zone(1, 1).unwrap_or_default();
    let validator = fixture.validator(node);
    let table = PrefixTable::reference();
    let from = address_in(&table, &node, 0xa0);
    let to = address_in(&table, &node, 0xb0);

    for tx_count in [10usize, 100, 1_000] {
        let body = Body {
            transactions: (0..tx_count as u64)
                .map(|nonce| transfer(from, to, nonce))
                .collect(),
            ..Default::default()
        };
        let block = seal(&validator, fixture.next_header(), body);

        group.throughput(Throughput::Elements(tx_count as u64));
        group.bench_with_input(BenchmarkId::new("txs", tx_count), &block, |b, block| {
            b.iter(|| validator.validate_body(black_box(block)))
        });
    }

    group.finish();
}

fn bench_gas_limit(c: &mut Criterion) {
    c.bench_function("hc-03-gas-limit-step", |b| {
        b.iter(|| calc_gas_limit(black_box(8_000_000), black_box(30_000_000)))
    });
}

criterion_group!(
    benches,
    bench_address_resolution,
    bench_body_validation,
    bench_gas_limit
);
criterion_main!(benches);
