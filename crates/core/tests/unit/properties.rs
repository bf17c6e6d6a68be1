//! # Property-Based Invariants
//!
//! Drives randomized traces through the simulator and checks the
//! accounting identities that must hold for every trace and geometry:
//! hits + misses == accesses, the load/store splits sum to their totals,
//! evictions never exceed misses, and replay is deterministic.

use proptest::prelude::*;

use cachesim_core::common::addr::Address;
use cachesim_core::config::{CacheConfig, ReplacementPolicy};
use cachesim_core::sim::trace::{AccessRecord, Operation};
use cachesim_core::{AccessSimulator, Statistics};

/// A record over a deliberately small address range so traces conflict
/// often enough to exercise fills, hits, and evictions alike.
fn arb_record() -> impl Strategy<Value = AccessRecord> {
    (0u32..0x8000, any::<bool>()).prop_map(|(addr, store)| AccessRecord {
        addr: Address::new(addr),
        op: if store {
            Operation::Store
        } else {
            Operation::Load
        },
    })
}

fn arb_trace() -> impl Strategy<Value = Vec<AccessRecord>> {
    prop::collection::vec(arb_record(), 0..512)
}

/// Replays `trace` against a fresh cache of the given shape.
fn replay(trace: &[AccessRecord], size_bytes: usize, ways: usize) -> Statistics {
    let mut sim = AccessSimulator::new(&CacheConfig {
        size_bytes,
        ways,
        policy: ReplacementPolicy::Nmru,
    })
    .unwrap();
    sim.run(trace).clone()
}

proptest! {
    /// The counter identities hold for every trace on a 2-way cache.
    #[test]
    fn accounting_identities_two_way(trace in arb_trace()) {
        let stats = replay(&trace, 1024, 2);
        prop_assert_eq!(stats.accesses, trace.len() as u64);
        prop_assert_eq!(stats.hits + stats.misses, stats.accesses);
        prop_assert_eq!(stats.loads + stats.stores, stats.accesses);
        prop_assert_eq!(stats.load_hits + stats.load_misses, stats.loads);
        prop_assert_eq!(stats.store_hits + stats.store_misses, stats.stores);
    }

    /// Every eviction is a miss; the reverse need not hold.
    #[test]
    fn evictions_never_exceed_misses(trace in arb_trace()) {
        let stats = replay(&trace, 512, 2);
        prop_assert!(stats.evictions <= stats.misses);
    }

    /// The identities survive the direct-mapped special case.
    #[test]
    fn accounting_identities_direct_mapped(trace in arb_trace()) {
        let stats = replay(&trace, 256, 1);
        prop_assert_eq!(stats.hits + stats.misses, stats.accesses);
        prop_assert_eq!(stats.load_hits + stats.load_misses, stats.loads);
        prop_assert_eq!(stats.store_hits + stats.store_misses, stats.stores);
        prop_assert!(stats.evictions <= stats.misses);
    }

    /// The simulator is a pure function of (geometry, trace): replaying
    /// the same trace on a fresh cache reproduces the counters exactly.
    #[test]
    fn replay_is_deterministic(trace in arb_trace()) {
        let first = replay(&trace, 1024, 4);
        let second = replay(&trace, 1024, 4);
        prop_assert_eq!(first, second);
    }

    /// Immediately repeating an access never misses twice.
    #[test]
    fn repeated_access_hits(record in arb_record()) {
        let mut sim = AccessSimulator::new(&CacheConfig {
            size_bytes: 1024,
            ways: 2,
            policy: ReplacementPolicy::Nmru,
        }).unwrap();
        let _ = sim.step(&record);
        let step = sim.step(&record);
        prop_assert!(!step.outcome.is_miss());
    }
}
