//! Trace-driven set-associative cache simulator library.
//!
//! This crate replays a recorded memory-access trace against one cache
//! configuration and reports hit/miss/eviction statistics. It provides:
//! 1. **Config:** Cache geometry (size, associativity, derived bit widths) with validation.
//! 2. **Address decoding:** Tag/index/offset extraction from 32-bit addresses.
//! 3. **Cache state:** Sets and ways holding validity, tag, and recency bits.
//! 4. **Replacement:** Not-Most-Recently-Used victim selection behind a policy trait.
//! 5. **Simulation:** In-order trace replay, per-access outcomes, and counter collection.

/// Cache state: ways, sets, the set array, and the access state machine.
pub mod cache;
/// Common types (addresses, decoded fields, error taxonomy).
pub mod common;
/// Simulator configuration (defaults, cache parameters, derived geometry).
pub mod config;
/// Trace input and the simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Cache parameters; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Derived cache geometry; computed once, validated, then immutable.
pub use crate::config::CacheGeometry;
/// Trace replay driver; owns the cache state and the statistics.
pub use crate::sim::simulator::AccessSimulator;
/// Final counters; obtain from [`AccessSimulator::stats`].
pub use crate::stats::Statistics;
