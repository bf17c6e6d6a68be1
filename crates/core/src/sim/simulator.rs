//! Trace replay driver.
//!
//! Owns the cache array and the statistics side-by-side and drives each
//! access record through decode → lookup → fill/evict → counter update.

use crate::cache::{AccessOutcome, CacheArray};
use crate::common::addr::DecodedAccess;
use crate::common::error::ConfigError;
use crate::config::{CacheConfig, CacheGeometry};
use crate::sim::trace::{AccessRecord, Operation};
use crate::stats::Statistics;

/// Per-access diagnostic output: decoded fields plus the outcome.
///
/// Returned by [`AccessSimulator::step`] so callers can display the
/// decoded trace; carries no ownership into the simulator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessTrace {
    /// Tag/index/offset of the access.
    pub decoded: DecodedAccess,
    /// Load or store.
    pub op: Operation,
    /// How the access resolved.
    pub outcome: AccessOutcome,
}

/// Trace replay driver: cache state plus running counters.
///
/// Exclusively owns its [`CacheArray`] and [`Statistics`] for the whole
/// run; replay is strictly sequential because cache state depends on the
/// full access history.
pub struct AccessSimulator {
    geometry: CacheGeometry,
    cache: CacheArray,
    stats: Statistics,
}

impl AccessSimulator {
    /// Validates the configuration and builds an all-invalid cache.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for any geometry the cache cannot
    /// realize; nothing is simulated in that case.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let geometry = CacheGeometry::new(config)?;
        tracing::info!(
            size_bytes = geometry.size_bytes,
            ways = geometry.ways,
            sets = geometry.num_sets,
            index_bits = geometry.index_bits,
            tag_bits = geometry.tag_bits,
            "cache configured"
        );
        Ok(Self {
            cache: CacheArray::new(&geometry, config.policy),
            geometry,
            stats: Statistics::default(),
        })
    }

    /// The validated geometry in use.
    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// The counters accumulated so far.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// The cache state, for diagnostic inspection.
    pub fn cache(&self) -> &CacheArray {
        &self.cache
    }

    /// Drives one record through decode → lookup → fill/evict → counters.
    ///
    /// Exactly one outcome fires and the statistics are updated exactly
    /// once per access.
    pub fn step(&mut self, record: &AccessRecord) -> AccessTrace {
        let decoded = self.geometry.decode(record.addr);
        let outcome = self.cache.access(&decoded);
        self.stats.record(record.op, outcome);
        tracing::trace!(
            addr = %record.addr,
            op = %record.op,
            tag = %decoded.tag,
            index = decoded.index,
            offset = decoded.offset,
            outcome = %outcome,
            "access"
        );
        AccessTrace {
            decoded,
            op: record.op,
            outcome,
        }
    }

    /// Replays `trace` in order and returns the final counters.
    ///
    /// The result is order-dependent: validity, tags, and recency carry
    /// the full history, so records are never reordered or batched.
    pub fn run(&mut self, trace: &[AccessRecord]) -> &Statistics {
        for record in trace {
            let _ = self.step(record);
        }
        &self.stats
    }
}
