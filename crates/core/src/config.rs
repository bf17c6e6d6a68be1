//! Configuration system for the cache simulator.
//!
//! This module defines the structures that parameterize a simulation run. It provides:
//! 1. **Defaults:** Baseline constants (block size, address width, cache size).
//! 2. **Structures:** `CacheConfig` (user input) and `CacheGeometry` (derived, validated).
//! 3. **Enums:** Replacement policy selection.
//!
//! Configuration is supplied via JSON (`CacheConfig::from_json`) or `CacheConfig::default()`;
//! the CLI overrides individual fields from its flags.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
pub mod defaults {
    /// Cache block (line) size in bytes.
    ///
    /// Fixed by the traffic-trace format; every derived quantity assumes it.
    pub const BLOCK_BYTES: usize = 128;

    /// Width of a trace address in bits.
    ///
    /// Addresses with fewer significant hex digits zero-extend to this width.
    pub const ADDRESS_BITS: u32 = 32;

    /// Bits selecting a byte within a block: log2([`BLOCK_BYTES`]).
    pub const OFFSET_BITS: u32 = 7;

    /// Default total cache capacity in bytes (2 KiB).
    pub const CACHE_SIZE: usize = 2048;

    /// Default associativity (2-way).
    pub const CACHE_WAYS: usize = 2;
}

/// Cache replacement policy algorithms.
///
/// Selects the algorithm used to pick a victim way when a miss lands in
/// a full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Not-Most-Recently-Used: evict any way except the most recently touched one.
    #[default]
    #[serde(alias = "Nmru")]
    Nmru,
}

/// User-supplied cache parameters.
///
/// Block size and address width are fixed constants (see [`defaults`]);
/// only capacity, associativity, and the policy vary per run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Total cache capacity in bytes.
    pub size_bytes: usize,
    /// Ways per set (associativity).
    pub ways: usize,
    /// Victim selection policy.
    pub policy: ReplacementPolicy,
}

impl Default for CacheConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            ways: defaults::CACHE_WAYS,
            policy: ReplacementPolicy::default(),
        }
    }
}

impl CacheConfig {
    /// Deserializes a configuration from JSON text.
    ///
    /// Missing fields take their defaults, so a partial document such as
    /// `{"ways": 4}` is accepted.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Derived cache geometry, computed once at construction and immutable after.
///
/// All field relationships hold by construction: `num_blocks = size_bytes /
/// block_bytes`, `num_sets = num_blocks / ways`, `offset_bits + index_bits +
/// tag_bits == ADDRESS_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    /// Total cache capacity in bytes.
    pub size_bytes: usize,
    /// Block size in bytes (always [`defaults::BLOCK_BYTES`]).
    pub block_bytes: usize,
    /// Ways per set.
    pub ways: usize,
    /// Number of blocks the cache can hold.
    pub num_blocks: usize,
    /// Number of associative sets.
    pub num_sets: usize,
    /// Bits addressing a byte within a block.
    pub offset_bits: u32,
    /// Bits selecting a set.
    pub index_bits: u32,
    /// Remaining high-order bits, compared for block identity.
    pub tag_bits: u32,
}

impl CacheGeometry {
    /// Validates `config` and computes the derived geometry.
    ///
    /// # Errors
    ///
    /// All geometry errors are fatal and reported before any access is
    /// processed:
    /// - [`ConfigError::ZeroWays`] when the associativity is zero.
    /// - [`ConfigError::SizeNotBlockMultiple`] when the capacity is zero or
    ///   not a multiple of the block size.
    /// - [`ConfigError::BlocksNotWayMultiple`] when the blocks cannot be
    ///   divided evenly into sets.
    /// - [`ConfigError::SetsNotPowerOfTwo`] when the set count cannot be
    ///   addressed by an integral number of index bits.
    /// - [`ConfigError::CacheTooLarge`] when index plus offset bits exceed
    ///   the address width.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let block_bytes = defaults::BLOCK_BYTES;
        if config.ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        if config.size_bytes == 0 || config.size_bytes % block_bytes != 0 {
            return Err(ConfigError::SizeNotBlockMultiple {
                size_bytes: config.size_bytes,
                block_bytes,
            });
        }
        let num_blocks = config.size_bytes / block_bytes;
        if num_blocks % config.ways != 0 {
            return Err(ConfigError::BlocksNotWayMultiple {
                num_blocks,
                ways: config.ways,
            });
        }
        let num_sets = num_blocks / config.ways;
        if !num_sets.is_power_of_two() {
            return Err(ConfigError::SetsNotPowerOfTwo { num_sets });
        }
        let index_bits = num_sets.trailing_zeros();
        let offset_bits = defaults::OFFSET_BITS;
        if index_bits + offset_bits > defaults::ADDRESS_BITS {
            return Err(ConfigError::CacheTooLarge {
                index_bits,
                offset_bits,
                address_bits: defaults::ADDRESS_BITS,
            });
        }
        let tag_bits = defaults::ADDRESS_BITS - index_bits - offset_bits;

        Ok(Self {
            size_bytes: config.size_bytes,
            block_bytes,
            ways: config.ways,
            num_blocks,
            num_sets,
            offset_bits,
            index_bits,
            tag_bits,
        })
    }
}
