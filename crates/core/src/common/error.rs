//! Error taxonomy for the cache simulator.
//!
//! This module defines the failure modes a simulation run can surface:
//! 1. **Configuration:** Geometry that cannot describe a real cache; fatal
//!    before any access is processed.
//! 2. **Trace Input:** Malformed records; the parser fails fast on the
//!    first bad line so counters are never silently corrupted.
//! 3. **Umbrella:** A top-level error for callers that drive both stages.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Invalid cache geometry.
///
/// Each variant carries the offending numbers for the operator to act on.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Associativity of zero describes no storage.
    #[error("associativity must be positive")]
    ZeroWays,

    /// Capacity is zero or does not divide into whole blocks.
    #[error("cache size {size_bytes} B is not a positive multiple of the {block_bytes} B block size")]
    SizeNotBlockMultiple {
        /// Requested capacity in bytes.
        size_bytes: usize,
        /// Fixed block size in bytes.
        block_bytes: usize,
    },

    /// Blocks do not divide evenly into sets of `ways` slots.
    #[error("{num_blocks} blocks cannot be divided evenly into {ways}-way sets")]
    BlocksNotWayMultiple {
        /// Derived block count.
        num_blocks: usize,
        /// Requested associativity.
        ways: usize,
    },

    /// Set count is not a power of two, so no integral index width exists.
    #[error("{num_sets} sets cannot be addressed by an integral number of index bits")]
    SetsNotPowerOfTwo {
        /// Derived set count.
        num_sets: usize,
    },

    /// Index and offset fields together overflow the address width.
    #[error("{index_bits} index bits plus {offset_bits} offset bits exceed the {address_bits}-bit address")]
    CacheTooLarge {
        /// Derived index field width.
        index_bits: u32,
        /// Fixed offset field width.
        offset_bits: u32,
        /// Fixed address width.
        address_bits: u32,
    },
}

/// Malformed trace input.
///
/// Line numbers are 1-based positions in the traffic file.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace could not be read at all.
    #[error("failed to read trace")]
    Io(#[from] io::Error),

    /// A line held an address with no operation flag after it.
    #[error("line {line}: expected \"<address> <0|1>\"")]
    MissingField {
        /// Offending line number.
        line: usize,
    },

    /// An address token did not parse as 32-bit hexadecimal.
    #[error("line {line}: bad address {token:?}")]
    BadAddress {
        /// Offending line number.
        line: usize,
        /// The token as it appeared.
        token: String,
        /// The underlying integer-parse failure.
        #[source]
        source: ParseIntError,
    },

    /// An operation flag was neither `0` (load) nor `1` (store).
    #[error("line {line}: operation flag {token:?} is neither 0 (load) nor 1 (store)")]
    BadOperation {
        /// Offending line number.
        line: usize,
        /// The token as it appeared.
        token: String,
    },
}

/// Any failure the simulator can report to a caller.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid cache geometry.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed trace input.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
