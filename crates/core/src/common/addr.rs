//! Trace address types and field extraction.
//!
//! This module defines strong types for the values flowing out of the address
//! decoder. It provides:
//! 1. **Type Safety:** `Address` and `Tag` cannot be mixed or used arithmetically by accident.
//! 2. **Field Extraction:** Tag/index/offset decomposition by shift and mask.
//! 3. **Zero-Extension:** Addresses shorter than the full field width decode deterministically.

use std::fmt;

use crate::config::CacheGeometry;

/// A 32-bit memory address from the access trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address(pub u32);

impl Address {
    /// Creates a new address from a raw 32-bit value.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// The high-order address bits identifying which block occupies a way.
///
/// A tag is opaque: it is compared for equality during a probe and never
/// used arithmetically, so no ordering is derived. The wrapped value is the
/// address right-shifted past the offset and index fields; only the low
/// `tag_bits` can be nonzero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag(pub u32);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// One trace address split into its cache-addressing fields.
///
/// Recomputed fresh for every access; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAccess {
    /// Block identity bits, compared against resident ways.
    pub tag: Tag,
    /// Selects the cache set; always in `[0, num_sets)`.
    pub index: usize,
    /// Byte position within the block; unused for hit/miss decisions.
    pub offset: u32,
}

impl fmt::Display for DecodedAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tag={} index={} offset={}",
            self.tag, self.index, self.offset
        )
    }
}

impl CacheGeometry {
    /// Splits `addr` into tag, index, and offset fields.
    ///
    /// The offset is the low `offset_bits` bits, the index the next
    /// `index_bits` bits, and the tag whatever remains above them. An
    /// address with fewer significant bits than the full 32-bit field
    /// zero-extends: the missing high bits decode as zero tag bits. This
    /// is a total function; no input panics.
    pub fn decode(&self, addr: Address) -> DecodedAccess {
        let raw = addr.val();
        let offset = raw & (self.block_bytes as u32 - 1);
        let index = ((raw >> self.offset_bits) as usize) & (self.num_sets - 1);
        // tag_bits may be zero; shifting the full width must yield zero,
        // not wrap.
        let tag = Tag(raw
            .checked_shr(self.offset_bits + self.index_bits)
            .unwrap_or(0));
        DecodedAccess { tag, index, offset }
    }
}
