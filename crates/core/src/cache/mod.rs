//! Set-associative cache state.
//!
//! This module implements the storage half of the simulator: ways grouped
//! into sets, sets gathered into the cache array, and the access state
//! machine that drives one decoded address through probe, fill, or
//! eviction. Exactly one of the three outcomes fires per access.

/// Cache replacement policy implementations.
pub mod policies;

use std::fmt;

use self::policies::{NmruPolicy, ReplacementPolicy};
use crate::common::addr::{DecodedAccess, Tag};
use crate::config::{CacheGeometry, ReplacementPolicy as PolicyType};

/// One storage slot within a cache set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Way {
    /// Whether this way currently holds a block.
    pub valid: bool,
    /// Tag of the held block; meaningless while `valid` is false.
    pub tag: Tag,
    /// Most-recently-used marker. At most one way per set carries it once
    /// the set has been touched.
    pub mru: bool,
}

impl Default for Way {
    /// Returns an invalid way with a cleared recency flag.
    fn default() -> Self {
        Self {
            valid: false,
            tag: Tag(0),
            mru: false,
        }
    }
}

/// A group of ways selected by the index bits of an address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheSet {
    /// Position of this set within the cache array.
    pub index: usize,
    /// The ways, scanned in order on every probe.
    pub ways: Vec<Way>,
}

impl CacheSet {
    /// Creates a set of `ways` invalid slots.
    fn new(index: usize, ways: usize) -> Self {
        Self {
            index,
            ways: vec![Way::default(); ways],
        }
    }
}

/// Terminal outcome of driving one access through the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The tag was already resident in the selected set.
    Hit,
    /// The tag was absent and a free way received the fill.
    MissFilled,
    /// The tag was absent, the set was full, and a victim was overwritten.
    MissEvicted,
}

impl AccessOutcome {
    /// Returns `true` for either miss variant.
    #[inline]
    pub fn is_miss(self) -> bool {
        !matches!(self, Self::Hit)
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::MissFilled => f.write_str("miss"),
            Self::MissEvicted => f.write_str("miss+evict"),
        }
    }
}

/// The full cache state: every set plus the replacement policy.
///
/// Initialized all-invalid with recency flags clear; never resized after
/// construction.
pub struct CacheArray {
    sets: Vec<CacheSet>,
    policy: Box<dyn ReplacementPolicy + Send + Sync>,
}

impl CacheArray {
    /// Builds an all-invalid cache for the given geometry.
    pub fn new(geometry: &CacheGeometry, policy: PolicyType) -> Self {
        let policy: Box<dyn ReplacementPolicy + Send + Sync> = match policy {
            PolicyType::Nmru => Box::new(NmruPolicy),
        };
        let sets = (0..geometry.num_sets)
            .map(|index| CacheSet::new(index, geometry.ways))
            .collect();
        Self { sets, policy }
    }

    /// Direct access to the set a decoded index selects.
    #[inline]
    pub fn set_for(&self, index: usize) -> &CacheSet {
        &self.sets[index]
    }

    /// Drives one decoded access through probe → fill → evict.
    ///
    /// The three stages are mutually exclusive; the first that applies
    /// resolves the access:
    /// 1. **Probe:** the first valid way (in way order) whose tag matches
    ///    is a hit.
    /// 2. **Fill:** on a miss, the first invalid way (in way order)
    ///    receives the tag.
    /// 3. **Evict:** with no free way, the policy names a victim, which is
    ///    overwritten in place; validity stays set.
    ///
    /// Whichever way resolved the access is designated most recently used.
    /// Every non-hit mutates exactly one way in exactly one set.
    pub fn access(&mut self, decoded: &DecodedAccess) -> AccessOutcome {
        let set = &mut self.sets[decoded.index];

        if let Some(way) = set
            .ways
            .iter()
            .position(|w| w.valid && w.tag == decoded.tag)
        {
            self.policy.touch(set, way);
            return AccessOutcome::Hit;
        }

        if let Some(way) = set.ways.iter().position(|w| !w.valid) {
            set.ways[way].valid = true;
            set.ways[way].tag = decoded.tag;
            self.policy.touch(set, way);
            return AccessOutcome::MissFilled;
        }

        let way = self.policy.victim(set);
        tracing::trace!(
            set = set.index,
            way,
            old = %set.ways[way].tag,
            new = %decoded.tag,
            "evict"
        );
        set.ways[way].tag = decoded.tag;
        self.policy.touch(set, way);
        AccessOutcome::MissEvicted
    }
}
