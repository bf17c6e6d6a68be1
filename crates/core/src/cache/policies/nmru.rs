//! Not-Most-Recently-Used (NMRU) Replacement Policy.
//!
//! Evicts any way except the one touched most recently. A single recency
//! bit per way suffices, making NMRU far cheaper in hardware than full
//! LRU while still protecting the hottest block in each set.

use super::ReplacementPolicy;
use crate::cache::CacheSet;

/// NMRU policy. Stateless: the recency it consults is the `mru` bit kept
/// on each way.
#[derive(Clone, Copy, Debug, Default)]
pub struct NmruPolicy;

impl ReplacementPolicy for NmruPolicy {
    /// Flags `way` as most recently used and clears the flag on every
    /// other way in the set.
    ///
    /// Invariant after return: exactly one way in `set` carries the flag.
    fn touch(&self, set: &mut CacheSet, way: usize) {
        for (i, w) in set.ways.iter_mut().enumerate() {
            w.mru = i == way;
        }
    }

    /// Returns the lowest-index way whose recency flag is clear.
    ///
    /// A direct-mapped set never clears its lone way's flag, so no way
    /// reports false there; the fallback overwrites way 0, giving
    /// direct-mapped sets their unconditional-replacement behavior.
    fn victim(&self, set: &CacheSet) -> usize {
        set.ways.iter().position(|w| !w.mru).unwrap_or(0)
    }
}
