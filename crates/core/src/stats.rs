//! Simulation statistics collection and reporting.
//!
//! This module tracks the aggregate counters for one trace replay:
//! 1. **Totals:** accesses, loads, and stores.
//! 2. **Hits and misses:** overall and split by operation.
//! 3. **Evictions:** the subset of misses that displaced a valid block.

use crate::cache::AccessOutcome;
use crate::sim::trace::Operation;

/// Aggregate counters for one simulation run.
///
/// Counters only increase. [`Statistics::record`] is the sole mutation
/// point and runs exactly once per access, so `hits + misses == accesses`
/// and the load/store splits sum to their totals by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Total trace records processed.
    pub accesses: u64,
    /// Records whose operation was a load.
    pub loads: u64,
    /// Records whose operation was a store.
    pub stores: u64,
    /// Accesses that found their tag resident.
    pub hits: u64,
    /// Hits that were loads.
    pub load_hits: u64,
    /// Hits that were stores.
    pub store_hits: u64,
    /// Accesses that did not find their tag.
    pub misses: u64,
    /// Misses that were loads.
    pub load_misses: u64,
    /// Misses that were stores.
    pub store_misses: u64,
    /// Misses that overwrote a valid block.
    pub evictions: u64,
}

/// Section names for selective stats output.
///
/// Valid identifiers: `"summary"`, `"hits"`, `"misses"`. Pass an empty
/// slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "hits", "misses"];

impl Statistics {
    /// Applies one access outcome to the counters.
    ///
    /// Exactly one hit/miss branch fires; the eviction counter moves only
    /// on [`AccessOutcome::MissEvicted`].
    pub fn record(&mut self, op: Operation, outcome: AccessOutcome) {
        self.accesses += 1;
        match op {
            Operation::Load => self.loads += 1,
            Operation::Store => self.stores += 1,
        }
        match outcome {
            AccessOutcome::Hit => {
                self.hits += 1;
                match op {
                    Operation::Load => self.load_hits += 1,
                    Operation::Store => self.store_hits += 1,
                }
            }
            AccessOutcome::MissFilled | AccessOutcome::MissEvicted => {
                self.misses += 1;
                match op {
                    Operation::Load => self.load_misses += 1,
                    Operation::Store => self.store_misses += 1,
                }
                if outcome == AccessOutcome::MissEvicted {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of accesses that hit, as a percentage.
    ///
    /// Returns `0.0` before any access has been recorded.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            100.0 * self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed, as a percentage.
    ///
    /// Returns `0.0` before any access has been recorded.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            100.0 * self.misses as f64 / self.accesses as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"hits"`,
    /// or `"misses"`. Pass an empty slice to print all sections (same as
    /// `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        println!("\n==============================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==============================================");
        if want("summary") {
            println!("accesses               {}", self.accesses);
            println!("accesses.load          {}", self.loads);
            println!("accesses.store         {}", self.stores);
            println!("hit_rate               {:.2}%", self.hit_rate());
            println!("miss_rate              {:.2}%", self.miss_rate());
            println!("----------------------------------------------");
        }
        if want("hits") {
            println!("hits                   {}", self.hits);
            println!("hits.load              {}", self.load_hits);
            println!("hits.store             {}", self.store_hits);
            println!("----------------------------------------------");
        }
        if want("misses") {
            println!("misses                 {}", self.misses);
            println!("misses.load            {}", self.load_misses);
            println!("misses.store           {}", self.store_misses);
            println!("evictions              {}", self.evictions);
            println!("----------------------------------------------");
        }
        println!("==============================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
