//! Trace input and the simulation driver.
//!
//! Provides the traffic-file reader that materializes access records and
//! the simulator that replays them against the cache.

/// Trace replay driver.
pub mod simulator;

/// Access records and traffic-file parsing.
pub mod trace;
