//! Common types used throughout the cache simulator.
//!
//! This module provides the building blocks shared across components:
//! 1. **Address Types:** Strong types for trace addresses, tags, and decoded fields.
//! 2. **Error Handling:** The configuration and trace error taxonomy.

/// Address, tag, and decoded-access types plus field extraction.
pub mod addr;

/// Error types for configuration and trace input.
pub mod error;

pub use addr::{Address, DecodedAccess, Tag};
pub use error::{ConfigError, SimError, TraceError};
