//! Access records and traffic-file parsing.
//!
//! A traffic file carries whitespace-separated pairs, one access each: a
//! hexadecimal address (optionally `0x`/`0X`-prefixed) followed by an
//! operation flag, `0` for a load and `1` for a store. Pairs usually sit
//! one per line but any whitespace split is accepted; blank lines are
//! skipped. Parsing fails fast: the first malformed token aborts with its
//! line number and no records are produced.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::addr::Address;
use crate::common::error::TraceError;

/// Memory operation kind carried by a trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// A read of the addressed block.
    Load,
    /// A write to the addressed block.
    Store,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Store => f.write_str("store"),
        }
    }
}

/// One trace record: an address and the operation performed at it.
///
/// Immutable once parsed; consumed by one simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    /// The accessed address.
    pub addr: Address,
    /// Whether the access was a load or a store.
    pub op: Operation,
}

/// Parses a whole trace from a reader.
///
/// # Errors
///
/// Returns the first [`TraceError`] encountered; no partial record list
/// is produced.
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<AccessRecord>, TraceError> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        let mut fields = line.split_whitespace();
        loop {
            let Some(addr_tok) = fields.next() else { break };
            let Some(op_tok) = fields.next() else {
                return Err(TraceError::MissingField { line: lineno });
            };
            records.push(AccessRecord {
                addr: parse_address(addr_tok, lineno)?,
                op: parse_operation(op_tok, lineno)?,
            });
        }
    }
    tracing::debug!(records = records.len(), "trace parsed");
    Ok(records)
}

/// Reads and parses a traffic file from disk.
///
/// # Errors
///
/// Returns [`TraceError::Io`] when the file cannot be opened or read, or
/// the first parse error in its contents.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Vec<AccessRecord>, TraceError> {
    let file = File::open(path)?;
    parse_trace(BufReader::new(file))
}

fn parse_address(token: &str, line: usize) -> Result<Address, TraceError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16)
        .map(Address::new)
        .map_err(|source| TraceError::BadAddress {
            line,
            token: token.to_string(),
            source,
        })
}

fn parse_operation(token: &str, line: usize) -> Result<Operation, TraceError> {
    match token {
        "0" => Ok(Operation::Load),
        "1" => Ok(Operation::Store),
        _ => Err(TraceError::BadOperation {
            line,
            token: token.to_string(),
        }),
    }
}
