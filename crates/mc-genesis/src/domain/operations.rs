//! # Staged Genesis Operations
//!
//! The atomic units accumulated by [`GenesisBuilder`](super::GenesisBuilder).
//!
//! Operations are stored and replayed in insertion order, never reordered and
//! never deduplicated. Ordering is semantically load-bearing: a call that
//! spends balance created by an earlier allocation is only valid if that
//! allocation was staged first. The builder does not verify dependency order;
//! a misordered sequence fails during replay when the execution engine
//! rejects the call.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// A single staged genesis operation.
///
/// The two variants are applied through different mechanisms: `Alloc` is a
/// direct state write, `Call` is delegated to the execution engine bound to
/// the in-progress state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Materialize an account with exactly this balance and this code
    /// (or no code for a plain value-holding account).
    Alloc {
        address: Address,
        balance: U256,
        code: Option<Vec<u8>>,
    },
    /// Execute an opaque, pre-encoded contract call against the in-progress
    /// state. The builder never interprets the payload contents.
    Call { payload: Vec<u8> },
}

impl Operation {
    /// Short tag for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Alloc { .. } => "alloc",
            Operation::Call { .. } => "call",
        }
    }
}
