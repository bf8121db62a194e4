//! # State Ports
//!
//! Abstractions over the trie/state storage engine. The builder only needs
//! account materialization and commit-to-root; everything else the storage
//! engine does stays behind these traits.

use shared_types::{Address, StateRoot, U256};
use thiserror::Error;

/// Errors reported by the state storage layer.
#[derive(Debug, Error)]
pub enum StateError {
    /// The storage backend rejected an account address.
    #[error("malformed account address: {0}")]
    MalformedAddress(String),

    /// Underlying storage I/O failure.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Mutable, committable representation of ledger state during construction.
///
/// `commit` must depend only on the logical content written, not on the
/// write order of independent accounts; the builder guarantees only that its
/// own replay order is deterministic.
pub trait StateView {
    /// Set the target account's balance and code atomically. `None` code
    /// materializes a plain value-holding account.
    fn set_account(
        &mut self,
        address: Address,
        balance: U256,
        code: Option<&[u8]>,
    ) -> Result<(), StateError>;

    /// Finalize all mutations and return the state root.
    fn commit(&mut self) -> Result<StateRoot, StateError>;
}

/// Produces fresh, empty states with no pre-existing accounts.
pub trait StateFactory {
    type State: StateView;

    fn new_state(&self) -> Result<Self::State, StateError>;
}
