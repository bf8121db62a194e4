//! # Genesis Errors
//!
//! All failures from `GenesisBuilder::build` surface as a single
//! [`GenesisError`]; there is no partial success, recovery, or retry. The
//! index of the failing operation is carried for log output only, not as a
//! recovery hook.

use thiserror::Error;

use crate::ports::{ExecutionError, StateError};

/// Errors that can occur while building the genesis block.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// A call was staged with an empty payload. Detected at build time,
    /// before any state is created.
    #[error("empty call payload staged at operation {index}")]
    EmptyPayload { index: usize },

    /// The state factory failed to produce a fresh state.
    #[error("state creation failed: {0}")]
    StateInit(StateError),

    /// A storage-layer failure while applying an allocation.
    #[error("state write failed at operation {index}: {source}")]
    StateWrite { index: usize, source: StateError },

    /// The execution engine rejected a call (revert, out-of-gas, decode
    /// error). The builder does not distinguish business-logic rejection
    /// from storage breakage; both abort the build.
    #[error("call failed at operation {index}: {source}")]
    Execution {
        index: usize,
        source: ExecutionError,
    },

    /// The final commit of the replayed state failed.
    #[error("state commit failed: {0}")]
    Commit(StateError),
}
