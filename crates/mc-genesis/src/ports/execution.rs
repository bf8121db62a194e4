//! # Execution Port
//!
//! Abstraction over the contract execution engine that interprets staged
//! call payloads against the in-progress state.

use thiserror::Error;

use super::state::StateView;

/// Errors reported by the execution engine.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The call executed and reverted.
    #[error("call reverted: {0}")]
    Reverted(String),

    /// The call exhausted its gas allowance.
    #[error("out of gas")]
    OutOfGas,

    /// The payload could not be decoded.
    #[error("malformed call payload: {0}")]
    Decode(String),
}

/// Executes an opaque call payload against the current state.
///
/// Must be deterministic: the same state content and the same payload always
/// produce the same mutations and the same outcome. A successful execution
/// may emit events, but genesis event emission is not observable through
/// this port.
pub trait ExecutionEngine<S: StateView> {
    fn execute(&self, state: &mut S, payload: &[u8]) -> Result<(), ExecutionError>;
}
