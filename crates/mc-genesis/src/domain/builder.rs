//! # Genesis Block Builder
//!
//! Accumulates an ordered sequence of operations plus block-level parameters
//! and, on `build`, replays the sequence against a fresh state view.
//!
//! ## Determinism
//!
//! Given the same staged sequence, the same parameters, and conforming
//! state/engine implementations, `build` yields byte-identical blocks across
//! independent invocations and independent nodes. The build path reads no
//! clock, no randomness, and no environment.
//!
//! ## Validation Policy
//!
//! Lazy. The staging methods are pure in-memory accumulation and cannot
//! fail: addresses are fixed-width and balances unsigned by type. The one
//! remaining configuration check, an empty call payload, happens at the top
//! of `build` before any state is created.

use tracing::{debug, info};

use shared_types::{Address, U256};

use super::{GenesisBlock, GenesisError, GenesisHeader, Operation};
use crate::ports::{ExecutionEngine, StateFactory, StateView};

/// Fluent accumulator for genesis construction.
///
/// Owned exclusively by the configuring caller until `build` consumes it;
/// there is no internal locking, and a builder must not be shared across
/// threads during staging.
#[derive(Debug, Clone, Default)]
pub struct GenesisBuilder {
    gas_limit: u64,
    timestamp: u64,
    operations: Vec<Operation>,
}

impl GenesisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block gas limit. Later calls overwrite earlier ones.
    pub fn gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Set the block timestamp (Unix seconds). Later calls overwrite
    /// earlier ones. No constraint is enforced at this layer; header
    /// validation belongs to the consumer.
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Stage an account allocation: the account will exist in genesis state
    /// with exactly this balance and this code (or no code).
    pub fn alloc(mut self, address: Address, balance: U256, code: Option<Vec<u8>>) -> Self {
        self.operations.push(Operation::Alloc {
            address,
            balance,
            code,
        });
        self
    }

    /// Stage a pre-encoded contract call to be executed during replay.
    pub fn call(mut self, payload: Vec<u8>) -> Self {
        self.operations.push(Operation::Call { payload });
        self
    }

    /// The staged operations, in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Replay the staged sequence against a fresh state and assemble the
    /// genesis block.
    ///
    /// Consumes the builder: a finalized sequence cannot be reused or
    /// extended. Any failure aborts the whole build; the transient state
    /// view is dropped and no block is produced.
    pub fn build<F, E>(self, factory: &F, engine: &E) -> Result<GenesisBlock, GenesisError>
    where
        F: StateFactory,
        E: ExecutionEngine<F::State>,
    {
        for (index, operation) in self.operations.iter().enumerate() {
            if let Operation::Call { payload } = operation {
                if payload.is_empty() {
                    return Err(GenesisError::EmptyPayload { index });
                }
            }
        }

        let mut state = factory.new_state().map_err(GenesisError::StateInit)?;

        for (index, operation) in self.operations.iter().enumerate() {
            match operation {
                Operation::Alloc {
                    address,
                    balance,
                    code,
                } => {
                    debug!(
                        index,
                        address = %hex::encode(address),
                        has_code = code.is_some(),
                        "staging allocation"
                    );
                    state
                        .set_account(*address, *balance, code.as_deref())
                        .map_err(|source| GenesisError::StateWrite { index, source })?;
                }
                Operation::Call { payload } => {
                    debug!(index, payload_len = payload.len(), "executing call");
                    engine
                        .execute(&mut state, payload)
                        .map_err(|source| GenesisError::Execution { index, source })?;
                }
            }
        }

        let state_root = state.commit().map_err(GenesisError::Commit)?;
        let header = GenesisHeader::new(state_root, self.gas_limit, self.timestamp);
        let block = GenesisBlock::new(header);

        info!(
            id = %hex::encode(block.id()),
            state_root = %hex::encode(state_root),
            operations = self.operations.len(),
            "genesis block built"
        );

        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_parameter_wins() {
        let builder = GenesisBuilder::new()
            .gas_limit(1)
            .gas_limit(2)
            .timestamp(10)
            .timestamp(20);

        // Parameters are plain fields; peek through a staged clone.
        let built = builder.clone().gas_limit(3);
        assert_eq!(built.gas_limit, 3);
        assert_eq!(builder.gas_limit, 2);
        assert_eq!(builder.timestamp, 20);
    }

    #[test]
    fn test_operations_accumulate_in_order() {
        let builder = GenesisBuilder::new()
            .alloc([0x01; 20], U256::zero(), None)
            .call(vec![0xFF])
            .alloc([0x02; 20], U256::one(), Some(vec![0x60]));

        let kinds: Vec<_> = builder.operations().iter().map(Operation::kind).collect();
        assert_eq!(kinds, vec!["alloc", "call", "alloc"]);
    }

    #[test]
    fn test_duplicate_operations_are_kept() {
        let builder = GenesisBuilder::new()
            .call(vec![0x01])
            .call(vec![0x01]);

        assert_eq!(builder.operations().len(), 2);
    }
}
