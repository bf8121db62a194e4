//! # Script Engine
//!
//! A small deterministic execution engine over [`MemoryState`], interpreting
//! a fixed byte-level instruction encoding. Used by tests and dev networks;
//! production call payloads are ABI-encoded contract calls interpreted by
//! the real contract engine outside this workspace.
//!
//! ## Payload Encoding
//!
//! ```text
//! INIT     = 0x01 | address(20)              reverts unless the account holds code
//! CREDIT   = 0x02 | address(20) | amount(32) mints into the account
//! CHARGE   = 0x03 | address(20) | amount(32) burns from the account, reverts
//!                                            when the balance is insufficient
//! SET_CODE = 0x04 | address(20) | code(..)   installs contract code
//! ```
//!
//! Amounts are big-endian 256-bit integers.

use shared_types::{Address, U256};

use super::memory_state::MemoryState;
use crate::ports::{ExecutionEngine, ExecutionError};

const OP_INIT: u8 = 0x01;
const OP_CREDIT: u8 = 0x02;
const OP_CHARGE: u8 = 0x03;
const OP_SET_CODE: u8 = 0x04;

const ADDRESS_LEN: usize = 20;
const AMOUNT_LEN: usize = 32;

/// Deterministic byte-script interpreter bound to [`MemoryState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptEngine;

impl ScriptEngine {
    /// Encode an initialize call targeting a deployed contract.
    pub fn init(address: Address) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + ADDRESS_LEN);
        payload.push(OP_INIT);
        payload.extend_from_slice(&address);
        payload
    }

    /// Encode a mint of `amount` into the account.
    pub fn credit(address: Address, amount: U256) -> Vec<u8> {
        Self::with_amount(OP_CREDIT, address, amount)
    }

    /// Encode a burn of `amount` from the account.
    pub fn charge(address: Address, amount: U256) -> Vec<u8> {
        Self::with_amount(OP_CHARGE, address, amount)
    }

    /// Encode a code installation.
    pub fn set_code(address: Address, code: &[u8]) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + ADDRESS_LEN + code.len());
        payload.push(OP_SET_CODE);
        payload.extend_from_slice(&address);
        payload.extend_from_slice(code);
        payload
    }

    fn with_amount(opcode: u8, address: Address, amount: U256) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + ADDRESS_LEN + AMOUNT_LEN);
        payload.push(opcode);
        payload.extend_from_slice(&address);
        let mut amount_bytes = [0u8; AMOUNT_LEN];
        amount.to_big_endian(&mut amount_bytes);
        payload.extend_from_slice(&amount_bytes);
        payload
    }
}

fn decode_address(rest: &[u8]) -> Result<(Address, &[u8]), ExecutionError> {
    if rest.len() < ADDRESS_LEN {
        return Err(ExecutionError::Decode("truncated address".to_string()));
    }
    let (head, tail) = rest.split_at(ADDRESS_LEN);
    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(head);
    Ok((address, tail))
}

fn decode_amount(rest: &[u8]) -> Result<U256, ExecutionError> {
    if rest.len() != AMOUNT_LEN {
        return Err(ExecutionError::Decode("truncated amount".to_string()));
    }
    Ok(U256::from_big_endian(rest))
}

impl ExecutionEngine<MemoryState> for ScriptEngine {
    fn execute(&self, state: &mut MemoryState, payload: &[u8]) -> Result<(), ExecutionError> {
        let (&opcode, rest) = payload
            .split_first()
            .ok_or_else(|| ExecutionError::Decode("empty payload".to_string()))?;

        match opcode {
            OP_INIT => {
                let (address, rest) = decode_address(rest)?;
                if !rest.is_empty() {
                    return Err(ExecutionError::Decode("trailing bytes".to_string()));
                }
                if state.code_of(&address).is_none() {
                    return Err(ExecutionError::Reverted(format!(
                        "no contract at {}",
                        hex::encode(address)
                    )));
                }
                Ok(())
            }
            OP_CREDIT => {
                let (address, rest) = decode_address(rest)?;
                let amount = decode_amount(rest)?;
                let balance = state.balance_of(&address);
                let credited = balance.checked_add(amount).ok_or_else(|| {
                    ExecutionError::Reverted("balance overflow".to_string())
                })?;
                state.set_balance(address, credited);
                Ok(())
            }
            OP_CHARGE => {
                let (address, rest) = decode_address(rest)?;
                let amount = decode_amount(rest)?;
                let balance = state.balance_of(&address);
                if balance < amount {
                    return Err(ExecutionError::Reverted(format!(
                        "insufficient balance at {}",
                        hex::encode(address)
                    )));
                }
                state.set_balance(address, balance - amount);
                Ok(())
            }
            OP_SET_CODE => {
                let (address, code) = decode_address(rest)?;
                if code.is_empty() {
                    return Err(ExecutionError::Decode("empty code".to_string()));
                }
                state.set_code(address, code.to_vec());
                Ok(())
            }
            other => Err(ExecutionError::Decode(format!("unknown opcode {other:#04x}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StateView;

    const ADDR: Address = [0x42; 20];

    #[test]
    fn test_init_requires_deployed_code() {
        let engine = ScriptEngine;
        let mut state = MemoryState::default();

        let result = engine.execute(&mut state, &ScriptEngine::init(ADDR));
        assert!(matches!(result, Err(ExecutionError::Reverted(_))));

        state
            .set_account(ADDR, U256::zero(), Some(&[0x60, 0x00]))
            .unwrap();
        engine.execute(&mut state, &ScriptEngine::init(ADDR)).unwrap();
    }

    #[test]
    fn test_credit_then_charge() {
        let engine = ScriptEngine;
        let mut state = MemoryState::default();

        engine
            .execute(&mut state, &ScriptEngine::credit(ADDR, U256::from(100u64)))
            .unwrap();
        engine
            .execute(&mut state, &ScriptEngine::charge(ADDR, U256::from(40u64)))
            .unwrap();

        assert_eq!(state.balance_of(&ADDR), U256::from(60u64));
    }

    #[test]
    fn test_charge_beyond_balance_reverts() {
        let engine = ScriptEngine;
        let mut state = MemoryState::default();
        state.set_balance(ADDR, U256::from(10u64));

        let result = engine.execute(&mut state, &ScriptEngine::charge(ADDR, U256::from(11u64)));
        assert!(matches!(result, Err(ExecutionError::Reverted(_))));

        // Failed call left the balance untouched.
        assert_eq!(state.balance_of(&ADDR), U256::from(10u64));
    }

    #[test]
    fn test_unknown_opcode_is_decode_error() {
        let engine = ScriptEngine;
        let mut state = MemoryState::default();

        let result = engine.execute(&mut state, &[0xEE, 0x01, 0x02]);
        assert!(matches!(result, Err(ExecutionError::Decode(_))));
    }

    #[test]
    fn test_truncated_payload_is_decode_error() {
        let engine = ScriptEngine;
        let mut state = MemoryState::default();

        let mut payload = ScriptEngine::credit(ADDR, U256::one());
        payload.truncate(payload.len() - 1);

        let result = engine.execute(&mut state, &payload);
        assert!(matches!(result, Err(ExecutionError::Decode(_))));
    }

    #[test]
    fn test_set_code_installs_code() {
        let engine = ScriptEngine;
        let mut state = MemoryState::default();

        engine
            .execute(&mut state, &ScriptEngine::set_code(ADDR, &[0xDE, 0xAD]))
            .unwrap();

        assert_eq!(state.code_of(&ADDR), Some(&[0xDE, 0xAD][..]));
    }
}
