//! # In-Memory State
//!
//! Deterministic in-memory implementation of the state ports for tests and
//! dev networks. Production nodes bind the builder to the real trie engine.
//!
//! The commitment sorts accounts by address before hashing, so the root
//! depends only on the logical content written, not on the write order of
//! independent accounts.

use std::collections::HashMap;

use sha3::{Digest, Keccak256};
use shared_types::{Address, StateRoot, U256, EMPTY_CODE_HASH, EMPTY_TRIE_ROOT};

use crate::ports::{StateError, StateFactory, StateView};

/// Produces fresh [`MemoryState`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStateFactory;

impl StateFactory for MemoryStateFactory {
    type State = MemoryState;

    fn new_state(&self) -> Result<MemoryState, StateError> {
        Ok(MemoryState::default())
    }
}

#[derive(Debug, Clone, Default)]
struct MemoryAccount {
    balance: U256,
    code: Option<Vec<u8>>,
}

/// In-memory account state with a Keccak256 commitment over sorted accounts.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    accounts: HashMap<Address, MemoryAccount>,
}

impl MemoryState {
    /// Balance of the account, zero if absent.
    pub fn balance_of(&self, address: &Address) -> U256 {
        self.accounts
            .get(address)
            .map(|a| a.balance)
            .unwrap_or_default()
    }

    /// Contract code of the account, if any.
    pub fn code_of(&self, address: &Address) -> Option<&[u8]> {
        self.accounts.get(address).and_then(|a| a.code.as_deref())
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.accounts.contains_key(address)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Overwrite the account balance, creating the account if needed.
    pub fn set_balance(&mut self, address: Address, balance: U256) {
        self.accounts.entry(address).or_default().balance = balance;
    }

    /// Install contract code, creating the account if needed.
    pub fn set_code(&mut self, address: Address, code: Vec<u8>) {
        self.accounts.entry(address).or_default().code = Some(code);
    }
}

impl StateView for MemoryState {
    fn set_account(
        &mut self,
        address: Address,
        balance: U256,
        code: Option<&[u8]>,
    ) -> Result<(), StateError> {
        self.accounts.insert(
            address,
            MemoryAccount {
                balance,
                code: code.map(<[u8]>::to_vec),
            },
        );
        Ok(())
    }

    fn commit(&mut self) -> Result<StateRoot, StateError> {
        if self.accounts.is_empty() {
            return Ok(EMPTY_TRIE_ROOT);
        }

        // Sort addresses for deterministic ordering
        let mut sorted: Vec<_> = self.accounts.iter().collect();
        sorted.sort_by_key(|(address, _)| *address);

        let mut hasher = Keccak256::new();
        for (address, account) in sorted {
            hasher.update(address);
            let mut balance_bytes = [0u8; 32];
            account.balance.to_big_endian(&mut balance_bytes);
            hasher.update(balance_bytes);
            match &account.code {
                Some(code) => hasher.update(Keccak256::digest(code)),
                None => hasher.update(EMPTY_CODE_HASH),
            }
        }

        Ok(hasher.finalize().into())
    }
}
