//! # Log Rows
//!
//! Denormalized rows stored by the log index. Each row carries its block and
//! transaction context so queries never have to join against block storage.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, U256};

use super::value_objects::MAX_TOPICS;

/// Block context denormalized into every stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    pub id: Hash,
    pub number: u32,
    pub timestamp: u64,
}

/// Transaction context denormalized into every stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    pub id: Hash,
    /// The account that signed the transaction.
    pub origin: Address,
}

/// A contract event as stored in the log index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub block_id: Hash,
    /// Position of this event within its block.
    pub index: u32,
    pub block_number: u32,
    pub block_time: u64,
    pub tx_id: Hash,
    pub tx_origin: Address,
    /// Always a contract address.
    pub address: Address,
    /// Indexed topics, at most [`MAX_TOPICS`].
    pub topics: [Option<Hash>; MAX_TOPICS],
    pub data: Vec<u8>,
}

impl Event {
    /// Build a stored row from an emitted event. Topics beyond
    /// [`MAX_TOPICS`] are dropped.
    pub fn new(
        block: BlockContext,
        index: u32,
        tx: TxContext,
        address: Address,
        topics: &[Hash],
        data: Vec<u8>,
    ) -> Self {
        let mut stored = [None; MAX_TOPICS];
        for (slot, topic) in stored.iter_mut().zip(topics) {
            *slot = Some(*topic);
        }
        Self {
            block_id: block.id,
            index,
            block_number: block.number,
            block_time: block.timestamp,
            tx_id: tx.id,
            tx_origin: tx.origin,
            address,
            topics: stored,
            data,
        }
    }
}

/// A token transfer as stored in the log index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub block_id: Hash,
    /// Position of this transfer within its block.
    pub index: u32,
    pub block_number: u32,
    pub block_time: u64,
    pub tx_id: Hash,
    pub tx_origin: Address,
    pub from: Address,
    pub to: Address,
    pub amount: U256,
}

impl Transfer {
    pub fn new(
        block: BlockContext,
        index: u32,
        tx: TxContext,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Self {
        Self {
            block_id: block.id,
            index,
            block_number: block.number,
            block_time: block.timestamp,
            tx_id: tx.id,
            tx_origin: tx.origin,
            from,
            to,
            amount,
        }
    }
}
