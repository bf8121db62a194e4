//! # Query Value Objects
//!
//! Filter, range, and pagination shapes accepted by the log query surface.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};

/// Maximum number of indexed topics per event.
pub const MAX_TOPICS: usize = 5;

/// Unit a [`Range`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeUnit {
    Block,
    Time,
}

/// Inclusive query range over block numbers or timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub unit: RangeUnit,
    pub from: u64,
    pub to: u64,
}

/// Result ordering. Ascending when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// Offset/limit pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    pub offset: u64,
    pub limit: u64,
}

/// Filter over stored events. A topic set matches when every `Some` slot
/// equals the event's topic at that position; multiple sets are OR-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Restrict to one contract address.
    pub address: Option<Address>,
    pub topic_sets: Vec<[Option<Hash>; MAX_TOPICS]>,
    pub range: Option<Range>,
    pub options: Option<QueryOptions>,
    pub order: Order,
}

/// Participant constraints for a transfer query; `None` fields match any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSet {
    /// Who signed the transaction.
    pub tx_origin: Option<Address>,
    /// Who sent tokens.
    pub from: Option<Address>,
    /// Who received tokens.
    pub to: Option<Address>,
}

/// Filter over stored transfers; address sets are OR-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFilter {
    pub tx_id: Option<Hash>,
    pub address_sets: Vec<AddressSet>,
    pub range: Option<Range>,
    pub options: Option<QueryOptions>,
    pub order: Order,
}
