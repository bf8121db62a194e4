//! # Genesis Block
//!
//! The finalized header plus the fixed signature marker. Immutable once
//! produced; the block id is a pure function of the header fields and is the
//! canonical genesis hash all nodes must agree on.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use shared_types::{Address, Hash, StateRoot, ZERO_ADDRESS, ZERO_HASH};

/// Fixed, non-cryptographic signature marker denoting "this is the network's
/// genesis, not a mined block".
pub const GENESIS_SIGNATURE: [u8; 1] = [2];

/// Header of the genesis block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisHeader {
    /// Always the zero hash: genesis has no parent.
    parent_id: Hash,
    /// State trie root after replaying all staged operations.
    state_root: StateRoot,
    /// Block gas limit.
    gas_limit: u64,
    /// Unix timestamp fixed by configuration, never read from a clock.
    timestamp: u64,
    /// Signer placeholder. Always the zero address.
    signer: Address,
}

impl GenesisHeader {
    pub(crate) fn new(state_root: StateRoot, gas_limit: u64, timestamp: u64) -> Self {
        Self {
            parent_id: ZERO_HASH,
            state_root,
            gas_limit,
            timestamp,
            signer: ZERO_ADDRESS,
        }
    }

    pub fn parent_id(&self) -> Hash {
        self.parent_id
    }

    pub fn state_root(&self) -> StateRoot {
        self.state_root
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn signer(&self) -> Address {
        self.signer
    }

    /// Keccak256 over the header fields in declaration order, integers in
    /// big-endian form.
    pub fn id(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(self.parent_id);
        hasher.update(self.state_root);
        hasher.update(self.gas_limit.to_be_bytes());
        hasher.update(self.timestamp.to_be_bytes());
        hasher.update(self.signer);
        hasher.finalize().into()
    }
}

/// The finalized genesis block.
///
/// Created exactly once per `build` call and never mutated afterwards. The
/// id is computed at construction and cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBlock {
    header: GenesisHeader,
    signature: [u8; 1],
    id: Hash,
}

impl GenesisBlock {
    pub(crate) fn new(header: GenesisHeader) -> Self {
        let id = header.id();
        Self {
            header,
            signature: GENESIS_SIGNATURE,
            id,
        }
    }

    pub fn header(&self) -> &GenesisHeader {
        &self.header
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The canonical genesis hash.
    pub fn id(&self) -> Hash {
        self.id
    }
}
