//! # Core Chain Primitives
//!
//! Fixed-width identifiers and balance numerics used by every subsystem.

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// A 32-byte Keccak256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style account address.
pub type Address = [u8; 20];

/// Root hash of the state trie at a point in time.
pub type StateRoot = Hash;

/// The all-zero hash. Used as the parent id of the genesis block.
pub const ZERO_HASH: Hash = [0u8; 32];

/// The all-zero address. Used as the genesis signer placeholder.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Empty code hash for accounts that hold no contract code.
pub const EMPTY_CODE_HASH: Hash = [0u8; 32];

/// Keccak256 hash of an empty RLP-encoded trie.
/// This is the canonical empty trie root per Ethereum specification.
/// Value: keccak256(RLP("")) = 0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421
pub const EMPTY_TRIE_ROOT: Hash = [
    0x56, 0xe8, 0x1f, 0x17, 0x1b, 0xcc, 0x55, 0xa6, 0xff, 0x83, 0x45, 0xe6, 0x92, 0xc0, 0xf8, 0x6e,
    0x5b, 0x48, 0xe0, 0x1b, 0x99, 0x6c, 0xad, 0xc0, 0x01, 0x62, 0x2f, 0xb5, 0xe3, 0x63, 0xb4, 0x21,
];
