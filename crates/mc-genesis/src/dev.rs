//! # Developer Network Preset
//!
//! Ten well-known accounts and canonical block parameters for local
//! development networks. Secret keys are published on purpose; never fund
//! these accounts on a real network.

use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};
use shared_types::{Address, U256};

use crate::bootstrap::{AccountGrant, BootstrapPlan};

/// Block gas limit of the dev network genesis.
pub const DEV_GAS_LIMIT: u64 = 30_000_000;

/// Fixed dev network genesis timestamp (Unix seconds).
pub const DEV_TIMESTAMP: u64 = 1_516_333_644;

/// Well-known dev secret keys (secp256k1 scalars, hex).
const DEV_SECRET_KEYS: [&str; 10] = [
    "dce1443bd2ef0c2631adc1c67e5c93f13dc23a41c18b536effbbdcbcdb96fb65",
    "321d6443bc6177273b5abf54210fe806d451d6b7973bccc2384ef78bbcd0bf51",
    "2d7c882bad2a01105e36dda3646693bc1aaaa45b0ed63fb0ce23c060294f3af2",
    "593537225b037191d322c3b1df585fb1e5100811b71a6f7fc7e29cca1333483e",
    "ca7b25fc980c759df5f3ce17a3d881d6e19a38e651fc4315fc08917edab41058",
    "88d2d80b12b92feaa0da6d62309463d20408157723f2d7e799b6a74ead9a673b",
    "fbb9e7ba5fe9969a71c6599052237b91adeb1e5fc0c96727b66e56ff5d02f9d0",
    "547fb081e73dc2e22b4aae5c60e2970b008ac4fc3073aebc27d41ace9c4f53e9",
    "c8c53657e41a8d669349fc287f57457bd746cb1fcfc38cf94d235deb2cfca81b",
    "87e0eba9c86c494d98353800571089f316740b0cb84c9a7cdf2fe5c9997c7966",
];

/// A dev account with its signing key.
#[derive(Debug, Clone)]
pub struct DevAccount {
    pub address: Address,
    pub secret: SigningKey,
}

/// The ten dev accounts, derived deterministically from the fixed keys.
pub fn accounts() -> Vec<DevAccount> {
    DEV_SECRET_KEYS
        .iter()
        .map(|key_hex| {
            // Constant input; a failure here is a corrupted source tree.
            let key_bytes = hex::decode(key_hex).expect("well-known dev key is valid hex");
            let secret =
                SigningKey::from_slice(&key_bytes).expect("well-known dev key is a valid scalar");
            let address = derive_address(&secret);
            DevAccount { address, secret }
        })
        .collect()
}

/// Balance granted to each dev account: 10000 whole tokens at 18 decimals.
pub fn grant_amount() -> U256 {
    U256::from(10_000u64) * U256::exp10(18)
}

/// Canonical dev bootstrap plan: every dev account funded, no bootstrap
/// contracts. Callers add contract grants and call payloads on top.
pub fn plan() -> BootstrapPlan {
    BootstrapPlan {
        gas_limit: DEV_GAS_LIMIT,
        timestamp: DEV_TIMESTAMP,
        contracts: Vec::new(),
        init_calls: Vec::new(),
        accounts: accounts()
            .into_iter()
            .map(|account| AccountGrant {
                address: account.address,
                balance: grant_amount(),
                calls: Vec::new(),
            })
            .collect(),
    }
}

/// Ethereum-style address: Keccak256 of the uncompressed public key
/// (without the 0x04 prefix), last 20 bytes.
fn derive_address(secret: &SigningKey) -> Address {
    let public = secret.verifying_key().to_encoded_point(false);
    let hash = Keccak256::digest(&public.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..32]);
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_accounts() {
        assert_eq!(accounts().len(), 10);
    }

    #[test]
    fn test_accounts_are_deterministic() {
        let first: Vec<Address> = accounts().iter().map(|a| a.address).collect();
        let second: Vec<Address> = accounts().iter().map(|a| a.address).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_addresses_are_distinct() {
        let mut addresses: Vec<Address> = accounts().iter().map(|a| a.address).collect();
        addresses.sort();
        addresses.dedup();
        assert_eq!(addresses.len(), 10);
    }

    #[test]
    fn test_grant_amount() {
        let expected = U256::from_dec_str("10000000000000000000000").unwrap();
        assert_eq!(grant_amount(), expected);
    }

    #[test]
    fn test_plan_funds_every_account() {
        let plan = plan();

        assert_eq!(plan.gas_limit, DEV_GAS_LIMIT);
        assert_eq!(plan.timestamp, DEV_TIMESTAMP);
        assert_eq!(plan.accounts.len(), 10);
        assert!(plan.accounts.iter().all(|a| a.balance == grant_amount()));
        assert!(plan.contracts.is_empty());
    }
}
