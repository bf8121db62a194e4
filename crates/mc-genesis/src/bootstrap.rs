//! # Bootstrap Configuration
//!
//! Declarative description of the network's initial state, supplied by the
//! node-bootstrap layer. Contract addresses, runtime code, and call payloads
//! are explicit configuration here, not compiled-in globals, so the builder
//! core stays free of hidden state and independently testable.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

use crate::domain::GenesisBuilder;

/// A bootstrap contract account: runtime code deployed directly into
/// genesis state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractGrant {
    pub address: Address,
    pub balance: U256,
    pub code: Vec<u8>,
}

/// A funded account, optionally followed by pre-encoded calls that run
/// right after the grant (registration, token charges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGrant {
    pub address: Address,
    pub balance: U256,
    pub calls: Vec<Vec<u8>>,
}

/// Complete genesis description: block parameters plus the ordered initial
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapPlan {
    pub gas_limit: u64,
    pub timestamp: u64,
    /// Bootstrap contracts, staged first.
    pub contracts: Vec<ContractGrant>,
    /// Initialization calls for the bootstrap contracts, staged after all
    /// contract grants.
    pub init_calls: Vec<Vec<u8>>,
    /// Funded accounts, each staged as a grant followed by its calls.
    pub accounts: Vec<AccountGrant>,
}

impl BootstrapPlan {
    /// Stage the plan into a builder: contracts, then init calls, then
    /// account grants interleaved with their follow-up calls. The staging
    /// order is part of the network agreement; callers that need a
    /// different order stage a [`GenesisBuilder`] directly.
    pub fn into_builder(self) -> GenesisBuilder {
        let mut builder = GenesisBuilder::new()
            .gas_limit(self.gas_limit)
            .timestamp(self.timestamp);

        for contract in self.contracts {
            builder = builder.alloc(contract.address, contract.balance, Some(contract.code));
        }
        for payload in self.init_calls {
            builder = builder.call(payload);
        }
        for account in self.accounts {
            builder = builder.alloc(account.address, account.balance, None);
            for payload in account.calls {
                builder = builder.call(payload);
            }
        }

        builder
    }
}
