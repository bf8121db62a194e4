//! End-to-end genesis construction tests over the in-memory state and the
//! script engine.

use mc_genesis::{
    dev, GenesisBuilder, GenesisError, MemoryState, MemoryStateFactory, ScriptEngine, StateView,
};
use shared_types::{Address, U256, EMPTY_TRIE_ROOT};

const ADDR_X: Address = [0x0A; 20];
const ADDR_Y: Address = [0x0B; 20];
const CODE_C: [u8; 4] = [0x60, 0x01, 0x60, 0x02];

fn grant() -> U256 {
    U256::from(10_000u64) * U256::exp10(18)
}

// ========== Determinism ==========

#[test]
fn test_two_builds_produce_identical_blocks() {
    let stage = || {
        GenesisBuilder::new()
            .gas_limit(30_000_000)
            .timestamp(1_516_333_644)
            .alloc(ADDR_X, U256::zero(), Some(CODE_C.to_vec()))
            .alloc(ADDR_Y, grant(), None)
            .call(ScriptEngine::init(ADDR_X))
            .call(ScriptEngine::charge(ADDR_Y, U256::exp10(18)))
    };

    let first = stage()
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();
    let second = stage()
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(first.header().state_root(), second.header().state_root());
    assert_eq!(first, second);
}

#[test]
fn test_dev_plan_builds_deterministically() {
    let first = dev::plan()
        .into_builder()
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();
    let second = dev::plan()
        .into_builder()
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();

    assert_eq!(first.id(), second.id());
    assert_eq!(first.header().gas_limit(), dev::DEV_GAS_LIMIT);
    assert_eq!(first.header().timestamp(), dev::DEV_TIMESTAMP);
}

// ========== Order sensitivity ==========

#[test]
fn test_call_depending_on_later_alloc_fails() {
    let misordered = GenesisBuilder::new()
        .call(ScriptEngine::init(ADDR_X))
        .alloc(ADDR_X, U256::zero(), Some(CODE_C.to_vec()))
        .build(&MemoryStateFactory, &ScriptEngine);

    assert!(matches!(
        misordered,
        Err(GenesisError::Execution { index: 0, .. })
    ));

    let ordered = GenesisBuilder::new()
        .alloc(ADDR_X, U256::zero(), Some(CODE_C.to_vec()))
        .call(ScriptEngine::init(ADDR_X))
        .build(&MemoryStateFactory, &ScriptEngine);

    assert!(ordered.is_ok());
}

// ========== Atomicity ==========

#[test]
fn test_failed_build_leaks_nothing_into_next_build() {
    let failing = GenesisBuilder::new()
        .alloc(ADDR_Y, U256::from(5u64), None)
        .call(ScriptEngine::charge(ADDR_Y, U256::from(6u64)))
        .build(&MemoryStateFactory, &ScriptEngine);
    assert!(failing.is_err());

    // A clean build afterwards matches a clean build that never saw the
    // failed attempt.
    let after = GenesisBuilder::new()
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();
    assert_eq!(after.header().state_root(), EMPTY_TRIE_ROOT);
}

// ========== End-to-end scenario A ==========

#[test]
fn test_contract_deploy_and_initialize() {
    let block = GenesisBuilder::new()
        .gas_limit(30_000_000)
        .timestamp(1_516_333_644)
        .alloc(ADDR_X, U256::zero(), Some(CODE_C.to_vec()))
        .call(ScriptEngine::init(ADDR_X))
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();

    assert_eq!(block.header().timestamp(), 1_516_333_644);
    assert_eq!(block.header().gas_limit(), 30_000_000);

    // The committed root matches a state holding exactly that one account.
    let mut expected = MemoryState::default();
    expected
        .set_account(ADDR_X, U256::zero(), Some(&CODE_C))
        .unwrap();
    assert_eq!(block.header().state_root(), expected.commit().unwrap());
}

// ========== End-to-end scenario B ==========

#[test]
fn test_overdraft_charge_aborts_build() {
    let result = GenesisBuilder::new()
        .alloc(ADDR_Y, grant(), None)
        .call(ScriptEngine::charge(ADDR_Y, grant() + U256::one()))
        .build(&MemoryStateFactory, &ScriptEngine);

    assert!(matches!(
        result,
        Err(GenesisError::Execution { index: 1, .. })
    ));
}

// ========== Empty builder ==========

#[test]
fn test_empty_builder_commits_empty_root() {
    let block = GenesisBuilder::new()
        .build(&MemoryStateFactory, &ScriptEngine)
        .unwrap();

    assert_eq!(block.header().state_root(), EMPTY_TRIE_ROOT);
    assert_eq!(block.signature(), &[2]);
}

// ========== Configuration errors ==========

#[test]
fn test_empty_payload_rejected_before_replay() {
    let result = GenesisBuilder::new()
        .alloc(ADDR_X, U256::zero(), None)
        .call(Vec::new())
        .build(&MemoryStateFactory, &ScriptEngine);

    assert!(matches!(result, Err(GenesisError::EmptyPayload { index: 1 })));
}
