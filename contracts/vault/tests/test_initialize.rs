mod common;

use soroban_sdk::{
    testutils::{storage::Persistent as _, Address as _, Ledger},
    Address, Env, String,
};
use beluga_vault::{BelugaVault, BelugaVaultClient, DataKey, TickRange, VaultError, VaultParams};
use common::*;

#[test]
fn test_creation_scenario_ranges() {
    let env = Env::default();
    let setup = setup_vault(&env);

    let state = setup.vault.get_state();
    assert_eq!(state.base, TickRange::new(43620, 48480));
    // Empty vault: bid and ask tie, ask wins
    assert_eq!(state.limit, TickRange::new(46080, 47280));
    assert_eq!(state.last_tick, START_TICK);
    assert_eq!(state.last_timestamp, START_TIME);

    assert_eq!(setup.vault.get_total_amounts(), (0, 0));
    assert_eq!(setup.vault.total_supply(), 0);
}

#[test]
fn test_initialize_copies_config() {
    let env = Env::default();
    let setup = setup_vault(&env);

    let config = setup.vault.get_config();
    assert_eq!(config.factory, setup.factory.address);
    assert_eq!(config.pool, setup.pool.address);
    assert_eq!(config.token0, setup.token0);
    assert_eq!(config.token1, setup.token1);
    assert_eq!(config.tick_spacing, TICK_SPACING);

    let strategy = setup.vault.get_strategy();
    assert_eq!(strategy.base_threshold, 2400);
    assert_eq!(strategy.limit_threshold, 1200);
    assert_eq!(strategy.full_range_weight, 500_000);
    assert_eq!(strategy.twap_duration, 600);
    assert_eq!(strategy.max_twap_deviation, 200_000);

    let fees = setup.vault.get_fees();
    assert_eq!(fees.protocol_fee, PROTOCOL_FEE);
    assert_eq!(fees.manager_fee, 0);
    assert_eq!(fees.pending_manager_fee, 0);

    let roles = setup.vault.get_roles();
    assert_eq!(roles.manager, setup.manager);
    assert_eq!(roles.pending_manager, None);
    assert_eq!(roles.rebalance_delegate, None);
}

#[test]
fn test_share_metadata() {
    let env = Env::default();
    let setup = setup_vault(&env);

    assert_eq!(setup.vault.name(), String::from_str(&env, "Beluga Vault Share"));
    assert_eq!(setup.vault.symbol(), String::from_str(&env, "BVS"));
    assert_eq!(setup.vault.decimals(), 7);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_cannot_initialize_twice() {
    let env = Env::default();
    let setup = setup_vault(&env);

    let params = default_params(&env, &setup.pool.address, &setup.manager);
    setup.vault.initialize(&setup.factory.address, &params, &PROTOCOL_FEE);
}

#[test]
fn test_initialize_rejects_invalid_params() {
    let env = Env::default();
    let (pool, factory, _, _) = setup_parts(&env);
    let manager = Address::generate(&env);

    let cases: [(fn(&mut VaultParams), VaultError); 8] = [
        (|p| p.base_threshold = 1001, VaultError::InvalidThreshold),
        (|p| p.base_threshold = 0, VaultError::InvalidThreshold),
        (|p| p.limit_threshold = 887280, VaultError::InvalidThreshold),
        (|p| p.full_range_weight = 1_000_001, VaultError::InvalidFullRangeWeight),
        (|p| p.min_tick_move = -1, VaultError::InvalidMinTickMove),
        (|p| p.max_twap_deviation = -1, VaultError::InvalidMaxTwapDeviation),
        (|p| p.twap_duration = 0, VaultError::InvalidTwapDuration),
        (|p| p.max_total_supply = -1, VaultError::InvalidMaxTotalSupply),
    ];

    for (mutate, expected) in cases {
        let vault = BelugaVaultClient::new(&env, &env.register(BelugaVault, ()));
        let mut params = default_params(&env, &pool.address, &manager);
        mutate(&mut params);

        let result = vault.try_initialize(&factory.address, &params, &PROTOCOL_FEE);
        assert_eq!(result, Err(Ok(expected)));
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_uninitialized_vault_has_no_totals() {
    let env = Env::default();
    let vault = BelugaVaultClient::new(&env, &env.register(BelugaVault, ()));
    vault.get_total_amounts();
}

#[test]
fn test_reads_keep_state_alive() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let vault = setup.vault.address.clone();
    let ttl = |key: &DataKey| env.as_contract(&vault, || env.storage().persistent().get_ttl(key));

    let fresh = ttl(&DataKey::Config);
    let start = env.ledger().sequence();
    env.ledger().set_sequence_number(start + 100_000);
    assert_eq!(ttl(&DataKey::Config), fresh - 100_000);
    assert_eq!(ttl(&DataKey::Roles), fresh - 100_000);

    setup.vault.get_config();
    setup.vault.get_roles();

    assert_eq!(ttl(&DataKey::Config), fresh);
    assert_eq!(ttl(&DataKey::Roles), fresh);
}
