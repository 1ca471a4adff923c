mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};
use beluga_vault::VaultError;
use common::*;

#[test]
fn test_two_step_manager_transfer() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let candidate = Address::generate(&env);

    setup.vault.set_manager(&setup.manager, &candidate);
    let roles = setup.vault.get_roles();
    assert_eq!(roles.manager, setup.manager);
    assert_eq!(roles.pending_manager, Some(candidate.clone()));

    setup.vault.accept_manager(&candidate);
    let roles = setup.vault.get_roles();
    assert_eq!(roles.manager, candidate);
    assert_eq!(roles.pending_manager, None);

    // Old manager has lost control
    let result = setup.vault.try_set_period(&setup.manager, &60);
    assert_eq!(result, Err(Ok(VaultError::Unauthorized)));
    setup.vault.set_period(&candidate, &60);
}

#[test]
fn test_accept_manager_requires_pending() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let candidate = Address::generate(&env);
    let stranger = Address::generate(&env);

    let result = setup.vault.try_accept_manager(&candidate);
    assert_eq!(result, Err(Ok(VaultError::Unauthorized)));

    setup.vault.set_manager(&setup.manager, &candidate);
    let result = setup.vault.try_accept_manager(&stranger);
    assert_eq!(result, Err(Ok(VaultError::Unauthorized)));
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_only_manager_nominates() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let stranger = Address::generate(&env);

    setup.vault.set_manager(&stranger, &stranger);
}

#[test]
fn test_setters_update_strategy() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let m = &setup.manager;

    setup.vault.set_base_threshold(m, &3600);
    setup.vault.set_limit_threshold(m, &600);
    setup.vault.set_full_range_weight(m, &1_000_000);
    setup.vault.set_period(m, &86_400);
    setup.vault.set_min_tick_move(m, &60);
    setup.vault.set_max_twap_deviation(m, &500);
    setup.vault.set_twap_duration(m, &1800);
    setup.vault.set_max_total_supply(m, &1_000);

    let strategy = setup.vault.get_strategy();
    assert_eq!(strategy.base_threshold, 3600);
    assert_eq!(strategy.limit_threshold, 600);
    assert_eq!(strategy.full_range_weight, 1_000_000);
    assert_eq!(strategy.period, 86_400);
    assert_eq!(strategy.min_tick_move, 60);
    assert_eq!(strategy.max_twap_deviation, 500);
    assert_eq!(strategy.twap_duration, 1800);
    assert_eq!(strategy.max_total_supply, 1_000);
}

#[test]
fn test_setters_validate() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let m = &setup.manager;

    assert_eq!(setup.vault.try_set_base_threshold(m, &1001), Err(Ok(VaultError::InvalidThreshold)));
    assert_eq!(setup.vault.try_set_base_threshold(m, &0), Err(Ok(VaultError::InvalidThreshold)));
    assert_eq!(setup.vault.try_set_base_threshold(m, &887_280), Err(Ok(VaultError::InvalidThreshold)));
    assert_eq!(setup.vault.try_set_limit_threshold(m, &-60), Err(Ok(VaultError::InvalidThreshold)));
    assert_eq!(
        setup.vault.try_set_full_range_weight(m, &1_000_001),
        Err(Ok(VaultError::InvalidFullRangeWeight))
    );
    assert_eq!(setup.vault.try_set_min_tick_move(m, &-1), Err(Ok(VaultError::InvalidMinTickMove)));
    assert_eq!(
        setup.vault.try_set_max_twap_deviation(m, &-1),
        Err(Ok(VaultError::InvalidMaxTwapDeviation))
    );
    assert_eq!(setup.vault.try_set_twap_duration(m, &0), Err(Ok(VaultError::InvalidTwapDuration)));
    assert_eq!(
        setup.vault.try_set_max_total_supply(m, &-1),
        Err(Ok(VaultError::InvalidMaxTotalSupply))
    );
}

#[test]
fn test_supply_cap_cannot_drop_below_supply() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let (_, shares) = deposit_default(&env, &setup);
    let m = &setup.manager;

    assert_eq!(
        setup.vault.try_set_max_total_supply(m, &(shares / 2)),
        Err(Ok(VaultError::InvalidMaxTotalSupply))
    );
    assert_eq!(
        setup.vault.try_set_max_total_supply(m, &(shares - 1)),
        Err(Ok(VaultError::InvalidMaxTotalSupply))
    );

    setup.vault.set_max_total_supply(m, &shares);
    assert_eq!(setup.vault.get_strategy().max_total_supply, shares);
    assert!(setup.vault.total_supply() <= setup.vault.get_strategy().max_total_supply);
}

#[test]
fn test_setters_require_manager() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let stranger = Address::generate(&env);

    assert_eq!(setup.vault.try_set_base_threshold(&stranger, &3600), Err(Ok(VaultError::Unauthorized)));
    assert_eq!(setup.vault.try_set_twap_duration(&stranger, &60), Err(Ok(VaultError::Unauthorized)));
    assert_eq!(setup.vault.try_set_manager_fee(&stranger, &1), Err(Ok(VaultError::Unauthorized)));
    assert_eq!(
        setup.vault.try_set_rebalance_delegate(&stranger, &Some(stranger.clone())),
        Err(Ok(VaultError::Unauthorized))
    );
}

#[test]
fn test_sweep_foreign_token() {
    let env = Env::default();
    let setup = setup_vault(&env);
    let stray = create_token(&env, &setup.pool_admin);
    mint_tokens(&env, &stray, &setup.vault.address, 500);
    let recipient = Address::generate(&env);

    setup.vault.sweep(&setup.manager, &stray, &500, &recipient);

    assert_eq!(balance_of(&env, &stray, &recipient), 500);
    assert_eq!(balance_of(&env, &stray, &setup.vault.address), 0);
}

#[test]
fn test_sweep_rejects_managed_tokens() {
    let env = Env::default();
    let setup = setup_vault(&env);
    deposit_default(&env, &setup);

    let result = setup.vault.try_sweep(&setup.manager, &setup.token0, &1, &setup.manager);
    assert_eq!(result, Err(Ok(VaultError::ProtectedAsset)));
    let result = setup.vault.try_sweep(&setup.manager, &setup.token1, &1, &setup.manager);
    assert_eq!(result, Err(Ok(VaultError::ProtectedAsset)));
}

#[test]
fn test_emergency_burn_keeps_value() {
    let env = Env::default();
    let setup = setup_vault(&env);
    deposit_default(&env, &setup);
    setup.vault.rebalance(&setup.manager);
    generate_fees(&env, &setup, 1_000_000_000, 100_000_000_000);

    let state = setup.vault.get_state();
    let held = setup
        .pool
        .position_info(&setup.vault.address, &state.base.lower, &state.base.upper)
        .liquidity;
    let (before0, before1) = setup.vault.get_total_amounts();

    setup
        .vault
        .emergency_burn(&setup.manager, &state.base.lower, &state.base.upper, &(held / 2));

    let remaining = setup
        .pool
        .position_info(&setup.vault.address, &state.base.lower, &state.base.upper)
        .liquidity;
    assert_eq!(remaining, held - held / 2);

    let (after0, after1) = setup.vault.get_total_amounts();
    assert_close(after0, before0, 10);
    assert_close(after1, before1, 10);
    assert_eq!(setup.vault.get_state(), state);
}

#[test]
fn test_emergency_burn_caps_at_held_liquidity() {
    let env = Env::default();
    let setup = setup_vault(&env);
    deposit_default(&env, &setup);
    setup.vault.rebalance(&setup.manager);

    let state = setup.vault.get_state();
    setup
        .vault
        .emergency_burn(&setup.manager, &state.base.lower, &state.base.upper, &i128::MAX);

    let remaining = setup
        .pool
        .position_info(&setup.vault.address, &state.base.lower, &state.base.upper)
        .liquidity;
    assert_eq!(remaining, 0);
}

#[test]
fn test_emergency_burn_unknown_position() {
    let env = Env::default();
    let setup = setup_vault(&env);
    deposit_default(&env, &setup);
    setup.vault.rebalance(&setup.manager);

    let result = setup.vault.try_emergency_burn(&setup.manager, &-600, &600, &1);
    assert_eq!(result, Err(Ok(VaultError::UnknownPosition)));
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_emergency_burn_manager_only() {
    let env = Env::default();
    let setup = setup_vault(&env);
    deposit_default(&env, &setup);
    setup.vault.rebalance(&setup.manager);
    let state = setup.vault.get_state();
    let stranger = Address::generate(&env);

    setup.vault.emergency_burn(&stranger, &state.base.lower, &state.base.upper, &1);
}
