#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env, String,
};
use beluga_vault::{BelugaVault, BelugaVaultClient, VaultParams};
use beluga_vault_factory::{BelugaVaultFactory, BelugaVaultFactoryClient};
use belugavault_test_pool::{TestPool, TestPoolClient};

pub const TICK_SPACING: i32 = 60;
pub const START_TICK: i32 = 46054;
pub const START_TIME: u64 = 1_000_000;
pub const PROTOCOL_FEE: u32 = 100_000;

/// Tokens parked in the pool so burns after a price move can always be paid out.
/// Synced into the pool's reserves, so they never count as mint payment.
pub const POOL_FLOAT: i128 = 10_000_000_000_000_000;

pub const DEPOSIT0: i128 = 1_000_000_000_000;
pub const DEPOSIT1: i128 = 100_000_000_000_000;

pub struct VaultSetup<'a> {
    pub vault: BelugaVaultClient<'a>,
    pub pool: TestPoolClient<'a>,
    pub factory: BelugaVaultFactoryClient<'a>,
    pub governance: Address,
    pub manager: Address,
    pub pool_admin: Address,
    pub token0: Address,
    pub token1: Address,
}

pub fn default_params(env: &Env, pool: &Address, manager: &Address) -> VaultParams {
    VaultParams {
        pool: pool.clone(),
        manager: manager.clone(),
        max_total_supply: i128::MAX / 4,
        base_threshold: 2400,
        limit_threshold: 1200,
        full_range_weight: 500_000,
        period: 0,
        min_tick_move: 0,
        max_twap_deviation: 200_000,
        twap_duration: 600,
        name: String::from_str(env, "Beluga Vault Share"),
        symbol: String::from_str(env, "BVS"),
    }
}

/// Pool at `START_TICK` and an initialized factory; the vault is registered
/// but not yet initialized
pub fn setup_parts(env: &Env) -> (TestPoolClient<'_>, BelugaVaultFactoryClient<'_>, Address, Address) {
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let pool_admin = Address::generate(env);
    let token_a = create_token(env, &pool_admin);
    let token_b = create_token(env, &pool_admin);

    let pool_id = env.register(TestPool, ());
    let pool = TestPoolClient::new(env, &pool_id);
    pool.initialize(&pool_admin, &token_a, &token_b, &TICK_SPACING, &START_TICK);

    let governance = Address::generate(env);
    let factory_id = env.register(BelugaVaultFactory, ());
    let factory = BelugaVaultFactoryClient::new(env, &factory_id);
    factory.initialize(&governance, &BytesN::from_array(env, &[0u8; 32]), &PROTOCOL_FEE);

    (pool, factory, governance, pool_admin)
}

pub fn setup_vault(env: &Env) -> VaultSetup<'_> {
    let (pool, factory, governance, pool_admin) = setup_parts(env);
    let manager = Address::generate(env);

    let vault_id = env.register(BelugaVault, ());
    let vault = BelugaVaultClient::new(env, &vault_id);
    vault.initialize(
        &factory.address,
        &default_params(env, &pool.address, &manager),
        &PROTOCOL_FEE,
    );

    let token0 = pool.token0();
    let token1 = pool.token1();
    mint_tokens(env, &token0, &pool.address, POOL_FLOAT);
    mint_tokens(env, &token1, &pool.address, POOL_FLOAT);
    pool.sync();

    VaultSetup { vault, pool, factory, governance, manager, pool_admin, token0, token1 }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance_of(env: &Env, token: &Address, owner: &Address) -> i128 {
    TokenClient::new(env, token).balance(owner)
}

pub fn advance_time(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}

/// New funded user
pub fn user_with_tokens(env: &Env, setup: &VaultSetup, amount0: i128, amount1: i128) -> Address {
    let user = Address::generate(env);
    if amount0 > 0 {
        mint_tokens(env, &setup.token0, &user, amount0);
    }
    if amount1 > 0 {
        mint_tokens(env, &setup.token1, &user, amount1);
    }
    user
}

/// Fund a user and deposit the default amounts
pub fn deposit_default(env: &Env, setup: &VaultSetup) -> (Address, i128) {
    let user = user_with_tokens(env, setup, DEPOSIT0, DEPOSIT1);
    let (shares, _, _) = setup.vault.deposit(&user, &DEPOSIT0, &DEPOSIT1, &0, &0, &user);
    (user, shares)
}

/// Simulate trading fees earned by in-range liquidity
pub fn generate_fees(env: &Env, setup: &VaultSetup, amount0: i128, amount1: i128) {
    if amount0 > 0 {
        mint_tokens(env, &setup.token0, &setup.pool.address, amount0);
    }
    if amount1 > 0 {
        mint_tokens(env, &setup.token1, &setup.pool.address, amount1);
    }
    setup.pool.accrue_fees(&amount0, &amount1);
}

pub fn assert_close(actual: i128, expected: i128, tolerance: i128) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}
