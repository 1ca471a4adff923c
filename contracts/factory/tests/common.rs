#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};
use beluga_vault_factory::{BelugaVaultFactory, BelugaVaultFactoryClient, VaultParams};
use belugavault_test_pool::{TestPool, TestPoolClient};

pub const PROTOCOL_FEE: u32 = 100_000;
pub const TICK_SPACING: i32 = 60;

pub fn setup_factory(env: &Env) -> (BelugaVaultFactoryClient<'_>, Address) {
    let governance = Address::generate(env);
    let factory_id = env.register(BelugaVaultFactory, ());
    let client = BelugaVaultFactoryClient::new(env, &factory_id);
    let vault_wasm_hash = BytesN::from_array(env, &[0u8; 32]);
    client.initialize(&governance, &vault_wasm_hash, &PROTOCOL_FEE);
    (client, governance)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

pub fn setup_pool(env: &Env) -> TestPoolClient<'_> {
    let admin = Address::generate(env);
    let pool_id = env.register(TestPool, ());
    let pool = TestPoolClient::new(env, &pool_id);
    pool.initialize(&admin, &create_token(env), &create_token(env), &TICK_SPACING, &0);
    pool
}

pub fn default_vault_params(env: &Env, pool: &Address) -> VaultParams {
    VaultParams {
        pool: pool.clone(),
        manager: Address::generate(env),
        max_total_supply: 1_000_000_000_000,
        base_threshold: 2400,
        limit_threshold: 1200,
        full_range_weight: 500_000,
        period: 3600,
        min_tick_move: 0,
        max_twap_deviation: 200,
        twap_duration: 600,
        name: String::from_str(env, "Vault Share"),
        symbol: String::from_str(env, "VS"),
    }
}
