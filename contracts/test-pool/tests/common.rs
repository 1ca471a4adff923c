#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::StellarAssetClient,
    Address, Env,
};
use belugavault_test_pool::{TestPool, TestPoolClient};

pub const TICK_SPACING: i32 = 60;
pub const START_TIME: u64 = 1_000_000;

pub struct PoolSetup<'a> {
    pub pool: TestPoolClient<'a>,
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
}

pub fn setup_pool(env: &Env, tick: i32) -> PoolSetup<'_> {
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pool_id = env.register(TestPool, ());
    let pool = TestPoolClient::new(env, &pool_id);
    pool.initialize(&admin, &token_a, &token_b, &TICK_SPACING, &tick);

    let token0 = pool.token0();
    let token1 = pool.token1();
    PoolSetup { pool, admin, token0, token1 }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn advance_time(env: &Env, seconds: u64) {
    let now = env.ledger().timestamp();
    env.ledger().set_timestamp(now + seconds);
}
