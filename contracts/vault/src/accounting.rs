// Vault holdings valuation

use soroban_sdk::{token, Env};

use belugavault_math::{apply_ppm, get_sqrt_ratio_at_tick};
use belugavault_position::{principal_amounts, PoolClient};

use crate::error::VaultError;
use crate::storage::{read_config, read_fees, read_state};
use crate::types::{FeeState, PositionAmounts, TickRange, VaultConfig, VaultPositions};

/// Token balances held by the vault that belong to shareholders.
///
/// Accrued protocol and manager fees are excluded, as is the cut the next
/// rebalance will take from fees collected outside a rebalance.
pub fn idle_balances(env: &Env, config: &VaultConfig, fees: &FeeState) -> (i128, i128) {
    let vault = env.current_contract_address();
    let balance0 = token::Client::new(env, &config.token0).balance(&vault);
    let balance1 = token::Client::new(env, &config.token1).balance(&vault);

    let rate = fees.total_rate();
    let idle0 = balance0
        - fees.accrued_protocol_0
        - fees.accrued_manager_0
        - apply_ppm(env, fees.unskimmed_0, rate);
    let idle1 = balance1
        - fees.accrued_protocol_1
        - fees.accrued_manager_1
        - apply_ppm(env, fees.unskimmed_1, rate);

    (idle0.max(0), idle1.max(0))
}

/// Principal and owed fees of one vault position, net of the pending fee cut
pub fn position_amounts(
    env: &Env,
    pool: &PoolClient,
    range: &TickRange,
    sqrt_price_x64: u128,
    rate: u32,
) -> PositionAmounts {
    let info = pool.position_info(&env.current_contract_address(), range);
    let (amount0, amount1) = principal_amounts(env, info.liquidity, range, sqrt_price_x64);

    PositionAmounts {
        range: *range,
        liquidity: info.liquidity,
        amount0,
        amount1,
        fees0: info.tokens_owed_0 - apply_ppm(env, info.tokens_owed_0, rate),
        fees1: info.tokens_owed_1 - apply_ppm(env, info.tokens_owed_1, rate),
    }
}

/// Idle balances and both positions, each valued at the current price
pub fn get_positions(env: &Env) -> Result<VaultPositions, VaultError> {
    let config = read_config(env)?;
    let fees = read_fees(env)?;
    let state = read_state(env)?;

    let pool = PoolClient::new(env, &config.pool);
    let sqrt_price = pool.sqrt_price_x64();
    let rate = fees.total_rate();

    let (idle0, idle1) = idle_balances(env, &config, &fees);
    Ok(VaultPositions {
        base: position_amounts(env, &pool, &state.base, sqrt_price, rate),
        limit: position_amounts(env, &pool, &state.limit, sqrt_price, rate),
        idle0,
        idle1,
    })
}

/// Everything the shareholders own: idle balances plus both positions
pub fn get_total_amounts(env: &Env) -> Result<(i128, i128), VaultError> {
    Ok(get_positions(env)?.total())
}

/// Sqrt prices at a range's bounds
pub fn range_sqrt_prices(range: &TickRange) -> (u128, u128) {
    (get_sqrt_ratio_at_tick(range.lower), get_sqrt_ratio_at_tick(range.upper))
}

