// Rebalance engine

use soroban_sdk::{log, token, Env};

use belugavault_math::{apply_ppm, get_amounts_for_liquidity_round_up, get_liquidity_for_amounts};
use belugavault_position::PoolClient;
use belugavault_tick::{ask_range, base_range, bid_range, check_range};

use crate::accounting::{get_total_amounts, idle_balances, range_sqrt_prices};
use crate::error::VaultError;
use crate::events::{emit_collect_fees, emit_ranges, emit_rebalance};
use crate::factory;
use crate::oracle::check_deviation;
use crate::storage::*;
use crate::types::{FeeState, Strategy, TickRange, VaultConfig, VaultState};

/// Pull all liquidity, skim fees and redeploy into fresh base and limit ranges.
///
/// The bootstrap run at initialization skips the period and tick-move gates
/// and keeps the protocol fee the vault was created with.
pub fn run(env: &Env, bootstrap: bool) -> Result<(), VaultError> {
    let config = read_config(env)?;
    let strategy = read_strategy(env)?;
    let state = read_state(env)?;
    let mut fees = read_fees(env)?;

    let pool = PoolClient::new(env, &config.pool);
    let now = env.ledger().timestamp();

    if !bootstrap {
        check_gates(env, &pool, &strategy, &state, now)?;
    }
    let tick = check_deviation(env, &pool, strategy.max_twap_deviation, strategy.twap_duration)?;

    // Withdrawing
    let (base_fees0, base_fees1) = withdraw_all(env, &pool, &state.base);
    let (limit_fees0, limit_fees1) = withdraw_all(env, &pool, &state.limit);

    // Skimming at the rates in force since the last rebalance
    skim(env, &mut fees, base_fees0 + limit_fees0, base_fees1 + limit_fees1);
    if !bootstrap {
        fees.protocol_fee = factory::protocol_fee(env, &config.factory);
    }
    fees.manager_fee = fees.pending_manager_fee;
    write_fees(env, &fees);

    // Repositioning
    let base = base_range(tick, config.tick_spacing, strategy.base_threshold);
    let bid = bid_range(tick, config.tick_spacing, strategy.limit_threshold);
    let ask = ask_range(tick, config.tick_spacing, strategy.limit_threshold);
    for range in [&base, &bid, &ask] {
        if !check_range(range, config.tick_spacing) {
            return Err(VaultError::InvalidTickRange);
        }
    }

    // Depositing
    let sqrt_price = pool.sqrt_price_x64();

    let (idle0, idle1) = idle_balances(env, &config, &fees);
    let base_liquidity = liquidity_for(
        env,
        &base,
        apply_ppm(env, idle0, strategy.full_range_weight),
        apply_ppm(env, idle1, strategy.full_range_weight),
        sqrt_price,
    );
    mint_paid(env, &pool, &config, &base, base_liquidity, sqrt_price);

    let (left0, left1) = idle_balances(env, &config, &fees);
    let bid_liquidity = liquidity_for(env, &bid, left0, left1, sqrt_price);
    let ask_liquidity = liquidity_for(env, &ask, left0, left1, sqrt_price);
    let (limit, limit_liquidity) = if bid_liquidity > ask_liquidity {
        (bid, bid_liquidity)
    } else {
        (ask, ask_liquidity)
    };
    mint_paid(env, &pool, &config, &limit, limit_liquidity, sqrt_price);

    let state = VaultState {
        base,
        limit,
        last_tick: tick,
        last_timestamp: now,
    };
    write_state(env, &state);

    let (total0, total1) = get_total_amounts(env)?;
    emit_rebalance(env, tick, total0, total1, read_total_supply(env));
    emit_ranges(env, &state.base, &state.limit);

    Ok(())
}

fn check_gates(
    env: &Env,
    pool: &PoolClient,
    strategy: &Strategy,
    state: &VaultState,
    now: u64,
) -> Result<(), VaultError> {
    if strategy.period > 0 && now < state.last_timestamp.saturating_add(strategy.period) {
        log!(env, "rebalance period not elapsed", now, state.last_timestamp);
        return Err(VaultError::RebalanceNotAllowed);
    }

    if strategy.min_tick_move > 0 {
        let tick = pool.current_tick();
        let moved = (tick as i64 - state.last_tick as i64).abs();
        if moved < strategy.min_tick_move as i64 {
            log!(env, "tick move below minimum", tick, state.last_tick);
            return Err(VaultError::RebalanceNotAllowed);
        }
    }

    Ok(())
}

/// Burn `liquidity` from a vault position and collect everything owed.
///
/// Returns `(burned0, burned1, fees0, fees1)`. The vault collects right after
/// every burn, so whatever exceeds the burned principal is fee income.
pub fn burn_and_collect(
    env: &Env,
    pool: &PoolClient,
    range: &TickRange,
    liquidity: i128,
) -> (i128, i128, i128, i128) {
    let vault = env.current_contract_address();
    let (burned0, burned1) = pool.burn_liquidity(&vault, range, liquidity);
    let (collected0, collected1) = pool.collect_fees(&vault, range);
    (burned0, burned1, collected0 - burned0, collected1 - burned1)
}

fn withdraw_all(env: &Env, pool: &PoolClient, range: &TickRange) -> (i128, i128) {
    let held = pool.position_info(&env.current_contract_address(), range).liquidity;
    if held <= 0 {
        return (0, 0);
    }
    let (_, _, fees0, fees1) = burn_and_collect(env, pool, range, held);
    (fees0, fees1)
}

fn skim(env: &Env, fees: &mut FeeState, fees0: i128, fees1: i128) {
    let earned0 = fees0 + fees.unskimmed_0;
    let earned1 = fees1 + fees.unskimmed_1;

    let protocol0 = apply_ppm(env, earned0, fees.protocol_fee);
    let protocol1 = apply_ppm(env, earned1, fees.protocol_fee);
    let manager0 = apply_ppm(env, earned0, fees.manager_fee);
    let manager1 = apply_ppm(env, earned1, fees.manager_fee);

    fees.accrued_protocol_0 += protocol0;
    fees.accrued_protocol_1 += protocol1;
    fees.accrued_manager_0 += manager0;
    fees.accrued_manager_1 += manager1;
    fees.unskimmed_0 = 0;
    fees.unskimmed_1 = 0;

    emit_collect_fees(env, earned0, earned1, protocol0, protocol1, manager0, manager1);
}

fn liquidity_for(env: &Env, range: &TickRange, amount0: i128, amount1: i128, sqrt_price: u128) -> i128 {
    let (sqrt_lower, sqrt_upper) = range_sqrt_prices(range);
    get_liquidity_for_amounts(env, amount0, amount1, sqrt_lower, sqrt_upper, sqrt_price)
}

/// Pay the pool for `liquidity`, then mint it
fn mint_paid(
    env: &Env,
    pool: &PoolClient,
    config: &VaultConfig,
    range: &TickRange,
    liquidity: i128,
    sqrt_price: u128,
) {
    if liquidity <= 0 {
        return;
    }

    let (sqrt_lower, sqrt_upper) = range_sqrt_prices(range);
    let (amount0, amount1) =
        get_amounts_for_liquidity_round_up(env, liquidity, sqrt_lower, sqrt_upper, sqrt_price);

    let vault = env.current_contract_address();
    if amount0 > 0 {
        token::Client::new(env, &config.token0).transfer(&vault, &pool.address, &amount0);
    }
    if amount1 > 0 {
        token::Client::new(env, &config.token1).transfer(&vault, &pool.address, &amount1);
    }

    pool.mint_liquidity(&vault, range, liquidity);
}
