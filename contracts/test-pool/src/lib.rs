#![no_std]

//! # BelugaVault Test Pool
//!
//! Deterministic concentrated-liquidity pool used to exercise vaults in tests.
//! Price moves and fee income are driven by the admin through `set_tick`
//! and `accrue_fees`; positions, fee growth and the TWAP follow pool rules.

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use belugavault_math::{
    get_amounts_for_liquidity, get_amounts_for_liquidity_round_up, get_sqrt_ratio_at_tick,
    mul_div, i128_to_u128_safe, Q64, constants::{MAX_TICK, MIN_TICK},
};
use belugavault_position::{modify_position, update_position};
use belugavault_tick::check_range;

mod error;
mod events;
mod oracle;
mod storage;
pub mod types;

use error::ErrorMsg;
use events::*;
use storage::*;
use types::{PoolState, PositionInfo, RangeState, TickRange};

#[contract]
pub struct TestPool;

#[contractimpl]
impl TestPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        tick_spacing: i32,
        tick: i32,
    ) {
        if is_initialized(&env) {
            panic!("{}", ErrorMsg::ALREADY_INITIALIZED);
        }
        if tick_spacing <= 0 {
            panic!("{}", ErrorMsg::INVALID_TICK_SPACING);
        }
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            panic!("{}", ErrorMsg::INVALID_TICK);
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        write_state(&env, &PoolState {
            admin,
            token0,
            token1,
            tick_spacing,
            current_tick: tick,
            sqrt_price_x64: get_sqrt_ratio_at_tick(tick),
            reserve0: 0,
            reserve1: 0,
        });
        oracle::record_observation(&env, tick);

        emit_initialized(&env, tick_spacing, tick);
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn token0(env: Env) -> Address {
        read_state(&env).token0
    }

    pub fn token1(env: Env) -> Address {
        read_state(&env).token1
    }

    pub fn tick_spacing(env: Env) -> i32 {
        read_state(&env).tick_spacing
    }

    pub fn sqrt_price_x64(env: Env) -> u128 {
        read_state(&env).sqrt_price_x64
    }

    pub fn current_tick(env: Env) -> i32 {
        read_state(&env).current_tick
    }

    pub fn time_weighted_average_tick(env: Env, duration: u32) -> i32 {
        oracle::time_weighted_average_tick(&env, duration)
    }

    /// Position snapshot with fees earned so far included in `tokens_owed`
    pub fn position_info(env: Env, owner: Address, tick_lower: i32, tick_upper: i32) -> PositionInfo {
        let range = TickRange::new(tick_lower, tick_upper);
        let value = read_range(&env, &range);
        let mut pos = read_position(&env, &owner, &range);
        update_position(&env, &mut pos, value.fee_growth_inside_0, value.fee_growth_inside_1);
        pos.into()
    }

    // ========================================================
    // TEST DRIVER
    // ========================================================

    /// Move the price as a swap would
    pub fn set_tick(env: Env, tick: i32) {
        let mut state = read_state(&env);
        state.admin.require_auth();

        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            panic!("{}", ErrorMsg::INVALID_TICK);
        }

        let old_tick = state.current_tick;
        state.current_tick = tick;
        state.sqrt_price_x64 = get_sqrt_ratio_at_tick(tick);
        write_state(&env, &state);
        oracle::record_observation(&env, tick);

        emit_swap(&env, old_tick, tick);
    }

    /// Credit trading fees to every range containing the current tick,
    /// pro rata to liquidity. The tokens must already sit in the pool.
    pub fn accrue_fees(env: Env, amount0: i128, amount1: i128) {
        let mut state = read_state(&env);
        state.admin.require_auth();

        let (unclaimed0, unclaimed1) = Self::unclaimed(&env, &state);
        if unclaimed0 < amount0 || unclaimed1 < amount1 {
            panic!("{}", ErrorMsg::UNFUNDED_FEES);
        }
        state.reserve0 += amount0;
        state.reserve1 += amount1;
        write_state(&env, &state);

        let ranges = read_ranges(&env);
        let mut active: i128 = 0;
        for range in ranges.iter() {
            if range.contains(state.current_tick) {
                active += read_range(&env, &range).liquidity;
            }
        }
        if active <= 0 {
            panic!("{}", ErrorMsg::NO_ACTIVE_LIQUIDITY);
        }

        let growth0 = mul_div(&env, i128_to_u128_safe(amount0), Q64, active as u128);
        let growth1 = mul_div(&env, i128_to_u128_safe(amount1), Q64, active as u128);

        for range in ranges.iter() {
            if range.contains(state.current_tick) {
                let mut value = read_range(&env, &range);
                if value.liquidity > 0 {
                    value.fee_growth_inside_0 = value.fee_growth_inside_0.wrapping_add(growth0);
                    value.fee_growth_inside_1 = value.fee_growth_inside_1.wrapping_add(growth1);
                    write_range(&env, &range, &value);
                }
            }
        }

        emit_fees(&env, amount0, amount1);
    }

    /// Account for tokens sent to the pool outside a mint or a fee credit
    pub fn sync(env: Env) {
        let mut state = read_state(&env);
        state.admin.require_auth();

        let (unclaimed0, unclaimed1) = Self::unclaimed(&env, &state);
        state.reserve0 += unclaimed0;
        state.reserve1 += unclaimed1;
        write_state(&env, &state);
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Mint liquidity already paid for: the caller transfers the rounded-up
    /// amounts to the pool before calling. Only tokens received since the
    /// last accounted reserve count as payment.
    pub fn mint_liquidity(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: i128,
    ) -> (i128, i128) {
        owner.require_auth();

        let mut state = read_state(&env);
        let range = Self::checked_range(&state, tick_lower, tick_upper);
        if amount <= 0 {
            panic!("{}", ErrorMsg::INVALID_LIQUIDITY_AMOUNT);
        }

        let (amount0, amount1) = get_amounts_for_liquidity_round_up(
            &env,
            amount,
            get_sqrt_ratio_at_tick(range.lower),
            get_sqrt_ratio_at_tick(range.upper),
            state.sqrt_price_x64,
        );

        let (paid0, paid1) = Self::unclaimed(&env, &state);
        if paid0 < amount0 || paid1 < amount1 {
            panic!("{}", ErrorMsg::UNPAID_MINT);
        }
        state.reserve0 += paid0;
        state.reserve1 += paid1;
        write_state(&env, &state);

        let mut value = read_range(&env, &range);
        let mut pos = read_position(&env, &owner, &range);
        modify_position(&env, &mut pos, amount, value.fee_growth_inside_0, value.fee_growth_inside_1);
        value.liquidity += amount;

        write_position(&env, &owner, &range, &pos);
        write_range(&env, &range, &value);

        emit_mint(&env, &owner, amount, amount0, amount1);

        (amount0, amount1)
    }

    /// Remove liquidity; the principal is credited to the position's owed tokens.
    /// A zero amount only settles fees.
    pub fn burn_liquidity(
        env: Env,
        owner: Address,
        tick_lower: i32,
        tick_upper: i32,
        amount: i128,
    ) -> (i128, i128) {
        owner.require_auth();

        let state = read_state(&env);
        let range = Self::checked_range(&state, tick_lower, tick_upper);
        if amount < 0 {
            panic!("{}", ErrorMsg::INVALID_LIQUIDITY_AMOUNT);
        }

        let mut value = read_range(&env, &range);
        let mut pos = read_position(&env, &owner, &range);
        if amount > pos.liquidity {
            panic!("{}", ErrorMsg::INSUFFICIENT_LIQUIDITY);
        }

        let (amount0, amount1) = get_amounts_for_liquidity(
            &env,
            amount,
            get_sqrt_ratio_at_tick(range.lower),
            get_sqrt_ratio_at_tick(range.upper),
            state.sqrt_price_x64,
        );

        modify_position(&env, &mut pos, -amount, value.fee_growth_inside_0, value.fee_growth_inside_1);
        pos.tokens_owed_0 += amount0;
        pos.tokens_owed_1 += amount1;
        value.liquidity -= amount;

        write_position(&env, &owner, &range, &pos);
        write_range(&env, &range, &value);

        emit_burn(&env, &owner, amount, amount0, amount1);

        (amount0, amount1)
    }

    /// Transfer everything the position is owed: burned principal plus fees
    pub fn collect_fees(env: Env, owner: Address, tick_lower: i32, tick_upper: i32) -> (i128, i128) {
        owner.require_auth();

        let mut state = read_state(&env);
        let range = Self::checked_range(&state, tick_lower, tick_upper);

        let value: RangeState = read_range(&env, &range);
        let mut pos = read_position(&env, &owner, &range);
        update_position(&env, &mut pos, value.fee_growth_inside_0, value.fee_growth_inside_1);

        let amount0 = pos.tokens_owed_0;
        let amount1 = pos.tokens_owed_1;
        pos.tokens_owed_0 = 0;
        pos.tokens_owed_1 = 0;
        write_position(&env, &owner, &range, &pos);
        state.reserve0 -= amount0;
        state.reserve1 -= amount1;
        write_state(&env, &state);

        let pool_addr = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &state.token0).transfer(&pool_addr, &owner, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &state.token1).transfer(&pool_addr, &owner, &amount1);
        }

        emit_collect(&env, &owner, amount0, amount1);

        (amount0, amount1)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Balances above the accounted reserves
    fn unclaimed(env: &Env, state: &PoolState) -> (i128, i128) {
        let pool_addr = env.current_contract_address();
        let balance0 = token::Client::new(env, &state.token0).balance(&pool_addr);
        let balance1 = token::Client::new(env, &state.token1).balance(&pool_addr);
        (balance0 - state.reserve0, balance1 - state.reserve1)
    }

    fn checked_range(state: &PoolState, tick_lower: i32, tick_upper: i32) -> TickRange {
        let range = TickRange::new(tick_lower, tick_upper);
        if !check_range(&range, state.tick_spacing) {
            panic!("{}", ErrorMsg::INVALID_TICK_RANGE);
        }
        range
    }
}
