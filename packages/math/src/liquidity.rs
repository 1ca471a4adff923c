// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;
use crate::q64::{mul_div, mul_div_round_up, i128_to_u128_safe, u128_to_i128_saturating};

fn sort_prices(sqrt_price_a: u128, sqrt_price_b: u128) -> (u128, u128) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

fn div_256_round_up(env: &Env, numerator: &U256, denominator: &U256) -> U256 {
    if *numerator == U256::from_u32(env, 0) {
        return U256::from_u32(env, 0);
    }
    let one = U256::from_u32(env, 1);
    numerator.sub(&one).div(denominator).add(&one)
}

/// Calculate token0 amount for a liquidity and price range
/// amount0 = L * (sqrt_upper - sqrt_lower) / (sqrt_upper * sqrt_lower), in Q64.64
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    if sqrt_lower == 0 || sqrt_lower == sqrt_upper || liquidity == 0 {
        return 0;
    }

    let numerator = U256::from_u128(env, liquidity)
        .mul(&U256::from_u128(env, Q64))
        .mul(&U256::from_u128(env, sqrt_upper - sqrt_lower));
    let upper_256 = U256::from_u128(env, sqrt_upper);
    let lower_256 = U256::from_u128(env, sqrt_lower);

    let result = if round_up {
        let step = div_256_round_up(env, &numerator, &upper_256);
        div_256_round_up(env, &step, &lower_256)
    } else {
        numerator.div(&upper_256).div(&lower_256)
    };

    result.to_u128().unwrap_or(u128::MAX)
}

/// Calculate token1 amount for a liquidity and price range
/// amount1 = L * (sqrt_upper - sqrt_lower), in Q64.64
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sort_prices(sqrt_price_a, sqrt_price_b);
    let delta = sqrt_upper - sqrt_lower;
    if delta == 0 || liquidity == 0 {
        return 0;
    }

    if round_up {
        mul_div_round_up(env, liquidity, delta, Q64)
    } else {
        mul_div(env, liquidity, delta, Q64)
    }
}

/// Calculate liquidity from token0 amount
pub fn get_liquidity_for_amount0(
    env: &Env,
    amount0: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128
) -> i128 {
    if amount0 <= 0 || sqrt_price_lower >= sqrt_price_upper { return 0; }

    let intermediate = mul_div(env, sqrt_price_lower, sqrt_price_upper, Q64);
    let denominator = sqrt_price_upper - sqrt_price_lower;

    u128_to_i128_saturating(mul_div(env, i128_to_u128_safe(amount0), intermediate, denominator))
}

/// Calculate liquidity from token1 amount
pub fn get_liquidity_for_amount1(
    env: &Env,
    amount1: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128
) -> i128 {
    if amount1 <= 0 || sqrt_price_lower >= sqrt_price_upper { return 0; }

    let denominator = sqrt_price_upper - sqrt_price_lower;
    u128_to_i128_saturating(mul_div(env, i128_to_u128_safe(amount1), Q64, denominator))
}

/// Largest liquidity both token amounts can support at the current price
pub fn get_liquidity_for_amounts(
    env: &Env,
    amount0_desired: i128,
    amount1_desired: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> i128 {
    if sqrt_price_lower >= sqrt_price_upper { return 0; }

    if current_sqrt_price <= sqrt_price_lower {
        get_liquidity_for_amount0(env, amount0_desired, sqrt_price_lower, sqrt_price_upper)
    } else if current_sqrt_price >= sqrt_price_upper {
        get_liquidity_for_amount1(env, amount1_desired, sqrt_price_lower, sqrt_price_upper)
    } else {
        let liq0 = get_liquidity_for_amount0(env, amount0_desired, current_sqrt_price, sqrt_price_upper);
        let liq1 = get_liquidity_for_amount1(env, amount1_desired, sqrt_price_lower, current_sqrt_price);
        liq0.min(liq1)
    }
}

fn amounts_for_liquidity(
    env: &Env,
    liquidity: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
    round_up: bool,
) -> (i128, i128) {
    if liquidity <= 0 || sqrt_price_lower >= sqrt_price_upper { return (0, 0); }

    let liq_u = i128_to_u128_safe(liquidity);

    let sp = current_sqrt_price
        .max(sqrt_price_lower)
        .min(sqrt_price_upper);

    let amount0_u = if sp < sqrt_price_upper {
        get_amount_0_delta(env, sp, sqrt_price_upper, liq_u, round_up)
    } else {
        0
    };

    let amount1_u = if sp > sqrt_price_lower {
        get_amount_1_delta(env, sqrt_price_lower, sp, liq_u, round_up)
    } else {
        0
    };

    (u128_to_i128_saturating(amount0_u), u128_to_i128_saturating(amount1_u))
}

/// Token amounts withdrawable for `liquidity` at the current price (rounded down)
pub fn get_amounts_for_liquidity(
    env: &Env,
    liquidity: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> (i128, i128) {
    amounts_for_liquidity(env, liquidity, sqrt_price_lower, sqrt_price_upper, current_sqrt_price, false)
}

/// Token amounts that must be paid in to mint `liquidity` (rounded up)
pub fn get_amounts_for_liquidity_round_up(
    env: &Env,
    liquidity: i128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> (i128, i128) {
    amounts_for_liquidity(env, liquidity, sqrt_price_lower, sqrt_price_upper, current_sqrt_price, true)
}
