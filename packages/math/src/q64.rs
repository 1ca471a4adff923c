// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;

pub const ONE_X64: u128 = Q64;

/// Type conversion helpers
#[inline]
pub fn i128_to_u128_safe(x: i128) -> u128 {
    if x <= 0 { 0 } else { x as u128 }
}

#[inline]
pub fn u128_to_i128_saturating(x: u128) -> i128 {
    if x > i128::MAX as u128 { i128::MAX } else { x as i128 }
}

/// High 128 bits of `a * b`, i.e. the product of two Q128 fractions
#[inline]
pub fn mul_shift_128(a: u128, b: u128) -> u128 {
    const LO: u128 = 0xFFFFFFFFFFFFFFFF;
    let (a_lo, a_hi) = (a & LO, a >> 64);
    let (b_lo, b_hi) = (b & LO, b >> 64);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let mid = (ll >> 64) + (lh & LO) + (hl & LO);
    hh + (lh >> 64) + (hl >> 64) + (mid >> 64)
}

/// Safe multiply-divide using U256 to prevent overflow
/// Calculates: (a * b) / denominator, saturating at u128::MAX
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 { panic!("mul_div: divide by zero"); }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128().unwrap_or(u128::MAX)
}

/// Same as `mul_div` but rounds the quotient up
pub fn mul_div_round_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 { panic!("mul_div: divide by zero"); }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let den_256 = U256::from_u128(env, denominator);
    let zero = U256::from_u32(env, 0);
    if product == zero {
        return 0;
    }

    // ceil(p / d) = (p - 1) / d + 1 for p > 0
    let one = U256::from_u32(env, 1);
    let result = product.sub(&one).div(&den_256).add(&one);

    result.to_u128().unwrap_or(u128::MAX)
}
