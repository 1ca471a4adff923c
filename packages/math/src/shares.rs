// Share mint / redeem formulas

use soroban_sdk::{Env, U256};
use crate::constants::PPM;
use crate::q64::{mul_div, i128_to_u128_safe, u128_to_i128_saturating};

/// Shares to mint for a deposit and the token amounts actually pulled.
///
/// Returns `(shares, amount0, amount1)`. The first deposit takes the desired
/// amounts as-is and mints `max(amount0, amount1)`. Later deposits keep the
/// vault ratio: the scarcer side limits the deposit, amounts round up in the
/// vault's favor and shares round down.
pub fn shares_for_deposit(
    env: &Env,
    amount0_desired: i128,
    amount1_desired: i128,
    total0: i128,
    total1: i128,
    total_supply: i128,
) -> (i128, i128, i128) {
    let desired0 = amount0_desired.max(0);
    let desired1 = amount1_desired.max(0);

    if total_supply == 0 {
        return (desired0.max(desired1), desired0, desired1);
    }

    if total0 <= 0 && total1 <= 0 {
        return (0, 0, 0);
    }

    if total0 <= 0 {
        let shares = proportion(env, desired1, total_supply, total1);
        return (shares, 0, desired1);
    }

    if total1 <= 0 {
        let shares = proportion(env, desired0, total_supply, total0);
        return (shares, desired0, 0);
    }

    let t0 = U256::from_u128(env, i128_to_u128_safe(total0));
    let t1 = U256::from_u128(env, i128_to_u128_safe(total1));
    let cross0 = U256::from_u128(env, i128_to_u128_safe(desired0)).mul(&t1);
    let cross1 = U256::from_u128(env, i128_to_u128_safe(desired1)).mul(&t0);
    let cross = if cross0 < cross1 { cross0 } else { cross1 };

    let zero = U256::from_u32(env, 0);
    if cross == zero {
        return (0, 0, 0);
    }

    let one = U256::from_u32(env, 1);
    let amount0 = cross.sub(&one).div(&t1).add(&one);
    let amount1 = cross.sub(&one).div(&t0).add(&one);
    let shares = cross
        .mul(&U256::from_u128(env, i128_to_u128_safe(total_supply)))
        .div(&t0)
        .div(&t1);

    (to_i128(&shares), to_i128(&amount0), to_i128(&amount1))
}

/// `amount * numerator / denominator`, rounded down. Zero when the denominator is not positive.
pub fn proportion(env: &Env, amount: i128, numerator: i128, denominator: i128) -> i128 {
    if amount <= 0 || numerator <= 0 || denominator <= 0 {
        return 0;
    }
    u128_to_i128_saturating(mul_div(
        env,
        i128_to_u128_safe(amount),
        i128_to_u128_safe(numerator),
        i128_to_u128_safe(denominator),
    ))
}

/// Portion of `amount` at a parts-per-million rate, rounded down
pub fn apply_ppm(env: &Env, amount: i128, rate: u32) -> i128 {
    proportion(env, amount, rate as i128, PPM)
}

fn to_i128(value: &U256) -> i128 {
    u128_to_i128_saturating(value.to_u128().unwrap_or(u128::MAX))
}
