// Position Management Logic

use soroban_sdk::Env;
use belugavault_math::{mul_div, u128_to_i128_saturating, Q64};
use crate::types::Position;

/// Fees earned by `liquidity` since the checkpoint, per token
pub fn calculate_pending_fees(
    env: &Env,
    pos: &Position,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> (i128, i128) {
    if pos.liquidity <= 0 {
        return (0, 0);
    }

    let liquidity_u = pos.liquidity as u128;

    let delta_0 = fee_growth_inside_0.wrapping_sub(pos.fee_growth_inside_last_0);
    let delta_1 = fee_growth_inside_1.wrapping_sub(pos.fee_growth_inside_last_1);

    (
        u128_to_i128_saturating(mul_div(env, liquidity_u, delta_0, Q64)),
        u128_to_i128_saturating(mul_div(env, liquidity_u, delta_1, Q64)),
    )
}

/// Credit fees earned since the last checkpoint to `tokens_owed`, then move the checkpoint
pub fn update_position(
    env: &Env,
    pos: &mut Position,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) {
    let (fee_0, fee_1) = calculate_pending_fees(env, pos, fee_growth_inside_0, fee_growth_inside_1);

    pos.tokens_owed_0 = pos.tokens_owed_0.saturating_add(fee_0);
    pos.tokens_owed_1 = pos.tokens_owed_1.saturating_add(fee_1);

    pos.fee_growth_inside_last_0 = fee_growth_inside_0;
    pos.fee_growth_inside_last_1 = fee_growth_inside_1;
}

/// Settle fees, then apply a signed liquidity change
pub fn modify_position(
    env: &Env,
    pos: &mut Position,
    liquidity_delta: i128,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) {
    update_position(env, pos, fee_growth_inside_0, fee_growth_inside_1);
    pos.liquidity = pos.liquidity.saturating_add(liquidity_delta).max(0);
}
