// BelugaVault Math Package

#![no_std]

pub mod constants;
pub mod q64;
pub mod sqrt_price;
pub mod liquidity;
pub mod shares;

pub use constants::*;

pub use q64::{
    mul_shift_128,
    mul_div,
    mul_div_round_up,
    i128_to_u128_safe,
    u128_to_i128_saturating,
    ONE_X64,
};

pub use sqrt_price::get_sqrt_ratio_at_tick;

pub use liquidity::{
    get_liquidity_for_amount0,
    get_liquidity_for_amount1,
    get_liquidity_for_amounts,
    get_amounts_for_liquidity,
    get_amounts_for_liquidity_round_up,
    get_amount_0_delta,
    get_amount_1_delta,
};

pub use shares::{shares_for_deposit, proportion, apply_ppm};
