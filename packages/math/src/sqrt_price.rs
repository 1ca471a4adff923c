// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use crate::constants::{MIN_TICK, MAX_TICK};
use crate::q64::{mul_shift_128, ONE_X64};

/// 2^128 / sqrt(1.0001^(2^i)) for bit i of |tick|, Q128
const INVERSE_RATIOS: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64
///
/// The product runs over |tick| in Q128 as 1 / sqrt price, then positive
/// ticks are inverted.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    if tick == 0 { return ONE_X64; }

    let abs_tick = tick.unsigned_abs();
    let mut ratio: Option<u128> = None;
    for (bit, factor) in INVERSE_RATIOS.iter().enumerate() {
        if abs_tick & (1 << bit) != 0 {
            ratio = Some(match ratio {
                Some(r) => mul_shift_128(r, *factor),
                None => *factor,
            });
        }
    }
    // abs_tick > 0, so at least one bit is set
    let ratio = ratio.unwrap_or(u128::MAX);

    if tick < 0 {
        ratio >> 64
    } else {
        invert_q128(ratio)
    }
}

/// floor(2^192 / ratio) by long division, i.e. the Q64 reciprocal of a Q128 fraction
fn invert_q128(ratio: u128) -> u128 {
    // 2^128 = ratio * quotient + rem
    let mut quotient = u128::MAX / ratio;
    let mut rem = u128::MAX - quotient * ratio + 1;
    if rem >= ratio {
        rem -= ratio;
        quotient += 1;
    }

    for _ in 0..64 {
        let carry = rem >> 127;
        rem <<= 1;
        quotient <<= 1;
        if carry == 1 || rem >= ratio {
            rem = rem.wrapping_sub(ratio);
            quotient |= 1;
        }
    }

    quotient
}
