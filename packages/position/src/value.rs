// Position valuation

use soroban_sdk::Env;
use belugavault_math::{get_amounts_for_liquidity, get_sqrt_ratio_at_tick};
use belugavault_tick::TickRange;

/// Principal withdrawable from `liquidity` in `range` at the given sqrt price
pub fn principal_amounts(
    env: &Env,
    liquidity: i128,
    range: &TickRange,
    sqrt_price_x64: u128,
) -> (i128, i128) {
    if liquidity <= 0 {
        return (0, 0);
    }
    get_amounts_for_liquidity(
        env,
        liquidity,
        get_sqrt_ratio_at_tick(range.lower),
        get_sqrt_ratio_at_tick(range.upper),
        sqrt_price_x64,
    )
}
