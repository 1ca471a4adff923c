// Vault Range Selection

use belugavault_math::constants::{MAX_TICK, MIN_TICK};
use crate::spacing::{floor_tick, is_aligned};
use crate::types::TickRange;

/// Two-sided range centred on the price:
/// `[floor - threshold, floor + spacing + threshold]`
pub fn base_range(tick: i32, spacing: i32, threshold: i32) -> TickRange {
    let floor = floor_tick(tick, spacing);
    TickRange::new(floor - threshold, floor + spacing + threshold)
}

/// Single-sided range just below the price, funded by token1
pub fn bid_range(tick: i32, spacing: i32, threshold: i32) -> TickRange {
    let floor = floor_tick(tick, spacing);
    TickRange::new(floor - threshold, floor)
}

/// Single-sided range just above the price, funded by token0
pub fn ask_range(tick: i32, spacing: i32, threshold: i32) -> TickRange {
    let floor = floor_tick(tick, spacing);
    TickRange::new(floor + spacing, floor + spacing + threshold)
}

/// Range can be used as a pool position: ordered, aligned, within tick bounds
pub fn check_range(range: &TickRange, spacing: i32) -> bool {
    range.lower < range.upper
        && range.lower >= MIN_TICK
        && range.upper <= MAX_TICK
        && is_aligned(range.lower, spacing)
        && is_aligned(range.upper, spacing)
}
