// Tick Spacing Helpers

use belugavault_math::constants::{MAX_TICK, MIN_TICK};
use crate::types::TickRange;

/// Round `tick` down to a multiple of `spacing`, toward negative infinity.
///
/// `floor_tick(-1, 60) == -60`, unlike truncating division.
pub fn floor_tick(tick: i32, spacing: i32) -> i32 {
    if spacing <= 0 {
        panic!("tick_spacing must be positive");
    }
    tick - tick.rem_euclid(spacing)
}

/// Widest range aligned to `spacing`
pub fn full_range_bounds(spacing: i32) -> TickRange {
    if spacing <= 0 {
        panic!("tick_spacing must be positive");
    }
    // i32 division truncates toward zero, which is a ceiling for MIN_TICK
    TickRange::new((MIN_TICK / spacing) * spacing, (MAX_TICK / spacing) * spacing)
}

/// Tick is aligned to `spacing`
pub fn is_aligned(tick: i32, spacing: i32) -> bool {
    spacing > 0 && tick % spacing == 0
}

/// Range half-width accepted by a vault: positive, bounded, aligned
pub fn is_valid_threshold(threshold: i32, spacing: i32) -> bool {
    threshold > 0 && threshold <= MAX_TICK && is_aligned(threshold, spacing)
}
