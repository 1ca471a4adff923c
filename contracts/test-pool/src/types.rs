// Pool Types

use soroban_sdk::{contracttype, Address};

pub use belugavault_position::{Position, PositionInfo, PositionKey};
pub use belugavault_tick::TickRange;

#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolState {
    /// Test driver allowed to move the price and credit fees
    pub admin: Address,
    pub token0: Address,
    pub token1: Address,
    pub tick_spacing: i32,
    pub current_tick: i32,
    /// Current sqrt price as Q64.64 fixed point
    pub sqrt_price_x64: u128,
    /// Token balances the pool has accounted for; anything above is unclaimed payment
    pub reserve0: i128,
    pub reserve1: i128,
}

/// Aggregate of every position sharing one tick range
#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct RangeState {
    pub liquidity: i128,
    pub fee_growth_inside_0: u128,
    pub fee_growth_inside_1: u128,
}

/// Price observation; `tick_cumulative` is the time-integral of the tick up to `timestamp`
#[contracttype]
#[derive(Clone, Debug)]
pub struct Observation {
    pub timestamp: u64,
    pub tick: i32,
    pub tick_cumulative: i64,
}

#[contracttype]
pub enum DataKey {
    State,
    /// Ranges that ever held liquidity
    Ranges,
    Range(i32, i32),
    Position(PositionKey),
    Observation(u32),
    NewestObservation,
    ObservationCount,
}
