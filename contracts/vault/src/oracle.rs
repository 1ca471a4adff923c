// Price manipulation guard

use soroban_sdk::{log, Env};
use belugavault_position::PoolClient;

use crate::error::VaultError;

/// Current tick, provided it lies within `max_deviation` of the TWAP.
pub fn check_deviation(
    env: &Env,
    pool: &PoolClient,
    max_deviation: i32,
    twap_duration: u32,
) -> Result<i32, VaultError> {
    if twap_duration == 0 {
        return Err(VaultError::ManipulationSuspected);
    }

    let tick = pool.current_tick();
    let twap = pool.time_weighted_average_tick(twap_duration);

    let deviation = (tick as i64 - twap as i64).abs();
    if deviation > max_deviation as i64 {
        log!(env, "twap deviation exceeded", tick, twap, max_deviation);
        return Err(VaultError::ManipulationSuspected);
    }

    Ok(tick)
}
