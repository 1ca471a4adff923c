// Tick observations and time-weighted average

use soroban_sdk::Env;

use crate::storage::*;
use crate::types::Observation;

pub const OBSERVATION_BUFFER_SIZE: u32 = 64;

/// Record the tick in force from now on.
/// A second observation in the same second overwrites the first.
pub fn record_observation(env: &Env, new_tick: i32) {
    let now = env.ledger().timestamp();
    let count = read_observation_count(env);

    if count == 0 {
        let first = Observation { timestamp: now, tick: new_tick, tick_cumulative: 0 };
        write_observation(env, 0, &first, 1);
        return;
    }

    let newest_index = read_newest_index(env);
    let last = read_observation(env, newest_index);
    let elapsed = now.saturating_sub(last.timestamp);

    let obs = Observation {
        timestamp: now,
        tick: new_tick,
        tick_cumulative: last.tick_cumulative + (last.tick as i64) * (elapsed as i64),
    };

    if elapsed == 0 {
        write_observation(env, newest_index, &obs, count);
    } else {
        let next = (newest_index + 1) % OBSERVATION_BUFFER_SIZE;
        write_observation(env, next, &obs, (count + 1).min(OBSERVATION_BUFFER_SIZE));
    }
}

fn oldest_index(env: &Env) -> u32 {
    let count = read_observation_count(env);
    if count < OBSERVATION_BUFFER_SIZE {
        0
    } else {
        (read_newest_index(env) + 1) % OBSERVATION_BUFFER_SIZE
    }
}

/// Tick cumulative at `target`, which must not precede the oldest observation
fn cumulative_at(env: &Env, target: u64) -> i64 {
    let count = read_observation_count(env);
    let mut index = read_newest_index(env);

    for _ in 0..count {
        let obs = read_observation(env, index);
        if obs.timestamp <= target {
            return obs.tick_cumulative + (obs.tick as i64) * ((target - obs.timestamp) as i64);
        }
        index = (index + OBSERVATION_BUFFER_SIZE - 1) % OBSERVATION_BUFFER_SIZE;
    }

    read_observation(env, oldest_index(env)).tick_cumulative
}

/// Average tick over the trailing `duration` seconds, rounded toward negative infinity.
/// The window is clamped to the oldest observation.
pub fn time_weighted_average_tick(env: &Env, duration: u32) -> i32 {
    let now = env.ledger().timestamp();
    let newest = read_observation(env, read_newest_index(env));
    let oldest = read_observation(env, oldest_index(env));

    let start = now.saturating_sub(duration as u64).max(oldest.timestamp);
    if start >= now {
        return newest.tick;
    }

    let current = newest.tick_cumulative + (newest.tick as i64) * ((now - newest.timestamp) as i64);
    let past = cumulative_at(env, start);

    (current - past).div_euclid((now - start) as i64) as i32
}
