use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Observation, PoolState, Position, PositionKey, RangeState, TickRange};

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// STATE
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::State)
}

pub fn read_state(env: &Env) -> PoolState {
    env.storage()
        .persistent()
        .get(&DataKey::State)
        .expect("pool not initialized")
}

pub fn write_state(env: &Env, state: &PoolState) {
    env.storage().persistent().set(&DataKey::State, state);
    extend_ttl(env, &DataKey::State);
}

// ============================================================
// RANGES & POSITIONS
// ============================================================

pub fn read_ranges(env: &Env) -> Vec<TickRange> {
    env.storage()
        .persistent()
        .get(&DataKey::Ranges)
        .unwrap_or(Vec::new(env))
}

pub fn read_range(env: &Env, range: &TickRange) -> RangeState {
    env.storage()
        .persistent()
        .get(&DataKey::Range(range.lower, range.upper))
        .unwrap_or_default()
}

pub fn write_range(env: &Env, range: &TickRange, value: &RangeState) {
    let key = DataKey::Range(range.lower, range.upper);
    if !env.storage().persistent().has(&key) {
        let mut ranges = read_ranges(env);
        ranges.push_back(*range);
        env.storage().persistent().set(&DataKey::Ranges, &ranges);
        extend_ttl(env, &DataKey::Ranges);
    }
    env.storage().persistent().set(&key, value);
    extend_ttl(env, &key);
}

pub fn position_key(owner: &Address, range: &TickRange) -> PositionKey {
    PositionKey {
        owner: owner.clone(),
        tick_lower: range.lower,
        tick_upper: range.upper,
    }
}

pub fn read_position(env: &Env, owner: &Address, range: &TickRange) -> Position {
    env.storage()
        .persistent()
        .get(&DataKey::Position(position_key(owner, range)))
        .unwrap_or_default()
}

pub fn write_position(env: &Env, owner: &Address, range: &TickRange, pos: &Position) {
    let key = DataKey::Position(position_key(owner, range));
    env.storage().persistent().set(&key, pos);
    extend_ttl(env, &key);
}

// ============================================================
// OBSERVATIONS
// ============================================================

pub fn read_observation_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ObservationCount)
        .unwrap_or(0)
}

pub fn read_newest_index(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::NewestObservation)
        .unwrap_or(0)
}

pub fn read_observation(env: &Env, index: u32) -> Observation {
    env.storage()
        .persistent()
        .get(&DataKey::Observation(index))
        .expect("observation not found")
}

pub fn write_observation(env: &Env, index: u32, obs: &Observation, count: u32) {
    let key = DataKey::Observation(index);
    env.storage().persistent().set(&key, obs);
    extend_ttl(env, &key);
    env.storage().persistent().set(&DataKey::NewestObservation, &index);
    env.storage().persistent().set(&DataKey::ObservationCount, &count);
}
