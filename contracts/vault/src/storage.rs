// Vault storage module

use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val};

use crate::error::VaultError;
use crate::types::{
    AllowanceKey, AllowanceValue, DataKey, FeeState, Roles, Strategy, TokenMetadata,
    VaultConfig, VaultState,
};

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn read<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Result<V, VaultError> {
    let value = env
        .storage()
        .persistent()
        .get(key)
        .ok_or(VaultError::NotInitialized)?;
    extend_ttl(env, key);
    Ok(value)
}

fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

// ============================================================
// CONFIG / STRATEGY / ROLES
// ============================================================

pub fn read_config(env: &Env) -> Result<VaultConfig, VaultError> {
    read(env, &DataKey::Config)
}

pub fn write_config(env: &Env, config: &VaultConfig) {
    write(env, &DataKey::Config, config);
}

pub fn read_strategy(env: &Env) -> Result<Strategy, VaultError> {
    read(env, &DataKey::Strategy)
}

pub fn write_strategy(env: &Env, strategy: &Strategy) {
    write(env, &DataKey::Strategy, strategy);
}

pub fn read_roles(env: &Env) -> Result<Roles, VaultError> {
    read(env, &DataKey::Roles)
}

pub fn write_roles(env: &Env, roles: &Roles) {
    write(env, &DataKey::Roles, roles);
}

// ============================================================
// FEES / POSITION STATE
// ============================================================

pub fn read_fees(env: &Env) -> Result<FeeState, VaultError> {
    read(env, &DataKey::Fees)
}

pub fn write_fees(env: &Env, fees: &FeeState) {
    write(env, &DataKey::Fees, fees);
}

pub fn read_state(env: &Env) -> Result<VaultState, VaultError> {
    read(env, &DataKey::State)
}

pub fn write_state(env: &Env, state: &VaultState) {
    write(env, &DataKey::State, state);
}

// ============================================================
// SHARE TOKEN
// ============================================================

pub fn read_metadata(env: &Env) -> Result<TokenMetadata, VaultError> {
    read(env, &DataKey::Metadata)
}

pub fn write_metadata(env: &Env, metadata: &TokenMetadata) {
    write(env, &DataKey::Metadata, metadata);
}

pub fn read_total_supply(env: &Env) -> i128 {
    read(env, &DataKey::TotalSupply).unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    write(env, &DataKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Balance(owner.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            extend_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, owner: &Address, balance: i128) {
    let key = DataKey::Balance(owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        write(env, &key, &balance);
    }
}

/// Allowance with expired entries reading as zero
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() });
    match env.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        _ => AllowanceValue::default(),
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let key = DataKey::Allowance(AllowanceKey { from: from.clone(), spender: spender.clone() });
    let value = AllowanceValue { amount, expiration_ledger };
    env.storage().temporary().set(&key, &value);

    if amount > 0 {
        let live_for = expiration_ledger.saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}
