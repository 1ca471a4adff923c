// Factory storage module for BelugaVault

use soroban_sdk::{Address, Env, Vec};

use crate::error::FactoryError;
use crate::types::{DataKey, FactoryConfig};

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// CONFIG
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Result<FactoryConfig, FactoryError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(FactoryError::NotInitialized)
}

// ============================================================
// VAULT REGISTRY
// ============================================================

pub fn read_vault_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::VaultList)
        .unwrap_or(Vec::new(env))
}

pub fn add_vault(env: &Env, vault: &Address) {
    let mut list = read_vault_list(env);
    list.push_back(vault.clone());
    env.storage().persistent().set(&DataKey::VaultList, &list);
    extend_ttl(env, &DataKey::VaultList);

    let key = DataKey::IsVault(vault.clone());
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
}

pub fn vault_registered(env: &Env, vault: &Address) -> bool {
    env.storage().persistent().has(&DataKey::IsVault(vault.clone()))
}
