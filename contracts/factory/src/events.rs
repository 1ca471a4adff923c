//! Factory events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, governance: &Address, protocol_fee: u32) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (governance.clone(), protocol_fee),
    );
}

/// Emitted when a new vault is created
pub fn emit_vault_created(
    env: &Env,
    vault: &Address,
    pool: &Address,
    creator: &Address,
    manager: &Address,
    index: u32,
) {
    env.events().publish(
        (Symbol::new(env, "VaultCreated"),),
        (vault.clone(), pool.clone(), creator.clone(), manager.clone(), index),
    );
}

/// Emitted when governance is handed over
pub fn emit_governance_updated(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "GovernanceUpdated"),),
        (old.clone(), new.clone()),
    );
}

/// Emitted when the fee collector is handed over
pub fn emit_fee_collector_updated(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "FeeCollectorUpdated"),),
        (old.clone(), new.clone()),
    );
}

pub fn emit_protocol_fee_updated(env: &Env, fee: u32) {
    env.events().publish((Symbol::new(env, "ProtocolFeeUpdated"),), (fee,));
}
