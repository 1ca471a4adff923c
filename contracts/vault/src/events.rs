//! Vault events

use soroban_sdk::{Address, Env, Symbol};

use crate::types::TickRange;

pub fn emit_initialized(env: &Env, pool: &Address, manager: &Address) {
    env.events().publish(
        (Symbol::new(env, "VaultInit"),),
        (pool.clone(), manager.clone()),
    );
}

pub fn emit_deposit(
    env: &Env,
    sender: &Address,
    to: &Address,
    shares: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Deposit"), sender.clone(), to.clone()),
        (shares, amount0, amount1),
    );
}

pub fn emit_withdraw(
    env: &Env,
    sender: &Address,
    to: &Address,
    shares: i128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Withdraw"), sender.clone(), to.clone()),
        (shares, amount0, amount1),
    );
}

/// Fees earned since the last skim and the cuts taken from them
pub fn emit_collect_fees(
    env: &Env,
    fees0: i128,
    fees1: i128,
    protocol0: i128,
    protocol1: i128,
    manager0: i128,
    manager1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "CollectFees"),),
        (fees0, fees1, protocol0, protocol1, manager0, manager1),
    );
}

pub fn emit_rebalance(env: &Env, tick: i32, total0: i128, total1: i128, total_supply: i128) {
    env.events().publish(
        (Symbol::new(env, "Rebalance"),),
        (tick, total0, total1, total_supply),
    );
}

pub fn emit_ranges(env: &Env, base: &TickRange, limit: &TickRange) {
    env.events().publish(
        (Symbol::new(env, "Ranges"),),
        (base.lower, base.upper, limit.lower, limit.upper),
    );
}

pub fn emit_emergency_burn(env: &Env, range: &TickRange, liquidity: i128) {
    env.events().publish(
        (Symbol::new(env, "EmergencyBurn"),),
        (range.lower, range.upper, liquidity),
    );
}

pub fn emit_collect(env: &Env, kind: &str, to: &Address, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, kind), to.clone()),
        (amount0, amount1),
    );
}

pub fn emit_param_updated(env: &Env, name: &str, value: i128) {
    env.events().publish(
        (Symbol::new(env, "ParamUpdated"), Symbol::new(env, name)),
        (value,),
    );
}

pub fn emit_manager_transfer(env: &Env, previous: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "ManagerSet"),),
        (previous.clone(), new.clone()),
    );
}

pub fn emit_delegate_updated(env: &Env, delegate: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "DelegateSet"),),
        (delegate.clone(),),
    );
}

// SEP-41 share token events

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn emit_approve(env: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    env.events().publish(
        (Symbol::new(env, "approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}

pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish((Symbol::new(env, "mint"), to.clone()), amount);
}

pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((Symbol::new(env, "burn"), from.clone()), amount);
}
