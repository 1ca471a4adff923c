// Share ledger

use soroban_sdk::{Address, Env};

use crate::error::VaultError;
use crate::events::{emit_burn, emit_mint, emit_transfer};
use crate::storage::*;

pub fn check_nonnegative(amount: i128) -> Result<(), VaultError> {
    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }
    Ok(())
}

fn receive(env: &Env, to: &Address, amount: i128) {
    let balance = read_balance(env, to);
    write_balance(env, to, balance + amount);
}

fn spend(env: &Env, from: &Address, amount: i128) -> Result<(), VaultError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(VaultError::InsufficientBalance);
    }
    write_balance(env, from, balance - amount);
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), VaultError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(VaultError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(env, from, spender, allowance.amount - amount, allowance.expiration_ledger);
    }
    Ok(())
}

pub fn mint(env: &Env, to: &Address, amount: i128) {
    receive(env, to, amount);
    write_total_supply(env, read_total_supply(env) + amount);
    emit_mint(env, to, amount);
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), VaultError> {
    spend(env, from, amount)?;
    write_total_supply(env, read_total_supply(env) - amount);
    emit_burn(env, from, amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), VaultError> {
    spend(env, from, amount)?;
    receive(env, to, amount);
    emit_transfer(env, from, to, amount);
    Ok(())
}
