use soroban_sdk::{Address, Env, Symbol};

pub fn emit_initialized(env: &Env, tick_spacing: i32, tick: i32) {
    env.events().publish((Symbol::new(env, "init_pool"),), (tick_spacing, tick));
}

pub fn emit_swap(env: &Env, old_tick: i32, new_tick: i32) {
    env.events().publish((Symbol::new(env, "swap"),), (old_tick, new_tick));
}

pub fn emit_fees(env: &Env, amount0: i128, amount1: i128) {
    env.events().publish((Symbol::new(env, "fees"),), (amount0, amount1));
}

pub fn emit_mint(env: &Env, owner: &Address, liquidity: i128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "mint"), owner.clone()),
        (liquidity, amount0, amount1),
    );
}

pub fn emit_burn(env: &Env, owner: &Address, liquidity: i128, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "burn"), owner.clone()),
        (liquidity, amount0, amount1),
    );
}

pub fn emit_collect(env: &Env, owner: &Address, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "collect"), owner.clone()),
        (amount0, amount1),
    );
}
