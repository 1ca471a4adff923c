// Factory collaborator reads

use soroban_sdk::{vec, Address, Env, Symbol};

pub fn protocol_fee(env: &Env, factory: &Address) -> u32 {
    env.invoke_contract(factory, &Symbol::new(env, "protocol_fee"), vec![env])
}

pub fn fee_collector(env: &Env, factory: &Address) -> Address {
    env.invoke_contract(factory, &Symbol::new(env, "fee_collector"), vec![env])
}
