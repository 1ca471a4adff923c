// Pool collaborator client

use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};
use belugavault_tick::TickRange;
use crate::types::PositionInfo;

/// Calls into a concentrated-liquidity pool.
///
/// Minting is pay-first: the caller transfers the token amounts for the
/// liquidity to the pool before calling `mint_liquidity`.
pub struct PoolClient<'a> {
    env: &'a Env,
    pub address: Address,
}

impl<'a> PoolClient<'a> {
    pub fn new(env: &'a Env, address: &Address) -> Self {
        Self { env, address: address.clone() }
    }

    pub fn token0(&self) -> Address {
        self.env.invoke_contract(&self.address, &Symbol::new(self.env, "token0"), vec![self.env])
    }

    pub fn token1(&self) -> Address {
        self.env.invoke_contract(&self.address, &Symbol::new(self.env, "token1"), vec![self.env])
    }

    pub fn tick_spacing(&self) -> i32 {
        self.env.invoke_contract(&self.address, &Symbol::new(self.env, "tick_spacing"), vec![self.env])
    }

    pub fn sqrt_price_x64(&self) -> u128 {
        self.env.invoke_contract(&self.address, &Symbol::new(self.env, "sqrt_price_x64"), vec![self.env])
    }

    pub fn current_tick(&self) -> i32 {
        self.env.invoke_contract(&self.address, &Symbol::new(self.env, "current_tick"), vec![self.env])
    }

    /// Time-weighted average tick over the trailing `duration` seconds
    pub fn time_weighted_average_tick(&self, duration: u32) -> i32 {
        self.env.invoke_contract(
            &self.address,
            &Symbol::new(self.env, "time_weighted_average_tick"),
            vec![self.env, duration.into_val(self.env)],
        )
    }

    pub fn mint_liquidity(&self, owner: &Address, range: &TickRange, amount: i128) -> (i128, i128) {
        self.env.invoke_contract(
            &self.address,
            &Symbol::new(self.env, "mint_liquidity"),
            vec![
                self.env,
                owner.clone().into_val(self.env),
                range.lower.into_val(self.env),
                range.upper.into_val(self.env),
                amount.into_val(self.env),
            ],
        )
    }

    /// Burned principal is credited to the position's owed tokens; `amount == 0` only settles fees
    pub fn burn_liquidity(&self, owner: &Address, range: &TickRange, amount: i128) -> (i128, i128) {
        self.env.invoke_contract(
            &self.address,
            &Symbol::new(self.env, "burn_liquidity"),
            vec![
                self.env,
                owner.clone().into_val(self.env),
                range.lower.into_val(self.env),
                range.upper.into_val(self.env),
                amount.into_val(self.env),
            ],
        )
    }

    pub fn collect_fees(&self, owner: &Address, range: &TickRange) -> (i128, i128) {
        self.env.invoke_contract(
            &self.address,
            &Symbol::new(self.env, "collect_fees"),
            vec![
                self.env,
                owner.clone().into_val(self.env),
                range.lower.into_val(self.env),
                range.upper.into_val(self.env),
            ],
        )
    }

    pub fn position_info(&self, owner: &Address, range: &TickRange) -> PositionInfo {
        self.env.invoke_contract(
            &self.address,
            &Symbol::new(self.env, "position_info"),
            vec![
                self.env,
                owner.clone().into_val(self.env),
                range.lower.into_val(self.env),
                range.upper.into_val(self.env),
            ],
        )
    }
}
