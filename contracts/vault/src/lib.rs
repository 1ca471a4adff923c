#![no_std]

//! # BelugaVault
//!
//! Automated liquidity manager for a single concentrated-liquidity pool.
//!
//! ## Responsibilities:
//! 1. Hold two positions: a base range around price and a one-sided limit range
//! 2. Issue fungible shares (SEP-41) against everything the vault owns
//! 3. Rebalance on demand, gated by period, tick move and a TWAP check
//! 4. Skim protocol and manager fees out of earned trading fees

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

use belugavault_math::{apply_ppm, proportion, shares_for_deposit};
use belugavault_position::PoolClient;
use belugavault_strategy::{
    validate_full_range_weight, validate_manager_fee, validate_max_total_supply,
    validate_max_twap_deviation, validate_min_tick_move, validate_params, validate_threshold,
    validate_twap_duration,
};
use belugavault_tick::full_range_bounds;

mod accounting;
mod error;
mod events;
mod factory;
mod oracle;
mod rebalance;
mod share;
mod storage;
mod types;

pub use belugavault_strategy::VaultParams;
pub use error::VaultError;
use events::*;
use share::check_nonnegative;
use storage::*;
pub use types::*;

/// Share token decimals
const SHARE_DECIMALS: u32 = 7;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaVault;

#[contractimpl]
impl BelugaVault {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Called once by the factory right after deployment.
    ///
    /// The factory passes its current protocol fee along, since the vault
    /// cannot call back into a contract that is mid-invocation.
    pub fn initialize(
        env: Env,
        factory: Address,
        params: VaultParams,
        protocol_fee: u32,
    ) -> Result<(), VaultError> {
        factory.require_auth();

        if is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }

        let pool = PoolClient::new(&env, &params.pool);
        let tick_spacing = pool.tick_spacing();
        validate_params(&params, tick_spacing)?;

        write_config(&env, &VaultConfig {
            factory,
            pool: params.pool.clone(),
            token0: pool.token0(),
            token1: pool.token1(),
            tick_spacing,
        });
        write_strategy(&env, &Strategy {
            base_threshold: params.base_threshold,
            limit_threshold: params.limit_threshold,
            full_range_weight: params.full_range_weight,
            period: params.period,
            min_tick_move: params.min_tick_move,
            max_twap_deviation: params.max_twap_deviation,
            twap_duration: params.twap_duration,
            max_total_supply: params.max_total_supply,
        });
        write_roles(&env, &Roles {
            manager: params.manager.clone(),
            pending_manager: None,
            rebalance_delegate: None,
        });
        write_fees(&env, &FeeState { protocol_fee, ..FeeState::default() });

        let full_range = full_range_bounds(tick_spacing);
        write_state(&env, &VaultState {
            base: full_range,
            limit: full_range,
            last_tick: pool.current_tick(),
            last_timestamp: env.ledger().timestamp(),
        });
        write_metadata(&env, &TokenMetadata {
            name: params.name,
            symbol: params.symbol,
            decimals: SHARE_DECIMALS,
        });
        write_total_supply(&env, 0);

        rebalance::run(&env, true)?;

        emit_initialized(&env, &params.pool, &params.manager);

        Ok(())
    }

    // ========================================================
    // DEPOSIT / WITHDRAW
    // ========================================================

    /// Deposit up to the desired amounts in the vault's current ratio.
    ///
    /// Returns `(shares, amount0, amount1)`. Deposited tokens stay idle
    /// until the next rebalance.
    pub fn deposit(
        env: Env,
        sender: Address,
        amount0_desired: i128,
        amount1_desired: i128,
        amount0_min: i128,
        amount1_min: i128,
        to: Address,
    ) -> Result<(i128, i128, i128), VaultError> {
        sender.require_auth();

        for amount in [amount0_desired, amount1_desired, amount0_min, amount1_min] {
            check_nonnegative(amount)?;
        }
        let vault = env.current_contract_address();
        if to == vault {
            return Err(VaultError::InvalidRecipient);
        }

        let config = read_config(&env)?;
        let strategy = read_strategy(&env)?;
        let supply = read_total_supply(&env);
        let (total0, total1) = accounting::get_total_amounts(&env)?;

        let (shares, amount0, amount1) =
            shares_for_deposit(&env, amount0_desired, amount1_desired, total0, total1, supply);

        if shares <= 0 {
            return Err(VaultError::ZeroShares);
        }
        if amount0 < amount0_min || amount1 < amount1_min {
            return Err(VaultError::SlippageExceeded);
        }
        if supply + shares > strategy.max_total_supply {
            return Err(VaultError::SupplyExceeded);
        }

        if amount0 > 0 {
            token::Client::new(&env, &config.token0).transfer(&sender, &vault, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &config.token1).transfer(&sender, &vault, &amount1);
        }
        share::mint(&env, &to, shares);

        emit_deposit(&env, &sender, &to, shares, amount0, amount1);

        Ok((shares, amount0, amount1))
    }

    /// Redeem shares for a proportional slice of idle funds and both positions.
    ///
    /// The withdrawer gets all burned principal plus their share of the fees
    /// collected along the way, net of the pending protocol and manager cut.
    pub fn withdraw(
        env: Env,
        sender: Address,
        shares: i128,
        amount0_min: i128,
        amount1_min: i128,
        to: Address,
    ) -> Result<(i128, i128), VaultError> {
        sender.require_auth();

        if shares <= 0 || shares > read_balance(&env, &sender) {
            return Err(VaultError::ZeroShares);
        }
        let vault = env.current_contract_address();
        if to == vault {
            return Err(VaultError::InvalidRecipient);
        }

        let config = read_config(&env)?;
        let state = read_state(&env)?;
        let mut fees = read_fees(&env)?;
        let pool = PoolClient::new(&env, &config.pool);
        let supply = read_total_supply(&env);
        let rate = fees.total_rate();

        let (idle0, idle1) = accounting::idle_balances(&env, &config, &fees);
        let mut amount0 = proportion(&env, idle0, shares, supply);
        let mut amount1 = proportion(&env, idle1, shares, supply);

        share::burn(&env, &sender, shares)?;

        for range in [&state.base, &state.limit] {
            let held = pool.position_info(&vault, range).liquidity;
            if held <= 0 {
                continue;
            }
            let liquidity = proportion(&env, held, shares, supply);
            let (burned0, burned1, fees0, fees1) =
                rebalance::burn_and_collect(&env, &pool, range, liquidity);

            amount0 += burned0 + proportion(&env, fees0 - apply_ppm(&env, fees0, rate), shares, supply);
            amount1 += burned1 + proportion(&env, fees1 - apply_ppm(&env, fees1, rate), shares, supply);
            fees.unskimmed_0 += fees0;
            fees.unskimmed_1 += fees1;
        }
        write_fees(&env, &fees);

        if amount0 < amount0_min || amount1 < amount1_min {
            return Err(VaultError::SlippageExceeded);
        }

        if amount0 > 0 {
            token::Client::new(&env, &config.token0).transfer(&vault, &to, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &config.token1).transfer(&vault, &to, &amount1);
        }

        emit_withdraw(&env, &sender, &to, shares, amount0, amount1);

        Ok((amount0, amount1))
    }

    // ========================================================
    // REBALANCE
    // ========================================================

    /// Anyone may rebalance, unless a delegate is set.
    /// Then only the delegate or the manager may.
    pub fn rebalance(env: Env, caller: Address) -> Result<(), VaultError> {
        caller.require_auth();

        let roles = read_roles(&env)?;
        if let Some(delegate) = &roles.rebalance_delegate {
            if caller != *delegate && caller != roles.manager {
                return Err(VaultError::Unauthorized);
            }
        }

        rebalance::run(&env, false)
    }

    /// Pull liquidity out of a range without moving it. Manager only, ungated.
    pub fn emergency_burn(
        env: Env,
        caller: Address,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: i128,
    ) -> Result<(), VaultError> {
        Self::require_manager(&env, &caller)?;
        check_nonnegative(liquidity)?;

        let config = read_config(&env)?;
        let pool = PoolClient::new(&env, &config.pool);
        let range = TickRange::new(tick_lower, tick_upper);

        let held = pool.position_info(&env.current_contract_address(), &range).liquidity;
        if held <= 0 {
            return Err(VaultError::UnknownPosition);
        }

        let burned = liquidity.min(held);
        let (_, _, fees0, fees1) = rebalance::burn_and_collect(&env, &pool, &range, burned);

        let mut fees = read_fees(&env)?;
        fees.unskimmed_0 += fees0;
        fees.unskimmed_1 += fees1;
        write_fees(&env, &fees);

        emit_emergency_burn(&env, &range, burned);

        Ok(())
    }

    // ========================================================
    // STRATEGY SETTERS (manager)
    // ========================================================

    pub fn set_base_threshold(env: Env, caller: Address, threshold: i32) -> Result<(), VaultError> {
        let config = read_config(&env)?;
        validate_threshold(threshold, config.tick_spacing)?;
        Self::update_strategy(&env, &caller, "base_threshold", threshold as i128, |s| {
            s.base_threshold = threshold
        })
    }

    pub fn set_limit_threshold(env: Env, caller: Address, threshold: i32) -> Result<(), VaultError> {
        let config = read_config(&env)?;
        validate_threshold(threshold, config.tick_spacing)?;
        Self::update_strategy(&env, &caller, "limit_threshold", threshold as i128, |s| {
            s.limit_threshold = threshold
        })
    }

    pub fn set_full_range_weight(env: Env, caller: Address, weight: u32) -> Result<(), VaultError> {
        validate_full_range_weight(weight)?;
        Self::update_strategy(&env, &caller, "full_range_weight", weight as i128, |s| {
            s.full_range_weight = weight
        })
    }

    pub fn set_period(env: Env, caller: Address, period: u64) -> Result<(), VaultError> {
        Self::update_strategy(&env, &caller, "period", period as i128, |s| s.period = period)
    }

    pub fn set_min_tick_move(env: Env, caller: Address, min_tick_move: i32) -> Result<(), VaultError> {
        validate_min_tick_move(min_tick_move)?;
        Self::update_strategy(&env, &caller, "min_tick_move", min_tick_move as i128, |s| {
            s.min_tick_move = min_tick_move
        })
    }

    pub fn set_max_twap_deviation(env: Env, caller: Address, deviation: i32) -> Result<(), VaultError> {
        validate_max_twap_deviation(deviation)?;
        Self::update_strategy(&env, &caller, "max_twap_deviation", deviation as i128, |s| {
            s.max_twap_deviation = deviation
        })
    }

    pub fn set_twap_duration(env: Env, caller: Address, duration: u32) -> Result<(), VaultError> {
        validate_twap_duration(duration)?;
        Self::update_strategy(&env, &caller, "twap_duration", duration as i128, |s| {
            s.twap_duration = duration
        })
    }

    /// The cap may not drop below the shares already issued
    pub fn set_max_total_supply(env: Env, caller: Address, max_total_supply: i128) -> Result<(), VaultError> {
        validate_max_total_supply(max_total_supply)?;
        if max_total_supply < read_total_supply(&env) {
            return Err(VaultError::InvalidMaxTotalSupply);
        }
        Self::update_strategy(&env, &caller, "max_total_supply", max_total_supply, |s| {
            s.max_total_supply = max_total_supply
        })
    }

    /// Takes effect at the next rebalance
    pub fn set_manager_fee(env: Env, caller: Address, fee: u32) -> Result<(), VaultError> {
        Self::require_manager(&env, &caller)?;
        validate_manager_fee(fee)?;

        let mut fees = read_fees(&env)?;
        fees.pending_manager_fee = fee;
        write_fees(&env, &fees);

        emit_param_updated(&env, "pending_manager_fee", fee as i128);
        Ok(())
    }

    pub fn set_rebalance_delegate(
        env: Env,
        caller: Address,
        delegate: Option<Address>,
    ) -> Result<(), VaultError> {
        let mut roles = Self::require_manager(&env, &caller)?;
        roles.rebalance_delegate = delegate.clone();
        write_roles(&env, &roles);

        emit_delegate_updated(&env, &delegate);
        Ok(())
    }

    // ========================================================
    // ROLES
    // ========================================================

    /// First step of a manager handover
    pub fn set_manager(env: Env, caller: Address, candidate: Address) -> Result<(), VaultError> {
        let mut roles = Self::require_manager(&env, &caller)?;
        roles.pending_manager = Some(candidate);
        write_roles(&env, &roles);
        Ok(())
    }

    pub fn accept_manager(env: Env, caller: Address) -> Result<(), VaultError> {
        caller.require_auth();

        let mut roles = read_roles(&env)?;
        if roles.pending_manager.as_ref() != Some(&caller) {
            return Err(VaultError::Unauthorized);
        }

        let previous = roles.manager.clone();
        roles.manager = caller.clone();
        roles.pending_manager = None;
        write_roles(&env, &roles);

        emit_manager_transfer(&env, &previous, &caller);
        Ok(())
    }

    // ========================================================
    // FEE COLLECTION
    // ========================================================

    /// Pay out accrued protocol fees. Caller must be the factory's fee collector.
    pub fn collect_protocol(
        env: Env,
        caller: Address,
        amount0: i128,
        amount1: i128,
        to: Address,
    ) -> Result<(), VaultError> {
        caller.require_auth();

        let config = read_config(&env)?;
        if caller != factory::fee_collector(&env, &config.factory) {
            return Err(VaultError::Unauthorized);
        }
        check_nonnegative(amount0)?;
        check_nonnegative(amount1)?;

        let mut fees = read_fees(&env)?;
        if amount0 > fees.accrued_protocol_0 || amount1 > fees.accrued_protocol_1 {
            return Err(VaultError::InsufficientAccrued);
        }
        fees.accrued_protocol_0 -= amount0;
        fees.accrued_protocol_1 -= amount1;
        write_fees(&env, &fees);

        Self::pay_out(&env, &config, &to, amount0, amount1);
        emit_collect(&env, "CollectProtocol", &to, amount0, amount1);
        Ok(())
    }

    pub fn collect_manager(
        env: Env,
        caller: Address,
        amount0: i128,
        amount1: i128,
        to: Address,
    ) -> Result<(), VaultError> {
        Self::require_manager(&env, &caller)?;
        check_nonnegative(amount0)?;
        check_nonnegative(amount1)?;

        let config = read_config(&env)?;
        let mut fees = read_fees(&env)?;
        if amount0 > fees.accrued_manager_0 || amount1 > fees.accrued_manager_1 {
            return Err(VaultError::InsufficientAccrued);
        }
        fees.accrued_manager_0 -= amount0;
        fees.accrued_manager_1 -= amount1;
        write_fees(&env, &fees);

        Self::pay_out(&env, &config, &to, amount0, amount1);
        emit_collect(&env, "CollectManager", &to, amount0, amount1);
        Ok(())
    }

    /// Recover tokens sent to the vault by mistake. The managed pair is off limits.
    pub fn sweep(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), VaultError> {
        Self::require_manager(&env, &caller)?;
        check_nonnegative(amount)?;

        let config = read_config(&env)?;
        if token == config.token0 || token == config.token1 {
            return Err(VaultError::ProtectedAsset);
        }

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn get_total_amounts(env: Env) -> Result<(i128, i128), VaultError> {
        accounting::get_total_amounts(&env)
    }

    /// Per-position principal and fees plus idle balances; they sum to `get_total_amounts`
    pub fn get_positions(env: Env) -> Result<VaultPositions, VaultError> {
        accounting::get_positions(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn get_config(env: Env) -> Result<VaultConfig, VaultError> {
        read_config(&env)
    }

    pub fn get_strategy(env: Env) -> Result<Strategy, VaultError> {
        read_strategy(&env)
    }

    pub fn get_state(env: Env) -> Result<VaultState, VaultError> {
        read_state(&env)
    }

    pub fn get_fees(env: Env) -> Result<FeeState, VaultError> {
        read_fees(&env)
    }

    pub fn get_roles(env: Env) -> Result<Roles, VaultError> {
        read_roles(&env)
    }

    // ========================================================
    // SHARE TOKEN (SEP-41)
    // ========================================================

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), VaultError> {
        from.require_auth();
        check_nonnegative(amount)?;
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(VaultError::InvalidAmount);
        }

        write_allowance(&env, &from, &spender, amount, expiration_ledger);
        emit_approve(&env, &from, &spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), VaultError> {
        from.require_auth();
        check_nonnegative(amount)?;
        share::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), VaultError> {
        spender.require_auth();
        check_nonnegative(amount)?;
        share::spend_allowance(&env, &from, &spender, amount)?;
        share::transfer(&env, &from, &to, amount)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), VaultError> {
        from.require_auth();
        check_nonnegative(amount)?;
        share::burn(&env, &from, amount)
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), VaultError> {
        spender.require_auth();
        check_nonnegative(amount)?;
        share::spend_allowance(&env, &from, &spender, amount)?;
        share::burn(&env, &from, amount)
    }

    pub fn decimals(env: Env) -> Result<u32, VaultError> {
        Ok(read_metadata(&env)?.decimals)
    }

    pub fn name(env: Env) -> Result<String, VaultError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, VaultError> {
        Ok(read_metadata(&env)?.symbol)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

impl BelugaVault {
    fn require_manager(env: &Env, caller: &Address) -> Result<Roles, VaultError> {
        caller.require_auth();

        let roles = read_roles(env)?;
        if *caller != roles.manager {
            return Err(VaultError::Unauthorized);
        }
        Ok(roles)
    }

    fn update_strategy(
        env: &Env,
        caller: &Address,
        name: &str,
        value: i128,
        apply: impl FnOnce(&mut Strategy),
    ) -> Result<(), VaultError> {
        Self::require_manager(env, caller)?;

        let mut strategy = read_strategy(env)?;
        apply(&mut strategy);
        write_strategy(env, &strategy);

        emit_param_updated(env, name, value);
        Ok(())
    }

    fn pay_out(env: &Env, config: &VaultConfig, to: &Address, amount0: i128, amount1: i128) {
        let vault = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(env, &config.token0).transfer(&vault, to, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(env, &config.token1).transfer(&vault, to, &amount1);
        }
    }
}
