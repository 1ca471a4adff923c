#![no_std]

//! # BelugaVault Factory
//!
//! Permissionless vault deployment and protocol-wide fee governance.
//!
//! ## Responsibilities:
//! 1. Validate strategy parameters and deploy vaults
//! 2. Keep an append-only registry of vaults
//! 3. Own the protocol fee rate and the fee collector role

use soroban_sdk::{
    contract, contractimpl, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol, Vec,
};

use belugavault_position::PoolClient;
use belugavault_strategy::{validate_params, validate_protocol_fee};

mod error;
mod events;
mod storage;
mod types;

pub use belugavault_strategy::VaultParams;
pub use error::FactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct BelugaVaultFactory;

#[contractimpl]
impl BelugaVaultFactory {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize factory. Governance also starts out as fee collector.
    pub fn initialize(
        env: Env,
        governance: Address,
        vault_wasm_hash: BytesN<32>,
        protocol_fee: u32,
    ) -> Result<(), FactoryError> {
        governance.require_auth();

        if is_initialized(&env) {
            return Err(FactoryError::AlreadyInitialized);
        }
        validate_protocol_fee(protocol_fee)?;

        write_config(&env, &FactoryConfig {
            governance: governance.clone(),
            pending_governance: None,
            fee_collector: governance.clone(),
            pending_fee_collector: None,
            vault_wasm_hash,
            protocol_fee,
        });

        emit_initialized(&env, &governance, protocol_fee);

        Ok(())
    }

    /// Create vault (atomic: validate + deploy + init + register)
    ///
    /// # Arguments
    /// * `creator` - Account paying for the deployment
    /// * `params` - Strategy parameters (see VaultParams)
    pub fn create_vault(
        env: Env,
        creator: Address,
        params: VaultParams,
    ) -> Result<Address, FactoryError> {
        creator.require_auth();

        let config = read_config(&env)?;

        let tick_spacing = PoolClient::new(&env, &params.pool).tick_spacing();
        validate_params(&params, tick_spacing)?;

        // === DEPLOY VAULT ===
        let index = read_vault_list(&env).len();
        let vault = Self::deploy_vault(&env, &config, &params.pool, index);

        // === INITIALIZE VAULT ===
        let _: () = env.invoke_contract(
            &vault,
            &Symbol::new(&env, "initialize"),
            vec![
                &env,
                env.current_contract_address().into_val(&env),
                params.clone().into_val(&env),
                config.protocol_fee.into_val(&env),
            ],
        );

        // === REGISTER VAULT ===
        add_vault(&env, &vault);

        emit_vault_created(&env, &vault, &params.pool, &creator, &params.manager, index);

        Ok(vault)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn governance(env: Env) -> Result<Address, FactoryError> {
        Ok(read_config(&env)?.governance)
    }

    pub fn pending_governance(env: Env) -> Result<Option<Address>, FactoryError> {
        Ok(read_config(&env)?.pending_governance)
    }

    pub fn fee_collector(env: Env) -> Result<Address, FactoryError> {
        Ok(read_config(&env)?.fee_collector)
    }

    pub fn pending_fee_collector(env: Env) -> Result<Option<Address>, FactoryError> {
        Ok(read_config(&env)?.pending_fee_collector)
    }

    pub fn protocol_fee(env: Env) -> Result<u32, FactoryError> {
        Ok(read_config(&env)?.protocol_fee)
    }

    pub fn num_vaults(env: Env) -> u32 {
        read_vault_list(&env).len()
    }

    pub fn vault_at(env: Env, index: u32) -> Option<Address> {
        read_vault_list(&env).get(index)
    }

    pub fn get_all_vaults(env: Env) -> Vec<Address> {
        read_vault_list(&env)
    }

    pub fn is_vault(env: Env, vault: Address) -> bool {
        vault_registered(&env, &vault)
    }

    // ========================================================
    // GOVERNANCE FUNCTIONS
    // ========================================================

    /// Protocol fee in ppm. Vaults pick it up at their next rebalance.
    pub fn set_protocol_fee(env: Env, caller: Address, fee: u32) -> Result<(), FactoryError> {
        let mut config = Self::require_governance(&env, &caller)?;
        validate_protocol_fee(fee)?;

        config.protocol_fee = fee;
        write_config(&env, &config);

        emit_protocol_fee_updated(&env, fee);
        Ok(())
    }

    /// Update vault WASM hash (for future vault deployments)
    pub fn set_vault_wasm_hash(
        env: Env,
        caller: Address,
        new_hash: BytesN<32>,
    ) -> Result<(), FactoryError> {
        let mut config = Self::require_governance(&env, &caller)?;
        config.vault_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    /// Nominate the next governance; it takes over once it accepts
    pub fn set_governance(env: Env, caller: Address, candidate: Address) -> Result<(), FactoryError> {
        let mut config = Self::require_governance(&env, &caller)?;
        config.pending_governance = Some(candidate);
        write_config(&env, &config);
        Ok(())
    }

    pub fn accept_governance(env: Env, caller: Address) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_config(&env)?;
        if config.pending_governance.as_ref() != Some(&caller) {
            return Err(FactoryError::Unauthorized);
        }

        emit_governance_updated(&env, &config.governance, &caller);

        config.governance = caller;
        config.pending_governance = None;
        write_config(&env, &config);
        Ok(())
    }

    /// Nominate the next fee collector. Only the current fee collector may.
    pub fn set_fee_collector(env: Env, caller: Address, candidate: Address) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_config(&env)?;
        if caller != config.fee_collector {
            return Err(FactoryError::Unauthorized);
        }

        config.pending_fee_collector = Some(candidate);
        write_config(&env, &config);
        Ok(())
    }

    pub fn accept_fee_collector(env: Env, caller: Address) -> Result<(), FactoryError> {
        caller.require_auth();

        let mut config = read_config(&env)?;
        if config.pending_fee_collector.as_ref() != Some(&caller) {
            return Err(FactoryError::Unauthorized);
        }

        emit_fee_collector_updated(&env, &config.fee_collector, &caller);

        config.fee_collector = caller;
        config.pending_fee_collector = None;
        write_config(&env, &config);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn require_governance(env: &Env, caller: &Address) -> Result<FactoryConfig, FactoryError> {
        caller.require_auth();

        let config = read_config(env)?;
        if *caller != config.governance {
            return Err(FactoryError::Unauthorized);
        }
        Ok(config)
    }

    fn deploy_vault(env: &Env, config: &FactoryConfig, pool: &Address, index: u32) -> Address {
        // Deterministic salt
        let mut salt_data = pool.clone().to_xdr(env);
        salt_data.append(&index.to_xdr(env));
        let salt = env.crypto().sha256(&salt_data);

        env.deployer()
            .with_current_contract(salt)
            .deploy(config.vault_wasm_hash.clone())
    }
}
