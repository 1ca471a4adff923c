//! Factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    pub governance: Address,
    pub pending_governance: Option<Address>,
    /// Receives protocol fees from every vault
    pub fee_collector: Address,
    pub pending_fee_collector: Option<Address>,
    pub vault_wasm_hash: BytesN<32>,
    /// ppm of earned trading fees, read by vaults at each rebalance
    pub protocol_fee: u32,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Factory config
    Config,
    /// All vault addresses, in creation order
    VaultList,
    /// Registry membership
    IsVault(Address),
}
