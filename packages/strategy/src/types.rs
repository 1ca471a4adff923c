//! Strategy parameter types shared by the factory and the vault

use soroban_sdk::{contracttype, Address, String};

/// Everything needed to create a vault.
/// Bundled into a struct to stay within the 10 param limit.
#[contracttype]
#[derive(Clone, Debug)]
pub struct VaultParams {
    /// Pool the vault provides liquidity to
    pub pool: Address,
    /// Initial manager
    pub manager: Address,
    /// Cap on total shares
    pub max_total_supply: i128,
    /// Half-width of the base range in ticks
    pub base_threshold: i32,
    /// Width of the single-sided limit range in ticks
    pub limit_threshold: i32,
    /// Share of idle funds (ppm) placed in the base range
    pub full_range_weight: u32,
    /// Minimum seconds between rebalances (0 = off)
    pub period: u64,
    /// Minimum tick move since the last rebalance (0 = off)
    pub min_tick_move: i32,
    /// Maximum distance between spot tick and TWAP
    pub max_twap_deviation: i32,
    /// TWAP window in seconds
    pub twap_duration: u32,
    /// Share token name
    pub name: String,
    /// Share token symbol
    pub symbol: String,
}
