//! Vault type definitions

use soroban_sdk::{contracttype, Address, String};

pub use belugavault_tick::TickRange;

// ============================================================
// VAULT CONFIG (immutable after initialize)
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct VaultConfig {
    /// Factory that created the vault; source of the protocol fee and fee collector
    pub factory: Address,
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub tick_spacing: i32,
}

// ============================================================
// STRATEGY (manager-tunable)
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Strategy {
    pub base_threshold: i32,
    pub limit_threshold: i32,
    /// ppm of idle funds placed in the base range
    pub full_range_weight: u32,
    /// Seconds between rebalances, 0 = no gate
    pub period: u64,
    /// Ticks the price must move between rebalances, 0 = no gate
    pub min_tick_move: i32,
    pub max_twap_deviation: i32,
    pub twap_duration: u32,
    pub max_total_supply: i128,
}

// ============================================================
// ROLES
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct Roles {
    pub manager: Address,
    pub pending_manager: Option<Address>,
    /// When set, only this address or the manager may rebalance
    pub rebalance_delegate: Option<Address>,
}

// ============================================================
// FEES
// ============================================================

/// Fee rates and balances owed out of the vault.
///
/// Rates are ppm of earned trading fees. `protocol_fee` and `manager_fee`
/// only change at rebalance time. `unskimmed_*` are fees collected outside
/// a rebalance that the next rebalance still has to skim.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeeState {
    pub protocol_fee: u32,
    pub manager_fee: u32,
    pub pending_manager_fee: u32,
    pub accrued_protocol_0: i128,
    pub accrued_protocol_1: i128,
    pub accrued_manager_0: i128,
    pub accrued_manager_1: i128,
    pub unskimmed_0: i128,
    pub unskimmed_1: i128,
}

impl FeeState {
    /// Combined cut taken from earned fees
    pub fn total_rate(&self) -> u32 {
        self.protocol_fee + self.manager_fee
    }
}

// ============================================================
// POSITION STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultState {
    pub base: TickRange,
    pub limit: TickRange,
    pub last_tick: i32,
    pub last_timestamp: u64,
}

// ============================================================
// HOLDINGS BREAKDOWN
// ============================================================

/// One vault position valued at the current price.
///
/// `fees*` are owed trading fees net of the protocol and manager cut the
/// next rebalance will take.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionAmounts {
    pub range: TickRange,
    pub liquidity: i128,
    pub amount0: i128,
    pub amount1: i128,
    pub fees0: i128,
    pub fees1: i128,
}

impl PositionAmounts {
    pub fn total(&self) -> (i128, i128) {
        (self.amount0 + self.fees0, self.amount1 + self.fees1)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultPositions {
    pub base: PositionAmounts,
    pub limit: PositionAmounts,
    pub idle0: i128,
    pub idle1: i128,
}

impl VaultPositions {
    pub fn total(&self) -> (i128, i128) {
        let (base0, base1) = self.base.total();
        let (limit0, limit1) = self.limit.total();
        (self.idle0 + base0 + limit0, self.idle1 + base1 + limit1)
    }
}

// ============================================================
// SHARE TOKEN
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    Config,
    Strategy,
    Roles,
    Fees,
    State,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}
