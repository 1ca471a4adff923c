// Vault error module

use soroban_sdk::contracterror;
use belugavault_strategy::ParamError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Initialization errors (1-99)
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Invalid parameter errors (100-199)
    /// Threshold not a positive multiple of tick spacing
    InvalidThreshold = 100,
    /// Weight above 1_000_000 ppm
    InvalidFullRangeWeight = 101,
    InvalidMinTickMove = 102,
    InvalidMaxTwapDeviation = 103,
    InvalidTwapDuration = 104,
    InvalidMaxTotalSupply = 105,
    /// Manager fee above 200_000 ppm
    InvalidManagerFee = 106,
    /// Recipient is the vault itself
    InvalidRecipient = 107,
    /// Negative token or share amount
    InvalidAmount = 108,
    /// Computed range falls outside the pool's tick bounds
    InvalidTickRange = 109,

    // Authorization errors (200-299)
    Unauthorized = 200,

    // Rebalance errors (300-399)
    /// Period or tick-move gate not satisfied
    RebalanceNotAllowed = 300,
    /// Spot tick too far from the TWAP
    ManipulationSuspected = 301,

    // Accounting errors (400-499)
    SlippageExceeded = 400,
    SupplyExceeded = 401,
    ZeroShares = 402,
    InsufficientAccrued = 403,
    InsufficientBalance = 404,
    InsufficientAllowance = 405,

    // Asset errors (500-599)
    /// Sweep targeted a managed token
    ProtectedAsset = 500,
    /// No vault liquidity at the given bounds
    UnknownPosition = 501,
}

impl From<ParamError> for VaultError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::InvalidThreshold => VaultError::InvalidThreshold,
            ParamError::InvalidFullRangeWeight => VaultError::InvalidFullRangeWeight,
            ParamError::InvalidMinTickMove => VaultError::InvalidMinTickMove,
            ParamError::InvalidMaxTwapDeviation => VaultError::InvalidMaxTwapDeviation,
            ParamError::InvalidTwapDuration => VaultError::InvalidTwapDuration,
            ParamError::InvalidMaxTotalSupply => VaultError::InvalidMaxTotalSupply,
            ParamError::InvalidManagerFee => VaultError::InvalidManagerFee,
            // The protocol fee is the factory's to validate
            ParamError::InvalidProtocolFee => VaultError::InvalidManagerFee,
        }
    }
}
