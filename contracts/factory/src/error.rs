// Factory error module for BelugaVault

use soroban_sdk::contracterror;
use belugavault_strategy::ParamError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Vault creation errors (1100-1199)
    InvalidThreshold = 1100,
    InvalidFullRangeWeight = 1101,
    InvalidMinTickMove = 1102,
    InvalidMaxTwapDeviation = 1103,
    InvalidTwapDuration = 1104,
    InvalidMaxTotalSupply = 1105,
    InvalidProtocolFee = 1106,
    InvalidManagerFee = 1107,

    // Authorization errors (1300-1399)
    Unauthorized = 1300,
}

impl From<ParamError> for FactoryError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::InvalidThreshold => FactoryError::InvalidThreshold,
            ParamError::InvalidFullRangeWeight => FactoryError::InvalidFullRangeWeight,
            ParamError::InvalidMinTickMove => FactoryError::InvalidMinTickMove,
            ParamError::InvalidMaxTwapDeviation => FactoryError::InvalidMaxTwapDeviation,
            ParamError::InvalidTwapDuration => FactoryError::InvalidTwapDuration,
            ParamError::InvalidMaxTotalSupply => FactoryError::InvalidMaxTotalSupply,
            ParamError::InvalidManagerFee => FactoryError::InvalidManagerFee,
            ParamError::InvalidProtocolFee => FactoryError::InvalidProtocolFee,
        }
    }
}
