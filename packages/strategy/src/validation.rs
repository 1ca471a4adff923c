// Parameter validation

use belugavault_tick::is_valid_threshold;
use crate::types::VaultParams;

/// Largest protocol fee a factory may charge (20%)
pub const MAX_PROTOCOL_FEE: u32 = 200_000;

/// Largest manager fee a vault may charge (20%)
pub const MAX_MANAGER_FEE: u32 = 200_000;

/// Weight meaning "everything in the base range"
pub const MAX_FULL_RANGE_WEIGHT: u32 = 1_000_000;

/// Parameter that failed validation.
///
/// Contracts map this into their own error enum.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParamError {
    InvalidThreshold,
    InvalidFullRangeWeight,
    InvalidMinTickMove,
    InvalidMaxTwapDeviation,
    InvalidTwapDuration,
    InvalidMaxTotalSupply,
    InvalidManagerFee,
    InvalidProtocolFee,
}

pub fn validate_threshold(threshold: i32, tick_spacing: i32) -> Result<(), ParamError> {
    if !is_valid_threshold(threshold, tick_spacing) {
        return Err(ParamError::InvalidThreshold);
    }
    Ok(())
}

pub fn validate_full_range_weight(weight: u32) -> Result<(), ParamError> {
    if weight > MAX_FULL_RANGE_WEIGHT {
        return Err(ParamError::InvalidFullRangeWeight);
    }
    Ok(())
}

pub fn validate_min_tick_move(min_tick_move: i32) -> Result<(), ParamError> {
    if min_tick_move < 0 {
        return Err(ParamError::InvalidMinTickMove);
    }
    Ok(())
}

pub fn validate_max_twap_deviation(max_twap_deviation: i32) -> Result<(), ParamError> {
    if max_twap_deviation < 0 {
        return Err(ParamError::InvalidMaxTwapDeviation);
    }
    Ok(())
}

pub fn validate_twap_duration(twap_duration: u32) -> Result<(), ParamError> {
    if twap_duration == 0 {
        return Err(ParamError::InvalidTwapDuration);
    }
    Ok(())
}

pub fn validate_max_total_supply(max_total_supply: i128) -> Result<(), ParamError> {
    if max_total_supply < 0 {
        return Err(ParamError::InvalidMaxTotalSupply);
    }
    Ok(())
}

pub fn validate_manager_fee(fee: u32) -> Result<(), ParamError> {
    if fee > MAX_MANAGER_FEE {
        return Err(ParamError::InvalidManagerFee);
    }
    Ok(())
}

pub fn validate_protocol_fee(fee: u32) -> Result<(), ParamError> {
    if fee > MAX_PROTOCOL_FEE {
        return Err(ParamError::InvalidProtocolFee);
    }
    Ok(())
}

/// Validate every creation parameter against the pool's tick spacing
pub fn validate_params(params: &VaultParams, tick_spacing: i32) -> Result<(), ParamError> {
    validate_threshold(params.base_threshold, tick_spacing)?;
    validate_threshold(params.limit_threshold, tick_spacing)?;
    validate_full_range_weight(params.full_range_weight)?;
    validate_min_tick_move(params.min_tick_move)?;
    validate_max_twap_deviation(params.max_twap_deviation)?;
    validate_twap_duration(params.twap_duration)?;
    validate_max_total_supply(params.max_total_supply)?;
    Ok(())
}
