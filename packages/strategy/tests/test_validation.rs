use belugavault_strategy::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn scenario_params(env: &Env) -> VaultParams {
    VaultParams {
        pool: Address::generate(env),
        manager: Address::generate(env),
        max_total_supply: i128::MAX,
        base_threshold: 2400,
        limit_threshold: 1200,
        full_range_weight: 500_000,
        period: 0,
        min_tick_move: 0,
        max_twap_deviation: 200_000,
        twap_duration: 600,
        name: String::from_str(env, "Beluga Vault"),
        symbol: String::from_str(env, "BVLT"),
    }
}

#[test]
fn test_scenario_params_valid() {
    let env = Env::default();
    assert_eq!(validate_params(&scenario_params(&env), 60), Ok(()));
}

#[test]
fn test_thresholds_must_align_with_spacing() {
    let env = Env::default();
    let mut params = scenario_params(&env);
    params.base_threshold = 2430;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidThreshold));

    let mut params = scenario_params(&env);
    params.limit_threshold = 0;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidThreshold));
}

#[test]
fn test_each_bound_reports_its_own_error() {
    let env = Env::default();

    let mut params = scenario_params(&env);
    params.full_range_weight = 1_000_001;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidFullRangeWeight));

    let mut params = scenario_params(&env);
    params.min_tick_move = -1;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidMinTickMove));

    let mut params = scenario_params(&env);
    params.max_twap_deviation = -1;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidMaxTwapDeviation));

    let mut params = scenario_params(&env);
    params.twap_duration = 0;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidTwapDuration));

    let mut params = scenario_params(&env);
    params.max_total_supply = -1;
    assert_eq!(validate_params(&params, 60), Err(ParamError::InvalidMaxTotalSupply));
}

#[test]
fn test_fee_bounds() {
    assert_eq!(validate_protocol_fee(200_000), Ok(()));
    assert_eq!(validate_protocol_fee(200_001), Err(ParamError::InvalidProtocolFee));
    assert_eq!(validate_manager_fee(0), Ok(()));
    assert_eq!(validate_manager_fee(200_001), Err(ParamError::InvalidManagerFee));
}

#[test]
fn test_full_weight_is_allowed() {
    assert_eq!(validate_full_range_weight(1_000_000), Ok(()));
    assert_eq!(validate_full_range_weight(0), Ok(()));
}
