mod common;

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};
use beluga_vault_factory::{BelugaVaultFactory, BelugaVaultFactoryClient, FactoryError};

#[test]
fn test_initialization_success() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance) = common::setup_factory(&env);

    assert_eq!(client.governance(), governance);
    assert_eq!(client.fee_collector(), governance);
    assert_eq!(client.pending_governance(), None);
    assert_eq!(client.pending_fee_collector(), None);
    assert_eq!(client.protocol_fee(), common::PROTOCOL_FEE);
    assert_eq!(client.num_vaults(), 0);
    assert_eq!(client.get_all_vaults().len(), 0);
    assert_eq!(client.vault_at(&0), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #1000)")]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let governance = Address::generate(&env);
    let factory_id = env.register(BelugaVaultFactory, ());
    let client = BelugaVaultFactoryClient::new(&env, &factory_id);
    let hash = BytesN::from_array(&env, &[0u8; 32]);

    client.initialize(&governance, &hash, &0);
    client.initialize(&governance, &hash, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1001)")]
fn test_create_vault_not_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let factory_id = env.register(BelugaVaultFactory, ());
    let client = BelugaVaultFactoryClient::new(&env, &factory_id);
    let pool = common::setup_pool(&env);
    let creator = Address::generate(&env);

    client.create_vault(&creator, &common::default_vault_params(&env, &pool.address));
}

#[test]
fn test_initialize_rejects_excessive_protocol_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let governance = Address::generate(&env);
    let factory_id = env.register(BelugaVaultFactory, ());
    let client = BelugaVaultFactoryClient::new(&env, &factory_id);
    let hash = BytesN::from_array(&env, &[0u8; 32]);

    let result = client.try_initialize(&governance, &hash, &200_001);
    assert_eq!(result, Err(Ok(FactoryError::InvalidProtocolFee)));

    client.initialize(&governance, &hash, &200_000);
    assert_eq!(client.protocol_fee(), 200_000);
}

#[test]
fn test_unregistered_address_is_not_vault() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_factory(&env);
    assert!(!client.is_vault(&Address::generate(&env)));
}
