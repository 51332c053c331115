#![cfg(test)]

use crate::{NFTContract, NFTContractClient, NftError};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup() -> (Env, Address, NFTContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(NFTContract, ());
    let client = NFTContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, admin, client)
}

fn mint_to(env: &Env, client: &NFTContractClient, owner: &Address) -> u32 {
    client.mint(
        owner,
        &String::from_str(env, "Genesis"),
        &String::from_str(env, "First edition"),
    )
}

#[test]
fn test_initialize_twice_fails() {
    let (_env, admin, client) = setup();

    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);
    assert_eq!(
        client.try_initialize(&admin),
        Err(Ok(NftError::AlreadyInitialized))
    );
}

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, _admin, client) = setup();
    let owner = Address::generate(&env);

    let first = mint_to(&env, &client, &owner);
    let second = mint_to(&env, &client, &owner);

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(client.owner_of(&first), owner);

    let metadata = client.get_metadata(&first);
    assert_eq!(metadata.name, String::from_str(&env, "Genesis"));
}

#[test]
fn test_owner_of_unknown_token() {
    let (_env, _admin, client) = setup();

    assert_eq!(client.try_owner_of(&42), Err(Ok(NftError::NotFound)));
}

#[test]
fn test_owner_can_transfer() {
    let (env, _admin, client) = setup();
    let owner = Address::generate(&env);
    let buyer = Address::generate(&env);
    let token_id = mint_to(&env, &client, &owner);

    client.transfer_from(&owner, &owner, &buyer, &token_id);

    assert_eq!(client.owner_of(&token_id), buyer);
}

#[test]
fn test_operator_requires_approval() {
    let (env, _admin, client) = setup();
    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let token_id = mint_to(&env, &client, &owner);

    assert!(!client.is_approved_for_all(&owner, &operator));
    assert_eq!(
        client.try_transfer_from(&operator, &owner, &operator, &token_id),
        Err(Ok(NftError::NotApproved))
    );

    client.set_approval_for_all(&owner, &operator, &true);
    assert!(client.is_approved_for_all(&owner, &operator));

    client.transfer_from(&operator, &owner, &operator, &token_id);
    assert_eq!(client.owner_of(&token_id), operator);
}

#[test]
fn test_approval_can_be_withdrawn() {
    let (env, _admin, client) = setup();
    let owner = Address::generate(&env);
    let operator = Address::generate(&env);
    let token_id = mint_to(&env, &client, &owner);

    client.set_approval_for_all(&owner, &operator, &true);
    client.set_approval_for_all(&owner, &operator, &false);

    assert_eq!(
        client.try_transfer_from(&operator, &owner, &operator, &token_id),
        Err(Ok(NftError::NotApproved))
    );
}

#[test]
fn test_transfer_from_wrong_owner() {
    let (env, _admin, client) = setup();
    let owner = Address::generate(&env);
    let stranger = Address::generate(&env);
    let token_id = mint_to(&env, &client, &owner);

    assert_eq!(
        client.try_transfer_from(&stranger, &stranger, &owner, &token_id),
        Err(Ok(NftError::NotOwner))
    );
}

#[test]
fn test_self_approval_rejected() {
    let (env, _admin, client) = setup();
    let owner = Address::generate(&env);

    assert_eq!(
        client.try_set_approval_for_all(&owner, &owner, &true),
        Err(Ok(NftError::Unauthorized))
    );
}
