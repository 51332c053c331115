#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, String,
};

mod distribution;
mod minting;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    NotOwner = 5,
    NotApproved = 6,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,                      // Minting authority
    Counter,                    // Last issued token id
    Token(u32),                 // NFTDetail by token id
    Approval(Address, Address), // (owner, operator) -> bool
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct NFTMetadata {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct NFTDetail {
    pub owner: Address,
    pub metadata: NFTMetadata,
}

/// Minimal non-fungible asset registry. Tracks ownership and operator
/// approvals so that escrow contracts can take custody of a token on the
/// owner's behalf.
#[contract]
pub struct NFTContract;

#[contractimpl]
impl NFTContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), NftError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(NftError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Counter, &0u32);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Result<Address, NftError> {
        Self::admin(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }
}

impl NFTContract {
    pub(crate) fn admin(env: &Env) -> Result<Address, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(NftError::NotInitialized)
    }

    pub(crate) fn load(env: &Env, token_id: u32) -> Result<NFTDetail, NftError> {
        env.storage()
            .persistent()
            .get(&DataKey::Token(token_id))
            .ok_or(NftError::NotFound)
    }

    pub(crate) fn store(env: &Env, token_id: u32, nft: &NFTDetail) {
        env.storage().persistent().set(&DataKey::Token(token_id), nft);
    }

    pub(crate) fn approved(env: &Env, owner: &Address, operator: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Approval(owner.clone(), operator.clone()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod test;
