use soroban_sdk::{contractclient, log, Address, Env};

use crate::{errors::AuctionError, types::AssetRef};

/// Interface the escrow expects from an asset registry contract.
#[allow(dead_code)]
#[contractclient(name = "AssetCustodianClient")]
pub trait AssetCustodian {
    /// Current owner of `token_id`.
    fn owner_of(token_id: u32) -> Address;

    /// Whether `operator` may move every token held by `owner`.
    fn is_approved_for_all(owner: Address, operator: Address) -> bool;

    /// Move `token_id` from `from` to `to` on behalf of `spender`.
    fn transfer_from(spender: Address, from: Address, to: Address, token_id: u32);
}

/// Check that `seller` owns the asset and approved this contract to move it.
pub fn ensure_listable(env: &Env, asset: &AssetRef, seller: &Address) -> Result<(), AuctionError> {
    let client = AssetCustodianClient::new(env, &asset.registry);

    match client.try_owner_of(&asset.asset_id) {
        Ok(Ok(owner)) if owner == *seller => (),
        _ => {
            log!(env, "asset {} is not held by {}", asset.asset_id, seller.clone());
            return Err(AuctionError::NotOwner);
        }
    }

    match client.try_is_approved_for_all(seller, &env.current_contract_address()) {
        Ok(Ok(true)) => Ok(()),
        _ => Err(AuctionError::NotApproved),
    }
}

/// Pull the asset from the seller into this contract's custody.
pub fn take_custody(env: &Env, asset: &AssetRef, seller: &Address) -> Result<(), AuctionError> {
    move_asset(env, asset, seller, &env.current_contract_address())
}

/// Release the custodied asset to `to`.
pub fn release(env: &Env, asset: &AssetRef, to: &Address) -> Result<(), AuctionError> {
    move_asset(env, asset, &env.current_contract_address(), to)
}

fn move_asset(env: &Env, asset: &AssetRef, from: &Address, to: &Address) -> Result<(), AuctionError> {
    let client = AssetCustodianClient::new(env, &asset.registry);

    match client.try_transfer_from(&env.current_contract_address(), from, to, &asset.asset_id) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "asset {} transfer to {} failed", asset.asset_id, to.clone());
            Err(AuctionError::TransferFailed)
        }
    }
}
