use soroban_sdk::{log, token, Address, Env};

use crate::errors::AuctionError;

// Transfer tokens from contract
pub fn transfer_from_contract(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), AuctionError> {
    let result = token::Client::new(env, token).try_transfer(
        &env.current_contract_address(),
        to,
        &amount,
    );

    match result {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "push of {} to {} failed", amount, to.clone());
            Err(AuctionError::TransferFailed)
        }
    }
}

// Transfer tokens to contract
pub fn transfer_to_contract(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), AuctionError> {
    let result = token::Client::new(env, token).try_transfer(
        from,
        &env.current_contract_address(),
        &amount,
    );

    match result {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "deposit of {} from {} failed", amount, from.clone());
            Err(AuctionError::TransferFailed)
        }
    }
}
