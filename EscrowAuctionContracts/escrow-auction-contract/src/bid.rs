use soroban_sdk::{log, Address, Env};

use crate::{distribution, errors::AuctionError, store::AuctionStore, types::*};

/// Admit `new_bid_amount` from `new_bidder`. The displaced leader is refunded
/// before the new leader is recorded; any failed transfer aborts the bid.
pub fn record_bid(
    env: &Env,
    store: &AuctionStore,
    token: &Address,
    auction_data: &Auction,
    new_bidder: &Address,
    new_bid_amount: i128,
) -> Result<Auction, AuctionError> {
    // Check if user can bid
    auction_data.check_can_bid(env.ledger().timestamp(), new_bid_amount)?;

    // Transfer tokens to contract
    distribution::transfer_to_contract(env, token, new_bidder, new_bid_amount)?;

    // Check if prev bidder and refund
    if let Some(prev_bidder) = &auction_data.highest_bidder {
        distribution::transfer_from_contract(env, token, prev_bidder, auction_data.highest_bid)?;

        log!(
            env,
            "auction {} refunded {} to {}",
            auction_data.id,
            auction_data.highest_bid,
            prev_bidder.clone()
        );
    }

    let updated = store.update_bid(auction_data.id, new_bidder, new_bid_amount)?;
    store.append_bid(new_bidder, auction_data.id, new_bid_amount);

    Ok(updated)
}
