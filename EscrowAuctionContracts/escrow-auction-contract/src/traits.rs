use crate::{errors::AuctionError, types::*};
use soroban_sdk::{Address, Env, String, Vec};

/// Interface for the escrow auction contract.
pub trait EscrowAuctionTrait {
    /// Bind the contract to the token used for bids, refunds and proceeds.
    fn initialize(env: Env, payment_token: Address) -> Result<(), AuctionError>;

    /// Take custody of `asset_id` from `registry` and open an auction for it.
    fn create_auction(
        env: Env,
        seller: Address,
        description: String,
        end_time: u64,
        min_bid: i128,
        registry: Address,
        asset_id: u32,
    ) -> Result<u32, AuctionError>;

    /// Escrow `amount` from `bidder` and make them the leader, refunding the
    /// displaced leader in the same invocation.
    fn place_bid(env: Env, auction_id: u32, bidder: Address, amount: i128)
        -> Result<(), AuctionError>;

    /// Settle an expired auction: asset to the winner, proceeds to the seller.
    fn claim(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError>;

    /// Return the asset to the seller of an auction that has no bids.
    fn revoke(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError>;

    fn get_auction(env: Env, auction_id: u32) -> Result<Auction, AuctionError>;

    fn get_auction_state(env: Env, auction_id: u32) -> Result<AuctionState, AuctionError>;

    fn get_auction_count(env: Env) -> u32;

    fn get_bids(env: Env, bidder: Address) -> Vec<BidRecord>;

    fn get_escrowed_auction(env: Env, registry: Address, asset_id: u32) -> Option<u32>;

    fn get_payment_token(env: Env) -> Result<Address, AuctionError>;
}
