use crate::event::{
    AuctionCreated, AuctionRevoked, AuctionSettled, BidAccepted, AUCTION, BID, CREATE, REVOKE,
    SETTLE,
};
use crate::traits::EscrowAuctionTrait;
use crate::{bid::record_bid, checks::validate_listing, errors::AuctionError};
use crate::{custody, distribution, store::AuctionStore, types::*};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

#[contract]
pub struct EscrowAuctionContract;

#[contractimpl]
impl EscrowAuctionTrait for EscrowAuctionContract {
    fn initialize(env: Env, payment_token: Address) -> Result<(), AuctionError> {
        AuctionStore::new(&env).init_payment_token(&payment_token)
    }

    /// Takes custody of the asset, then records the auction.
    fn create_auction(
        env: Env,
        seller: Address,
        description: String,
        end_time: u64,
        min_bid: i128,
        registry: Address,
        asset_id: u32,
    ) -> Result<u32, AuctionError> {
        seller.require_auth(); // Ensure caller is authenticated as the auction creator

        let store = AuctionStore::new(&env);
        store.payment_token()?;

        validate_listing(env.ledger().timestamp(), end_time, min_bid)?;

        let asset = AssetRef { registry, asset_id };

        // Re-listing an asset that is already escrowed here is not allowed
        if store.escrowed_auction(&asset).is_some() {
            return Err(AuctionError::AlreadyInEscrow);
        }

        custody::ensure_listable(&env, &asset, &seller)?;

        // A failed pull must never leave an auction record behind
        custody::take_custody(&env, &asset, &seller)?;

        let auction_id = store.create(
            seller.clone(),
            asset.clone(),
            description,
            end_time,
            min_bid,
        )?;

        env.events().publish(
            (AUCTION, CREATE),
            AuctionCreated {
                auction_id,
                seller,
                asset,
                end_time,
                min_bid,
            },
        );

        Ok(auction_id)
    }

    /// Places a bid on an open auction.
    fn place_bid(
        env: Env,
        auction_id: u32,
        bidder: Address,
        amount: i128,
    ) -> Result<(), AuctionError> {
        bidder.require_auth(); // Ensure bidder is authenticated

        let store = AuctionStore::new(&env);
        let token = store.payment_token()?;
        let auction_data = store.get(auction_id)?;

        record_bid(&env, &store, &token, &auction_data, &bidder, amount)?;

        env.events().publish(
            (AUCTION, BID),
            BidAccepted {
                auction_id,
                bidder,
                amount,
            },
        );

        Ok(())
    }

    /// Settles an expired auction for its recorded winner.
    fn claim(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError> {
        caller.require_auth();

        let store = AuctionStore::new(&env);
        let token = store.payment_token()?;
        let auction_data = store.get(auction_id)?;

        let winner = auction_data.check_can_claim(env.ledger().timestamp(), &caller)?;

        // Both transfers must succeed before the auction may close
        custody::release(&env, &auction_data.asset, &winner)?;
        distribution::transfer_from_contract(
            &env,
            &token,
            &auction_data.seller,
            auction_data.highest_bid,
        )?;

        let auction_data = store.mark_ended(auction_id)?;

        log!(
            &env,
            "auction {} settled for {}",
            auction_id,
            auction_data.highest_bid
        );

        env.events().publish(
            (AUCTION, SETTLE),
            AuctionSettled {
                auction_id,
                seller: auction_data.seller,
                winner,
                amount: auction_data.highest_bid,
            },
        );

        Ok(())
    }

    /// Returns the asset to the seller while no bid stands.
    fn revoke(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError> {
        caller.require_auth();

        let store = AuctionStore::new(&env);
        store.payment_token()?;
        let auction_data = store.get(auction_id)?;

        auction_data.check_can_revoke(&caller)?;

        custody::release(&env, &auction_data.asset, &auction_data.seller)?;

        let auction_data = store.mark_ended(auction_id)?;

        env.events().publish(
            (AUCTION, REVOKE),
            AuctionRevoked {
                auction_id,
                seller: auction_data.seller,
                asset: auction_data.asset,
            },
        );

        Ok(())
    }

    fn get_auction(env: Env, auction_id: u32) -> Result<Auction, AuctionError> {
        AuctionStore::new(&env).get(auction_id)
    }

    fn get_auction_state(env: Env, auction_id: u32) -> Result<AuctionState, AuctionError> {
        let auction_data = AuctionStore::new(&env).get(auction_id)?;
        Ok(auction_data.state(env.ledger().timestamp()))
    }

    fn get_auction_count(env: Env) -> u32 {
        AuctionStore::new(&env).count()
    }

    fn get_bids(env: Env, bidder: Address) -> Vec<BidRecord> {
        AuctionStore::new(&env).bids(&bidder)
    }

    fn get_escrowed_auction(env: Env, registry: Address, asset_id: u32) -> Option<u32> {
        AuctionStore::new(&env).escrowed_auction(&AssetRef { registry, asset_id })
    }

    fn get_payment_token(env: Env) -> Result<Address, AuctionError> {
        AuctionStore::new(&env).payment_token()
    }
}
