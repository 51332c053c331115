use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::{checks::validate_listing, errors::AuctionError, types::*};

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
enum DataKey {
    PaymentToken,     // Token contract used for bids, refunds and proceeds
    TotalAuctions,    // Key for storing the last issued auction id
    Auction(u32),     // Key for storing a specific Auction by its id
    Escrow(AssetRef), // Key for the live auction currently holding an asset
    Bids(Address),    // Key for a bidder's audit trail
}

/// Durable record of every auction. Only the engine mutates it, and only
/// after all transfers of the running operation have been validated.
pub struct AuctionStore<'a> {
    env: &'a Env,
}

impl<'a> AuctionStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn init_payment_token(&self, token: &Address) -> Result<(), AuctionError> {
        if self.env.storage().instance().has(&DataKey::PaymentToken) {
            return Err(AuctionError::AlreadyInitialized);
        }
        self.env
            .storage()
            .instance()
            .set(&DataKey::PaymentToken, token);
        Ok(())
    }

    pub fn payment_token(&self) -> Result<Address, AuctionError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(AuctionError::NotInitialized)
    }

    /// Allocate the next id and persist a fresh auction with no bids.
    pub fn create(
        &self,
        seller: Address,
        asset: AssetRef,
        description: String,
        end_time: u64,
        min_bid: i128,
    ) -> Result<u32, AuctionError> {
        validate_listing(self.env.ledger().timestamp(), end_time, min_bid)?;

        if self.escrowed_auction(&asset).is_some() {
            return Err(AuctionError::AlreadyInEscrow);
        }

        let auction_id = self.count() + 1;

        let auction = Auction {
            id: auction_id,
            seller,
            asset: asset.clone(),
            description,
            end_time,
            min_bid,
            highest_bid: 0,
            highest_bidder: None,
            ended: false,
        };

        self.save(&auction);
        self.env
            .storage()
            .instance()
            .set(&DataKey::TotalAuctions, &auction_id);
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Escrow(asset), &auction_id);

        Ok(auction_id)
    }

    pub fn get(&self, auction_id: u32) -> Result<Auction, AuctionError> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Auction(auction_id))
            .ok_or(AuctionError::NotFound)
    }

    /// Overwrite the leading bid. Ordering must already be validated.
    pub fn update_bid(
        &self,
        auction_id: u32,
        bidder: &Address,
        amount: i128,
    ) -> Result<Auction, AuctionError> {
        let mut auction = self.get(auction_id)?;
        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        self.save(&auction);
        Ok(auction)
    }

    /// Flip the terminal flag and release the asset's escrow slot.
    pub fn mark_ended(&self, auction_id: u32) -> Result<Auction, AuctionError> {
        let mut auction = self.get(auction_id)?;
        if auction.ended {
            return Err(AuctionError::AuctionClosed);
        }
        auction.ended = true;
        self.save(&auction);
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Escrow(auction.asset.clone()));
        Ok(auction)
    }

    pub fn count(&self) -> u32 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::TotalAuctions)
            .unwrap_or(0)
    }

    pub fn escrowed_auction(&self, asset: &AssetRef) -> Option<u32> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Escrow(asset.clone()))
    }

    pub fn append_bid(&self, bidder: &Address, auction_id: u32, amount: i128) {
        let mut bids = self.bids(bidder);
        bids.push_back(BidRecord { auction_id, amount });
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Bids(bidder.clone()), &bids);
    }

    pub fn bids(&self, bidder: &Address) -> Vec<BidRecord> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Bids(bidder.clone()))
            .unwrap_or_else(|| Vec::new(self.env))
    }

    fn save(&self, auction: &Auction) {
        self.env
            .storage()
            .persistent()
            .set(&DataKey::Auction(auction.id), auction);
    }
}
