use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub seller: Address,
    pub asset: AssetRef,
    pub description: String,
    pub end_time: u64,
    pub min_bid: i128,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub ended: bool,
}

/// Custodied asset: the registry contract and the token id inside it.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AssetRef {
    pub registry: Address,
    pub asset_id: u32,
}

/// Entry in a bidder's audit trail. Never mutated after it is appended.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct BidRecord {
    pub auction_id: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum AuctionState {
    Open,    // Accepting bids
    Expired, // Deadline passed, awaiting claim or revoke
    Closed,  // Settled or revoked
}
