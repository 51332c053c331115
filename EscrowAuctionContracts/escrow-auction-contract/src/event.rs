use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

use crate::types::AssetRef;

// Topic shared by every auction event.
pub const AUCTION: Symbol = symbol_short!("AUCTION");

pub const CREATE: Symbol = symbol_short!("CREATE");

pub const BID: Symbol = symbol_short!("BID");

pub const SETTLE: Symbol = symbol_short!("SETTLE");

pub const REVOKE: Symbol = symbol_short!("REVOKE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub seller: Address,
    pub asset: AssetRef,
    pub end_time: u64,
    pub min_bid: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidAccepted {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    pub auction_id: u32,
    pub seller: Address,
    pub winner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionRevoked {
    pub auction_id: u32,
    pub seller: Address,
    pub asset: AssetRef,
}
