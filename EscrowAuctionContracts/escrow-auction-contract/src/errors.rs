use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidParameters = 3,
    NotFound = 4,
    NotApproved = 5,
    NotOwner = 6,
    AlreadyInEscrow = 7,
    AuctionClosed = 8,
    AuctionStillOpen = 9,
    BidTooLow = 10,
    NoWinner = 11,
    BidAlreadyPlaced = 12,
    Unauthorized = 13,
    TransferFailed = 14,
}
