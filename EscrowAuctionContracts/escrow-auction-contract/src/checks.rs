use soroban_sdk::Address;

use crate::{errors::AuctionError, types::*};

/// Creation-time parameter checks shared by the engine and the store.
pub fn validate_listing(now: u64, end_time: u64, min_bid: i128) -> Result<(), AuctionError> {
    // Ensure the auction end time is strictly in the future
    if end_time <= now {
        return Err(AuctionError::InvalidParameters);
    }

    // Ensure the minimum bid is greater than zero
    if min_bid <= 0 {
        return Err(AuctionError::InvalidParameters);
    }

    Ok(())
}

impl Auction {
    /// Lifecycle state at `now`. Expiry is evaluated lazily on every call.
    pub fn state(&self, now: u64) -> AuctionState {
        if self.ended {
            AuctionState::Closed
        } else if now < self.end_time {
            AuctionState::Open
        } else {
            AuctionState::Expired
        }
    }

    pub fn has_bid(&self) -> bool {
        self.highest_bidder.is_some()
    }

    pub fn check_can_bid(&self, now: u64, amount: i128) -> Result<(), AuctionError> {
        if self.state(now) != AuctionState::Open {
            return Err(AuctionError::AuctionClosed);
        }

        // Equal bids never displace the current leader
        if amount <= self.highest_bid {
            return Err(AuctionError::BidTooLow);
        }

        // First bid must also meet the minimum
        if !self.has_bid() && amount < self.min_bid {
            return Err(AuctionError::BidTooLow);
        }

        Ok(())
    }

    /// Returns the winner when `caller` may settle the auction at `now`.
    pub fn check_can_claim(&self, now: u64, caller: &Address) -> Result<Address, AuctionError> {
        match self.state(now) {
            AuctionState::Closed => return Err(AuctionError::AuctionClosed),
            AuctionState::Open => return Err(AuctionError::AuctionStillOpen),
            AuctionState::Expired => (),
        }

        let winner = self
            .highest_bidder
            .clone()
            .ok_or(AuctionError::NoWinner)?;

        if &winner != caller {
            return Err(AuctionError::Unauthorized);
        }

        Ok(winner)
    }

    pub fn check_can_revoke(&self, caller: &Address) -> Result<(), AuctionError> {
        if self.ended {
            return Err(AuctionError::AuctionClosed);
        }

        if &self.seller != caller {
            return Err(AuctionError::Unauthorized);
        }

        // Once a bid stands, the leader's claim takes precedence
        if self.has_bid() {
            return Err(AuctionError::BidAlreadyPlaced);
        }

        Ok(())
    }
}
