use solana_program::clock::UnixTimestamp;

use crate::host::InvokeContext;
use crate::state::{Auction, AuctionConfig};
use crate::{AuctionHouseError, ItemId};
use crate::{MAX_AUCTION_DURATION, MAX_MIN_BID_INCREMENT_PERCENTAGE, MIN_AUCTION_DURATION};

// ************************ Caller assertions ************************ //

pub fn assert_admin(ctx: &InvokeContext) -> Result<(), AuctionHouseError> {
    if !ctx.caller_is_admin() {
        return Err(AuctionHouseError::Unauthorized);
    }
    Ok(())
}

// ************************ Configuration checks ************************ //

pub fn check_config(config: &AuctionConfig) -> Result<(), AuctionHouseError> {
    if config.duration < MIN_AUCTION_DURATION || config.duration > MAX_AUCTION_DURATION {
        return Err(AuctionHouseError::InvalidDuration);
    }
    if config.time_buffer < 0 || config.time_buffer > config.duration {
        return Err(AuctionHouseError::InvalidTimeBuffer);
    }
    if config.min_bid_increment_percentage > MAX_MIN_BID_INCREMENT_PERCENTAGE {
        return Err(AuctionHouseError::InvalidBidIncrement);
    }
    Ok(())
}

// ************************ Arithmetic checks ************************ //

pub fn checked_add_time(
    timestamp: UnixTimestamp,
    seconds: UnixTimestamp,
) -> Result<UnixTimestamp, AuctionHouseError> {
    timestamp
        .checked_add(seconds)
        .ok_or(AuctionHouseError::ArithmeticError)
}

/// Smallest amount that outbids `current` by at least `percentage` percent.
///
/// Computed in `u128`, the result may not fit into a `u64` bid.
pub fn min_outbid_amount(current: u64, percentage: u8) -> u128 {
    let current = current as u128;
    current + current * percentage as u128 / 100
}

// ************************ Auction business logic checks ************************ //

pub fn check_biddable(
    auction: &Auction,
    item_id: ItemId,
    current_timestamp: UnixTimestamp,
) -> Result<(), AuctionHouseError> {
    if auction.item_id != item_id {
        return Err(AuctionHouseError::StaleAuction);
    }
    if current_timestamp >= auction.end_time {
        return Err(AuctionHouseError::AuctionExpired);
    }
    Ok(())
}

pub fn check_bid_amount(
    config: &AuctionConfig,
    auction: &Auction,
    bid_amount: u64,
) -> Result<(), AuctionHouseError> {
    if bid_amount == 0 || bid_amount < config.reserve_price {
        return Err(AuctionHouseError::BidTooLow);
    }
    if auction.has_bid() {
        let min_amount = min_outbid_amount(auction.amount, config.min_bid_increment_percentage);
        if (bid_amount as u128) < min_amount || bid_amount <= auction.amount {
            return Err(AuctionHouseError::BidTooLow);
        }
    }
    Ok(())
}

pub fn check_settleable(
    auction: &Auction,
    current_timestamp: UnixTimestamp,
) -> Result<(), AuctionHouseError> {
    if auction.settled {
        return Err(AuctionHouseError::AlreadySettled);
    }
    if current_timestamp < auction.end_time {
        return Err(AuctionHouseError::AuctionStillActive);
    }
    Ok(())
}

/// New end time of the auction if a bid at `current_timestamp` falls within
/// the time buffer.
pub fn extended_end_time(
    auction: &Auction,
    time_buffer: UnixTimestamp,
    current_timestamp: UnixTimestamp,
) -> Result<Option<UnixTimestamp>, AuctionHouseError> {
    let remaining = auction
        .end_time
        .checked_sub(current_timestamp)
        .ok_or(AuctionHouseError::ArithmeticError)?;
    if remaining < time_buffer {
        Ok(Some(checked_add_time(current_timestamp, time_buffer)?))
    } else {
        Ok(None)
    }
}
