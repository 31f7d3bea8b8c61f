use crate::ItemId;

use agsol_common::MaxSerializedLen;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// The main configuration parameters of the auction house.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, MaxSerializedLen, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct AuctionConfig {
    /// NFT collection the auctioned items are minted from.
    pub token: Pubkey,
    /// Asset the bids are paid in ([`native_asset`](crate::native_asset)
    /// for the native currency).
    pub payment_asset: Pubkey,
    /// Recipient of the winning bids.
    pub treasury: Pubkey,
    /// A bid arriving closer than this to the end of the auction pushes the
    /// end to `now + time_buffer` (in seconds).
    pub time_buffer: UnixTimestamp,
    /// Minimum amount of the first bid.
    pub reserve_price: u64,
    /// Minimum raise over the current highest bid (in percent).
    pub min_bid_increment_percentage: u8,
    /// Duration of a single auction (in seconds).
    pub duration: UnixTimestamp,
    /// Items without bids are burned at settlement if set, otherwise they
    /// are sent to the treasury.
    pub burn_unsold_items: bool,
}

/// State of the item currently up for bid.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, MaxSerializedLen, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct Auction {
    pub item_id: ItemId,
    /// Highest bid so far.
    pub amount: u64,
    /// Account of the highest bidder, if there was a bid at all.
    pub bidder: Option<Pubkey>,
    pub start_time: UnixTimestamp,
    pub end_time: UnixTimestamp,
    /// Set once the item and the proceeds have been handed over.
    pub settled: bool,
}

/// Lifecycle phase of the current auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionPhase {
    NoAuction,
    Active,
    EndedUnsettled,
    Settled,
}

impl Auction {
    pub fn phase(&self, now: UnixTimestamp) -> AuctionPhase {
        if self.settled {
            AuctionPhase::Settled
        } else if now < self.end_time {
            AuctionPhase::Active
        } else {
            AuctionPhase::EndedUnsettled
        }
    }

    pub fn has_bid(&self) -> bool {
        self.bidder.is_some()
    }
}

/// The persistent state of the auction house, stored in the first region of
/// the proxy storage.
///
/// New fields must never be inserted here: later layout versions append their
/// data after this region (see [`AuctionHouseExtension`]).
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, MaxSerializedLen, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct AuctionHouseState {
    pub is_initialized: bool,
    pub config: AuctionConfig,
    /// New auctions are only started while the house is not paused.
    pub is_paused: bool,
    pub auction: Option<Auction>,
}

impl AuctionHouseState {
    pub fn new(config: AuctionConfig) -> Self {
        Self {
            is_initialized: true,
            config,
            is_paused: true,
            auction: None,
        }
    }

    pub fn phase(&self, now: UnixTimestamp) -> AuctionPhase {
        self.auction
            .as_ref()
            .map_or(AuctionPhase::NoAuction, |auction| auction.phase(now))
    }

    /// Returns true if the current auction holds funds that are not settled
    /// yet.
    pub fn has_locked_bid(&self) -> bool {
        self.auction
            .as_ref()
            .map_or(false, |auction| !auction.settled && auction.has_bid())
    }
}

/// Refund that could not be pushed to an outbid bidder and waits to be
/// withdrawn.
#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, MaxSerializedLen, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct PendingReturn {
    pub bidder: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
}

/// Fungible reward issued to the winner of every settled auction.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct RewardConfig {
    /// Asset the reward is issued in. The house must be a registered issuer.
    pub token: Pubkey,
    /// The winner receives `amount / amount_divisor` of the reward token.
    pub amount_divisor: u64,
}

impl RewardConfig {
    pub fn reward_for(&self, amount: u64) -> u64 {
        amount.checked_div(self.amount_divisor).unwrap_or(0)
    }
}

/// Data appended after [`AuctionHouseState`] by the second layout version.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub struct AuctionHouseExtension {
    pub pending_returns: Vec<PendingReturn>,
    /// Winner reward, disabled if `None`.
    pub reward: Option<RewardConfig>,
}

impl AuctionHouseExtension {
    pub fn pending_return(&self, bidder: &Pubkey, asset: &Pubkey) -> u64 {
        self.pending_returns
            .iter()
            .find(|entry| &entry.bidder == bidder && &entry.asset == asset)
            .map_or(0, |entry| entry.amount)
    }

    pub fn credit(&mut self, bidder: Pubkey, asset: Pubkey, amount: u64) -> Option<()> {
        match self
            .pending_returns
            .iter_mut()
            .find(|entry| entry.bidder == bidder && entry.asset == asset)
        {
            Some(entry) => entry.amount = entry.amount.checked_add(amount)?,
            None => self.pending_returns.push(PendingReturn {
                bidder,
                asset,
                amount,
            }),
        }
        Some(())
    }

    /// Removes and returns every pending return of `bidder`.
    pub fn take(&mut self, bidder: &Pubkey) -> Vec<PendingReturn> {
        let (taken, kept): (Vec<_>, Vec<_>) = self
            .pending_returns
            .drain(..)
            .partition(|entry| &entry.bidder == bidder);
        self.pending_returns = kept;
        taken
    }
}
