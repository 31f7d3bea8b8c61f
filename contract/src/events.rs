use crate::instruction::ConfigUpdate;
use crate::state::RewardConfig;
use crate::ItemId;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub enum AuctionHouseEvent {
    Initialized,
    AuctionCreated {
        item_id: ItemId,
        start_time: UnixTimestamp,
        end_time: UnixTimestamp,
    },
    AuctionBid {
        item_id: ItemId,
        bidder: Pubkey,
        amount: u64,
        /// The bid arrived within the time buffer and pushed the end time.
        extended: bool,
    },
    AuctionExtended {
        item_id: ItemId,
        end_time: UnixTimestamp,
    },
    AuctionSettled {
        item_id: ItemId,
        winner: Option<Pubkey>,
        amount: u64,
    },
    Paused,
    Unpaused,
    ConfigUpdated(ConfigUpdate),
    /// Refunding an outbid bidder failed, the amount is kept for withdrawal.
    RefundDeferred {
        bidder: Pubkey,
        asset: Pubkey,
        amount: u64,
    },
    PendingReturnWithdrawn {
        bidder: Pubkey,
        asset: Pubkey,
        amount: u64,
    },
    TokenContractMigrated {
        previous: Pubkey,
        current: Pubkey,
        items: u64,
    },
    RewardConfigUpdated(Option<RewardConfig>),
    RewardIssued {
        item_id: ItemId,
        winner: Pubkey,
        token: Pubkey,
        amount: u64,
    },
}
