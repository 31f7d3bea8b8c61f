pub mod factory;

use crate::state::{AuctionConfig, RewardConfig};
use crate::ItemId;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::clock::UnixTimestamp;
use solana_program::pubkey::Pubkey;

#[cfg(feature = "client")]
use serde::{Deserialize, Serialize};

/// A single change of the [`AuctionConfig`].
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(Serialize, Deserialize))]
pub enum ConfigUpdate {
    TimeBuffer(UnixTimestamp),
    ReservePrice(u64),
    MinBidIncrementPercentage(u8),
    Duration(UnixTimestamp),
    Treasury(Pubkey),
    PaymentAsset(Pubkey),
    BurnUnsoldItems(bool),
}

impl ConfigUpdate {
    pub fn apply(&self, config: &mut AuctionConfig) {
        match *self {
            Self::TimeBuffer(time_buffer) => config.time_buffer = time_buffer,
            Self::ReservePrice(reserve_price) => config.reserve_price = reserve_price,
            Self::MinBidIncrementPercentage(percentage) => {
                config.min_bid_increment_percentage = percentage
            }
            Self::Duration(duration) => config.duration = duration,
            Self::Treasury(treasury) => config.treasury = treasury,
            Self::PaymentAsset(asset) => config.payment_asset = asset,
            Self::BurnUnsoldItems(burn) => config.burn_unsold_items = burn,
        }
    }
}

#[repr(C)]
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub enum AuctionInstruction {
    Initialize {
        config: AuctionConfig,
    },
    CreateBid {
        item_id: ItemId,
        amount: u64,
    },
    SettleCurrentAndCreateNewAuction,
    Pause,
    Unpause,
    UpdateConfig {
        update: ConfigUpdate,
    },
    // Available from the second implementation version
    WithdrawPendingReturn,
    MigrateTokenContract {
        new_token: Pubkey,
    },
    SetRewardConfig {
        reward: Option<RewardConfig>,
    },
}
