//! Builders of serialized [`AuctionInstruction`]s that can be passed to
//! [`AuctionHouseProxy::forward`](crate::proxy::AuctionHouseProxy::forward).
use super::{AuctionInstruction, ConfigUpdate};
use crate::state::{AuctionConfig, RewardConfig};
use crate::ItemId;

use borsh::BorshSerialize;
use solana_program::pubkey::Pubkey;

fn encode(instruction: AuctionInstruction) -> Vec<u8> {
    instruction.try_to_vec().unwrap()
}

pub fn initialize(config: AuctionConfig) -> Vec<u8> {
    encode(AuctionInstruction::Initialize { config })
}

pub fn create_bid(item_id: ItemId, amount: u64) -> Vec<u8> {
    encode(AuctionInstruction::CreateBid { item_id, amount })
}

pub fn settle_current_and_create_new_auction() -> Vec<u8> {
    encode(AuctionInstruction::SettleCurrentAndCreateNewAuction)
}

pub fn pause() -> Vec<u8> {
    encode(AuctionInstruction::Pause)
}

pub fn unpause() -> Vec<u8> {
    encode(AuctionInstruction::Unpause)
}

pub fn update_config(update: ConfigUpdate) -> Vec<u8> {
    encode(AuctionInstruction::UpdateConfig { update })
}

pub fn withdraw_pending_return() -> Vec<u8> {
    encode(AuctionInstruction::WithdrawPendingReturn)
}

pub fn migrate_token_contract(new_token: Pubkey) -> Vec<u8> {
    encode(AuctionInstruction::MigrateTokenContract { new_token })
}

pub fn set_reward_config(reward: Option<RewardConfig>) -> Vec<u8> {
    encode(AuctionInstruction::SetRewardConfig { reward })
}
