mod create_auction;
mod create_bid;
mod initialize;
mod migrate_token_contract;
mod pause;
mod set_reward_config;
mod settle;
mod update_config;
mod withdraw;

use crate::assertions::*;
use crate::error::AuctionHouseError;
use crate::events::AuctionHouseEvent;
use crate::host::InvokeContext;
use crate::instruction::{AuctionInstruction, ConfigUpdate};
use crate::proxy::Implementation;
use crate::state::*;
use crate::storage::ProxyStorage;
use crate::ItemId;

use log::{debug, info, warn};
use solana_program::borsh::try_from_slice_unchecked;
use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

/// How the funds of an outbid bidder are handed back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefundPolicy {
    /// Refund immediately, a failed refund fails the new bid.
    Push,
    /// Refund immediately, a failed refund is kept as a pending return that
    /// the bidder withdraws later.
    Deferred,
}

/// First implementation: push refunds, no storage extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuctionHouseV1;

/// Second implementation: deferred refunds and pending return withdrawal,
/// token contract migration and the winner reward.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuctionHouseV2;

impl Implementation for AuctionHouseV1 {
    fn version(&self) -> &'static str {
        "v1"
    }

    fn process(
        &self,
        ctx: &mut InvokeContext,
        storage: &mut ProxyStorage,
        instruction_data: &[u8],
    ) -> ProgramResult {
        match decode(instruction_data)? {
            AuctionInstruction::WithdrawPendingReturn
            | AuctionInstruction::MigrateTokenContract { .. }
            | AuctionInstruction::SetRewardConfig { .. } => {
                warn!("instruction is not supported by {}", self.version());
                Err(AuctionHouseError::InvalidInstruction.into())
            }
            instruction => process_common(ctx, storage, instruction, RefundPolicy::Push),
        }
    }

    fn auction_house_state(&self, storage: &ProxyStorage) -> Result<AuctionHouseState, ProgramError> {
        load_house_state(storage)
    }
}

impl Implementation for AuctionHouseV2 {
    fn version(&self) -> &'static str {
        "v2"
    }

    fn process(
        &self,
        ctx: &mut InvokeContext,
        storage: &mut ProxyStorage,
        instruction_data: &[u8],
    ) -> ProgramResult {
        match decode(instruction_data)? {
            AuctionInstruction::WithdrawPendingReturn => {
                withdraw::process_withdraw_pending_return(ctx, storage)
            }
            AuctionInstruction::MigrateTokenContract { new_token } => {
                migrate_token_contract::process_migrate_token_contract(ctx, storage, new_token)
            }
            AuctionInstruction::SetRewardConfig { reward } => {
                set_reward_config::process_set_reward_config(ctx, storage, reward)
            }
            AuctionInstruction::SettleCurrentAndCreateNewAuction => {
                let reward = storage.extension()?.reward;
                settle::process_settle_current_and_create_new_auction(ctx, storage, reward)
            }
            instruction => process_common(ctx, storage, instruction, RefundPolicy::Deferred),
        }
    }

    fn auction_house_state(&self, storage: &ProxyStorage) -> Result<AuctionHouseState, ProgramError> {
        load_house_state(storage)
    }
}

fn decode(instruction_data: &[u8]) -> Result<AuctionInstruction, AuctionHouseError> {
    try_from_slice_unchecked(instruction_data).map_err(|e| {
        debug!("failed to decode instruction: {}", e);
        AuctionHouseError::InvalidInstruction
    })
}

fn process_common(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    instruction: AuctionInstruction,
    policy: RefundPolicy,
) -> ProgramResult {
    match instruction {
        AuctionInstruction::Initialize { config } => {
            initialize::process_initialize(ctx, storage, config)
        }
        AuctionInstruction::CreateBid { item_id, amount } => {
            create_bid::process_create_bid(ctx, storage, item_id, amount, policy)
        }
        AuctionInstruction::SettleCurrentAndCreateNewAuction => {
            settle::process_settle_current_and_create_new_auction(ctx, storage, None)
        }
        AuctionInstruction::Pause => pause::process_pause(ctx, storage),
        AuctionInstruction::Unpause => pause::process_unpause(ctx, storage),
        AuctionInstruction::UpdateConfig { update } => {
            update_config::process_update_config(ctx, storage, update)
        }
        AuctionInstruction::WithdrawPendingReturn
        | AuctionInstruction::MigrateTokenContract { .. }
        | AuctionInstruction::SetRewardConfig { .. } => {
            Err(AuctionHouseError::InvalidInstruction.into())
        }
    }
}

/// Reads the house state from region 0 of the storage.
pub fn load_house_state(storage: &ProxyStorage) -> Result<AuctionHouseState, ProgramError> {
    match storage.house_state()? {
        Some(state) if state.is_initialized => Ok(state),
        _ => Err(AuctionHouseError::NotInitialized.into()),
    }
}
