mod clock;
mod nft_ledger;
mod vault;

pub use clock::{Clock, ManualClock};
pub use nft_ledger::NftLedger;
pub use vault::Vault;

use crate::events::AuctionHouseEvent;
use crate::ItemId;

use log::info;
use num_derive::FromPrimitive;
use solana_program::clock::UnixTimestamp;
use solana_program::entrypoint::ProgramResult;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

/// Errors raised by the in-memory collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive)]
pub enum HostError {
    UnknownCollection = 600,
    CollectionAlreadyExists = 601,
    NotMinter = 602,
    UnknownItem = 603,
    NotItemOwner = 604,
    AccountFrozen = 605,
    InsufficientEscrow = 606,
    BalanceOverflow = 607,
    NotIssuer = 608,
}

impl From<HostError> for ProgramError {
    fn from(e: HostError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/// Decides who may pause, reconfigure and upgrade the auction house.
pub trait Authority {
    fn is_admin(&self, address: &Pubkey) -> bool;
}

/// Companion NFT contract(s) issuing the auctioned items.
///
/// Item ids are issued sequentially per collection, starting from zero.
pub trait TokenIssuance {
    fn mint(&mut self, contract: &Pubkey, minter: &Pubkey, to: &Pubkey)
        -> Result<ItemId, ProgramError>;
    fn transfer(
        &mut self,
        contract: &Pubkey,
        item_id: ItemId,
        from: &Pubkey,
        to: &Pubkey,
    ) -> ProgramResult;
    fn burn(&mut self, contract: &Pubkey, item_id: ItemId, owner: &Pubkey) -> ProgramResult;
    fn owner_of(&self, contract: &Pubkey, item_id: ItemId) -> Option<Pubkey>;
    /// Number of items ever minted in `contract`, burned ones included.
    fn total_minted(&self, contract: &Pubkey) -> u64;
}

/// Asset the bids are paid in. Locked funds are held in escrow until they
/// are refunded to the bidder or settled to the treasury.
pub trait PaymentAsset {
    fn lock(&mut self, asset: &Pubkey, from: &Pubkey, amount: u64) -> ProgramResult;
    fn refund(&mut self, asset: &Pubkey, to: &Pubkey, amount: u64) -> ProgramResult;
    fn settle(&mut self, asset: &Pubkey, to: &Pubkey, amount: u64) -> ProgramResult;
    /// Creates `amount` of `asset` for `to`, only allowed to the issuer of
    /// the asset.
    fn issue(&mut self, asset: &Pubkey, issuer: &Pubkey, to: &Pubkey, amount: u64)
        -> ProgramResult;
}

/// Everything an implementation may touch while processing one instruction.
pub struct InvokeContext<'a> {
    /// Account that sent the instruction.
    pub caller: Pubkey,
    /// Address of the proxy, custodian of the auctioned items.
    pub house: Pubkey,
    pub now: UnixTimestamp,
    pub authority: &'a dyn Authority,
    pub tokens: &'a mut dyn TokenIssuance,
    pub payments: &'a mut dyn PaymentAsset,
    events: Vec<AuctionHouseEvent>,
}

impl<'a> InvokeContext<'a> {
    pub fn new(
        caller: Pubkey,
        house: Pubkey,
        now: UnixTimestamp,
        authority: &'a dyn Authority,
        tokens: &'a mut dyn TokenIssuance,
        payments: &'a mut dyn PaymentAsset,
    ) -> Self {
        Self {
            caller,
            house,
            now,
            authority,
            tokens,
            payments,
            events: Vec::new(),
        }
    }

    pub fn caller_is_admin(&self) -> bool {
        self.authority.is_admin(&self.caller)
    }

    pub fn emit(&mut self, event: AuctionHouseEvent) {
        info!("{:?}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[AuctionHouseEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<AuctionHouseEvent> {
        self.events
    }
}
