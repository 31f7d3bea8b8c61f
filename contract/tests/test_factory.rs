use num_traits::FromPrimitive;

use solana_program::clock::UnixTimestamp;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

use auction_house_contract::events::AuctionHouseEvent;
use auction_house_contract::host::{ManualClock, NftLedger, TokenIssuance, Vault};
use auction_house_contract::instruction::factory::*;
use auction_house_contract::native_asset;
use auction_house_contract::processor::{AuctionHouseV1, AuctionHouseV2};
use auction_house_contract::proxy::{AuctionHouseProxy, Implementation};
use auction_house_contract::state::{Auction, AuctionConfig, AuctionHouseState};
use auction_house_contract::AuctionHouseError;
use auction_house_contract::ItemId;

use std::sync::Arc;

#[allow(unused)]
pub const DURATION: UnixTimestamp = 3600;
#[allow(unused)]
pub const TIME_BUFFER: UnixTimestamp = 300;
#[allow(unused)]
pub const RESERVE_PRICE: u64 = 1000;
#[allow(unused)]
pub const MIN_BID_INCREMENT_PERCENTAGE: u8 = 5;
#[allow(unused)]
pub const INITIAL_BALANCE: u64 = 1_000_000;

pub type TestProxy = AuctionHouseProxy<NftLedger, Vault>;

// For some reason the compiler always throws dead_code on this
#[allow(dead_code)]
pub fn to_auction_error(program_err: ProgramError) -> AuctionHouseError {
    match program_err {
        ProgramError::Custom(code) => FromPrimitive::from_u32(code).unwrap(),
        _ => unimplemented!(),
    }
}

#[allow(unused)]
pub fn v1() -> Arc<dyn Implementation> {
    Arc::new(AuctionHouseV1)
}

#[allow(unused)]
pub fn v2() -> Arc<dyn Implementation> {
    Arc::new(AuctionHouseV2)
}

pub fn test_config() -> AuctionConfig {
    AuctionConfig {
        token: Pubkey::new_unique(),
        payment_asset: native_asset(),
        treasury: Pubkey::new_unique(),
        time_buffer: TIME_BUFFER,
        reserve_price: RESERVE_PRICE,
        min_bid_increment_percentage: MIN_BID_INCREMENT_PERCENTAGE,
        duration: DURATION,
        burn_unsold_items: true,
    }
}

pub struct TestHouse {
    pub proxy: TestProxy,
    pub clock: ManualClock,
    pub admin: Pubkey,
    pub config: AuctionConfig,
}

#[allow(unused)]
impl TestHouse {
    /// Deployed and initialized at t = 0, still paused.
    pub fn deploy(implementation: Arc<dyn Implementation>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let address = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let config = test_config();
        let clock = ManualClock::new(0);

        let mut tokens = NftLedger::new();
        tokens.register_collection(config.token, address).unwrap();

        let proxy = AuctionHouseProxy::deploy(
            address,
            admin,
            tokens,
            Vault::new(),
            Arc::new(clock.clone()),
            implementation,
            config,
        )
        .unwrap();

        Self {
            proxy,
            clock,
            admin,
            config,
        }
    }

    /// Deployed and unpaused at t = 0, so item #0 is up for bid until
    /// t = DURATION.
    pub fn started(implementation: Arc<dyn Implementation>) -> Self {
        let mut house = Self::deploy(implementation);
        let admin = house.admin;
        house.forward(&admin, &unpause()).unwrap();
        house
    }

    pub fn forward(
        &mut self,
        caller: &Pubkey,
        instruction_data: &[u8],
    ) -> Result<Vec<AuctionHouseEvent>, ProgramError> {
        self.proxy.forward(caller, instruction_data)
    }

    pub fn address(&self) -> Pubkey {
        *self.proxy.address()
    }

    pub fn new_bidder(&mut self) -> Pubkey {
        self.new_bidder_with(INITIAL_BALANCE)
    }

    pub fn new_bidder_with(&mut self, balance: u64) -> Pubkey {
        let bidder = Pubkey::new_unique();
        self.proxy
            .payments_mut()
            .deposit(&self.config.payment_asset, &bidder, balance)
            .unwrap();
        bidder
    }

    pub fn bid(
        &mut self,
        bidder: &Pubkey,
        amount: u64,
    ) -> Result<Vec<AuctionHouseEvent>, ProgramError> {
        let item_id = self.current_auction().item_id;
        self.forward(bidder, &create_bid(item_id, amount))
    }

    pub fn settle(&mut self) -> Result<Vec<AuctionHouseEvent>, ProgramError> {
        let caller = Pubkey::new_unique();
        self.forward(&caller, &settle_current_and_create_new_auction())
    }

    pub fn warp_to(&self, timestamp: UnixTimestamp) {
        self.clock.warp_to(timestamp);
    }

    pub fn balance(&self, holder: &Pubkey) -> u64 {
        self.proxy
            .payments()
            .balance_of(&self.config.payment_asset, holder)
    }

    pub fn escrow(&self) -> u64 {
        self.proxy
            .payments()
            .escrow_balance(&self.config.payment_asset)
    }

    pub fn owner_of(&self, item_id: ItemId) -> Option<Pubkey> {
        let token = self.state().config.token;
        self.proxy.tokens().owner_of(&token, item_id)
    }

    pub fn state(&self) -> AuctionHouseState {
        self.proxy.auction_house_state().unwrap()
    }

    pub fn current_auction(&self) -> Auction {
        self.state().auction.unwrap()
    }
}
