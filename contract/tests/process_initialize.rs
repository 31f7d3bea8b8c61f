mod test_factory;
use test_factory::*;

use auction_house_contract::events::AuctionHouseEvent;
use auction_house_contract::host::{ManualClock, NftLedger, Vault};
use auction_house_contract::instruction::factory::*;
use auction_house_contract::proxy::AuctionHouseProxy;
use auction_house_contract::AuctionHouseError;
use solana_program::pubkey::Pubkey;

use std::sync::Arc;

fn bare_proxy(admin: Pubkey) -> TestProxy {
    AuctionHouseProxy::new(
        Pubkey::new_unique(),
        admin,
        NftLedger::new(),
        Vault::new(),
        Arc::new(ManualClock::new(0)),
    )
}

#[test]
fn test_process_initialize() {
    let admin = Pubkey::new_unique();
    let user = Pubkey::new_unique();
    let mut proxy = bare_proxy(admin);
    proxy.upgrade_to(&admin, v1()).unwrap();

    // nothing works before initialization
    let error = proxy.forward(&admin, &pause()).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::NotInitialized);
    let error = proxy.auction_house_state().unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::NotInitialized);

    // only admins may initialize
    let config = test_config();
    let error = proxy.forward(&user, &initialize(config)).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::Unauthorized);
    assert!(proxy.storage().is_empty());

    // invalid config leaves the storage untouched
    let mut invalid_config = config;
    invalid_config.time_buffer = invalid_config.duration + 1;
    let error = proxy.forward(&admin, &initialize(invalid_config)).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::InvalidTimeBuffer);
    assert!(proxy.storage().is_empty());

    let events = proxy.forward(&admin, &initialize(config)).unwrap();
    assert_eq!(events, vec![AuctionHouseEvent::Initialized]);

    let state = proxy.auction_house_state().unwrap();
    assert!(state.is_initialized);
    assert!(state.is_paused);
    assert_eq!(state.config, config);
    assert!(state.auction.is_none());

    // initialization can only happen once
    let error = proxy.forward(&admin, &initialize(config)).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::AlreadyInitialized);
}

#[test]
fn test_deploy_initializes() {
    let mut house = TestHouse::deploy(v1());
    assert_eq!(house.proxy.implementation_version(), Some("v1"));

    let state = house.state();
    assert!(state.is_paused);
    assert_eq!(state.config, house.config);

    let admin = house.admin;
    let config = house.config;
    let error = house.forward(&admin, &initialize(config)).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::AlreadyInitialized);
}

#[test]
fn test_undecodable_instruction() {
    let mut house = TestHouse::deploy(v1());
    let admin = house.admin;

    let error = house.forward(&admin, &[]).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::InvalidInstruction);
    let error = house.forward(&admin, &[255, 1, 2]).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::InvalidInstruction);
}
