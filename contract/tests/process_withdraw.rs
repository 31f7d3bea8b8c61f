mod test_factory;
use test_factory::*;

use auction_house_contract::events::AuctionHouseEvent;
use auction_house_contract::host::HostError;
use auction_house_contract::instruction::factory::*;
use auction_house_contract::AuctionHouseError;
use solana_program::program_error::ProgramError;

#[test]
fn test_failed_refund_aborts_bid_in_v1() {
    let mut house = TestHouse::started(v1());
    let alice = house.new_bidder();
    let bob = house.new_bidder();

    house.bid(&alice, 1000).unwrap();
    house.proxy.payments_mut().freeze(&alice);

    let state_before = house.state();
    let storage_before = house.proxy.storage().clone();

    let error = house.bid(&bob, 1050).unwrap_err();
    assert_eq!(error, ProgramError::from(HostError::AccountFrozen));

    // the lock of the new bid is reverted too
    assert_eq!(house.balance(&bob), INITIAL_BALANCE);
    assert_eq!(house.balance(&alice), INITIAL_BALANCE - 1000);
    assert_eq!(house.escrow(), 1000);
    assert_eq!(house.state(), state_before);
    assert_eq!(house.proxy.storage(), &storage_before);
}

#[test]
fn test_process_withdraw_pending_return() {
    let mut house = TestHouse::started(v2());
    let alice = house.new_bidder();
    let bob = house.new_bidder();
    let asset = house.config.payment_asset;

    house.bid(&alice, 1000).unwrap();
    house.proxy.payments_mut().freeze(&alice);

    let events = house.bid(&bob, 1050).unwrap();
    assert_eq!(
        events[0],
        AuctionHouseEvent::RefundDeferred {
            bidder: alice,
            asset,
            amount: 1000,
        }
    );
    let auction = house.current_auction();
    assert_eq!(auction.bidder, Some(bob));
    assert_eq!(auction.amount, 1050);
    assert_eq!(house.escrow(), 2050);

    let extension = house.proxy.storage().extension().unwrap();
    assert_eq!(extension.pending_return(&alice, &asset), 1000);

    // payout fails while frozen, the entry stays
    let error = house.forward(&alice, &withdraw_pending_return()).unwrap_err();
    assert_eq!(error, ProgramError::from(HostError::AccountFrozen));
    let extension = house.proxy.storage().extension().unwrap();
    assert_eq!(extension.pending_return(&alice, &asset), 1000);

    house.proxy.payments_mut().thaw(&alice);
    let events = house.forward(&alice, &withdraw_pending_return()).unwrap();
    assert_eq!(
        events,
        vec![AuctionHouseEvent::PendingReturnWithdrawn {
            bidder: alice,
            asset,
            amount: 1000,
        }]
    );
    assert_eq!(house.balance(&alice), INITIAL_BALANCE);
    assert_eq!(house.escrow(), 1050);

    let error = house.forward(&alice, &withdraw_pending_return()).unwrap_err();
    assert_eq!(to_auction_error(error), AuctionHouseError::NothingToWithdraw);
}

#[test]
fn test_pending_returns_survive_downgrade() {
    let mut house = TestHouse::started(v2());
    let admin = house.admin;
    let alice = house.new_bidder();
    let bob = house.new_bidder();
    let asset = house.config.payment_asset;

    house.bid(&alice, 1000).unwrap();
    house.proxy.payments_mut().freeze(&alice);
    house.bid(&bob, 1050).unwrap();

    // v1 reads its own region and ignores the appended data
    house.proxy.upgrade_to(&admin, v1()).unwrap();
    assert_eq!(house.current_auction().bidder, Some(bob));
    house.warp_to(DURATION);
    house.settle().unwrap();

    house.proxy.upgrade_to(&admin, v2()).unwrap();
    house.proxy.payments_mut().thaw(&alice);
    house.forward(&alice, &withdraw_pending_return()).unwrap();
    assert_eq!(house.balance(&alice), INITIAL_BALANCE);
    assert_eq!(
        house.proxy.storage().extension().unwrap().pending_return(&alice, &asset),
        0
    );
}
