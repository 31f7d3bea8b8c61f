use super::*;

pub fn process_create_bid(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    item_id: ItemId,
    amount: u64,
    policy: RefundPolicy,
) -> ProgramResult {
    let mut state = load_house_state(storage)?;
    let config = state.config;
    let auction = state
        .auction
        .as_mut()
        .ok_or(AuctionHouseError::NoActiveAuction)?;

    // Check status and bid amount
    check_biddable(auction, item_id, ctx.now)?;
    check_bid_amount(&config, auction, amount)?;

    let bidder = ctx.caller;
    ctx.payments.lock(&config.payment_asset, &bidder, amount)?;

    // Hand back the previous top bid
    if let Some(previous_bidder) = auction.bidder {
        return_bid(
            ctx,
            storage,
            policy,
            &config.payment_asset,
            &previous_bidder,
            auction.amount,
        )?;
    }

    auction.amount = amount;
    auction.bidder = Some(bidder);

    // Check if auction end time needs to be updated
    let extended_end = extended_end_time(auction, config.time_buffer, ctx.now)?;
    if let Some(end_time) = extended_end {
        auction.end_time = end_time;
    }

    ctx.emit(AuctionHouseEvent::AuctionBid {
        item_id,
        bidder,
        amount,
        extended: extended_end.is_some(),
    });
    if let Some(end_time) = extended_end {
        ctx.emit(AuctionHouseEvent::AuctionExtended { item_id, end_time });
    }

    storage.set_house_state(&state)
}

fn return_bid(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    policy: RefundPolicy,
    asset: &Pubkey,
    bidder: &Pubkey,
    amount: u64,
) -> ProgramResult {
    let result = ctx.payments.refund(asset, bidder, amount);
    match (result, policy) {
        (Ok(()), _) => Ok(()),
        (Err(e), RefundPolicy::Push) => {
            warn!("refund of {} to {} failed: {:?}", amount, bidder, e);
            Err(e)
        }
        (Err(e), RefundPolicy::Deferred) => {
            warn!(
                "refund of {} to {} failed: {:?}, keeping it as pending return",
                amount, bidder, e
            );
            let mut extension = storage.extension()?;
            extension
                .credit(*bidder, *asset, amount)
                .ok_or(AuctionHouseError::ArithmeticError)?;
            storage.set_extension(&extension)?;
            ctx.emit(AuctionHouseEvent::RefundDeferred {
                bidder: *bidder,
                asset: *asset,
                amount,
            });
            Ok(())
        }
    }
}
