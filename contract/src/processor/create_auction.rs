use super::*;

/// Mints the next item to the house and puts it up for bid.
pub fn create_auction(ctx: &mut InvokeContext, state: &mut AuctionHouseState) -> ProgramResult {
    if state.is_paused {
        return Err(AuctionHouseError::AuctionHousePaused.into());
    }
    if let Some(auction) = &state.auction {
        if !auction.settled {
            return Err(AuctionHouseError::AuctionStillActive.into());
        }
    }

    let start_time = ctx.now;
    let end_time = checked_add_time(start_time, state.config.duration)?;
    let item_id = ctx
        .tokens
        .mint(&state.config.token, &ctx.house, &ctx.house)?;

    state.auction = Some(Auction {
        item_id,
        amount: 0,
        bidder: None,
        start_time,
        end_time,
        settled: false,
    });

    ctx.emit(AuctionHouseEvent::AuctionCreated {
        item_id,
        start_time,
        end_time,
    });

    Ok(())
}
