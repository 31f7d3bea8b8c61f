use super::create_auction::create_auction;
use super::*;

pub fn process_settle_current_and_create_new_auction(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    reward: Option<RewardConfig>,
) -> ProgramResult {
    let mut state = load_house_state(storage)?;
    let config = state.config;
    let auction = state
        .auction
        .as_mut()
        .ok_or(AuctionHouseError::NoActiveAuction)?;

    check_settleable(auction, ctx.now)?;
    auction.settled = true;

    let item_id = auction.item_id;
    let amount = auction.amount;
    let winner = auction.bidder;
    match winner {
        Some(winner) => {
            ctx.tokens
                .transfer(&config.token, item_id, &ctx.house, &winner)?;
            ctx.payments
                .settle(&config.payment_asset, &config.treasury, amount)?;
        }
        None if config.burn_unsold_items => {
            debug!("burning unsold item #{}", item_id);
            ctx.tokens.burn(&config.token, item_id, &ctx.house)?;
        }
        None => {
            debug!("sending unsold item #{} to the treasury", item_id);
            ctx.tokens
                .transfer(&config.token, item_id, &ctx.house, &config.treasury)?;
        }
    }

    ctx.emit(AuctionHouseEvent::AuctionSettled {
        item_id,
        winner,
        amount,
    });

    if let (Some(winner), Some(reward)) = (winner, reward) {
        let reward_amount = reward.reward_for(amount);
        if reward_amount > 0 {
            ctx.payments
                .issue(&reward.token, &ctx.house, &winner, reward_amount)?;
            ctx.emit(AuctionHouseEvent::RewardIssued {
                item_id,
                winner,
                token: reward.token,
                amount: reward_amount,
            });
        }
    }

    if state.is_paused {
        info!("auction house is paused, no new auction started");
    } else {
        create_auction(ctx, &mut state)?;
    }

    storage.set_house_state(&state)
}
