use super::create_auction::create_auction;
use super::*;

pub fn process_pause(ctx: &mut InvokeContext, storage: &mut ProxyStorage) -> ProgramResult {
    let mut state = load_house_state(storage)?;
    assert_admin(ctx)?;

    if state.is_paused {
        debug!("auction house is already paused");
        return Ok(());
    }

    state.is_paused = true;
    ctx.emit(AuctionHouseEvent::Paused);

    storage.set_house_state(&state)
}

pub fn process_unpause(ctx: &mut InvokeContext, storage: &mut ProxyStorage) -> ProgramResult {
    let mut state = load_house_state(storage)?;
    assert_admin(ctx)?;

    if !state.is_paused {
        debug!("auction house is not paused");
        return Ok(());
    }

    state.is_paused = false;
    ctx.emit(AuctionHouseEvent::Unpaused);

    let needs_auction = state
        .auction
        .as_ref()
        .map_or(true, |auction| auction.settled);
    if needs_auction {
        create_auction(ctx, &mut state)?;
    }

    storage.set_house_state(&state)
}
