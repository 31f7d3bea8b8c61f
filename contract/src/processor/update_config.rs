use super::*;

pub fn process_update_config(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    update: ConfigUpdate,
) -> ProgramResult {
    let mut state = load_house_state(storage)?;
    assert_admin(ctx)?;

    // Locked funds are refunded and settled in the asset they were paid in
    if matches!(update, ConfigUpdate::PaymentAsset(_)) && state.has_locked_bid() {
        return Err(AuctionHouseError::PaymentAssetLocked.into());
    }

    let mut config = state.config;
    update.apply(&mut config);
    check_config(&config)?;
    state.config = config;

    ctx.emit(AuctionHouseEvent::ConfigUpdated(update));

    storage.set_house_state(&state)
}
