use super::*;

pub fn process_initialize(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    config: AuctionConfig,
) -> ProgramResult {
    assert_admin(ctx)?;

    if let Some(state) = storage.house_state()? {
        if state.is_initialized {
            return Err(AuctionHouseError::AlreadyInitialized.into());
        }
    }

    check_config(&config)?;

    // The house starts paused, the first auction begins on unpause
    storage.set_house_state(&AuctionHouseState::new(config))?;
    ctx.emit(AuctionHouseEvent::Initialized);

    Ok(())
}
