use super::*;

/// Re-mints every item of the current collection into `new_token` under the
/// same id and owner.
pub fn process_migrate_token_contract(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    new_token: Pubkey,
) -> ProgramResult {
    let mut state = load_house_state(storage)?;
    assert_admin(ctx)?;

    let previous = state.config.token;
    if ctx.tokens.total_minted(&new_token) != 0 {
        return Err(AuctionHouseError::TokenContractNotEmpty.into());
    }

    let items = ctx.tokens.total_minted(&previous);
    for item_id in 0..items {
        let owner = ctx.tokens.owner_of(&previous, item_id);
        let recipient = owner.unwrap_or(ctx.house);
        let minted = ctx.tokens.mint(&new_token, &ctx.house, &recipient)?;
        if minted != item_id {
            warn!("expected item #{}, got #{}", item_id, minted);
            return Err(AuctionHouseError::ItemSequenceMismatch.into());
        }
        // burned items are burned again to keep the sequence aligned
        if owner.is_none() {
            ctx.tokens.burn(&new_token, minted, &ctx.house)?;
        }
    }

    state.config.token = new_token;
    ctx.emit(AuctionHouseEvent::TokenContractMigrated {
        previous,
        current: new_token,
        items,
    });

    storage.set_house_state(&state)
}
