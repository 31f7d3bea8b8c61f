use super::*;

pub fn process_withdraw_pending_return(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
) -> ProgramResult {
    load_house_state(storage)?;

    let mut extension = storage.extension()?;
    let pending = extension.take(&ctx.caller);
    if pending.is_empty() {
        return Err(AuctionHouseError::NothingToWithdraw.into());
    }

    for entry in pending {
        ctx.payments
            .refund(&entry.asset, &entry.bidder, entry.amount)?;
        ctx.emit(AuctionHouseEvent::PendingReturnWithdrawn {
            bidder: entry.bidder,
            asset: entry.asset,
            amount: entry.amount,
        });
    }

    storage.set_extension(&extension)
}
