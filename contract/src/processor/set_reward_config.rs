use super::*;

pub fn process_set_reward_config(
    ctx: &mut InvokeContext,
    storage: &mut ProxyStorage,
    reward: Option<RewardConfig>,
) -> ProgramResult {
    load_house_state(storage)?;
    assert_admin(ctx)?;

    if let Some(reward) = reward {
        if reward.amount_divisor == 0 {
            return Err(AuctionHouseError::InvalidRewardRate.into());
        }
    }

    let mut extension = storage.extension()?;
    extension.reward = reward;
    ctx.emit(AuctionHouseEvent::RewardConfigUpdated(reward));

    storage.set_extension(&extension)
}
