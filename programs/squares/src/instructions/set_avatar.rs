use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{Board, PoolConfig};
use crate::utils::{avatar_glyph, AVATAR_COUNT};

#[derive(Accounts)]
pub struct SetAvatar<'info> {
    pub claimer: Signer<'info>,

    #[account(
        seeds = [PoolConfig::SEED],
        bump = pool_config.bump
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// Board address must match the one stored in pool_config
    #[account(
        mut,
        constraint = board.key() == pool_config.board @ SquaresError::Unauthorized
    )]
    pub board: AccountLoader<'info, Board>,
}

pub fn handler(ctx: Context<SetAvatar>, avatar: u8) -> Result<()> {
    require!(avatar < AVATAR_COUNT, SquaresError::InvalidAvatar);

    let claimer = ctx.accounts.claimer.key();
    let mut board = ctx.accounts.board.load_mut()?;

    require!(board.avatar_of(&claimer).is_some(), SquaresError::NothingClaimed);
    require!(
        !board.avatar_taken_by_other(&claimer, avatar),
        SquaresError::AvatarTaken
    );

    let updated = board.assign_avatar(&claimer, avatar);
    msg!(
        "Avatar for {} set to {} across {} cells",
        claimer,
        avatar_glyph(avatar),
        updated
    );
    Ok(())
}
