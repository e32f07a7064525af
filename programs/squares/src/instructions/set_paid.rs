use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{Board, PoolConfig};

#[derive(Accounts)]
pub struct SetPaid<'info> {
    #[account(
        constraint = authority.key() == pool_config.authority @ SquaresError::Unauthorized
    )]
    pub authority: Signer<'info>,

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

/// Flip payment status on every cell the player owns in one instruction, so
/// the per-identity ledger never observes a half-applied update.
pub fn handler(ctx: Context<SetPaid>, player: Pubkey, paid: bool) -> Result<()> {
    let mut board = ctx.accounts.board.load_mut()?;
    let updated = board.set_paid_for(&player, paid);
    require!(updated > 0, SquaresError::NothingClaimed);

    let amount = (updated as u64).saturating_mul(ctx.accounts.pool_config.unit_price);
    msg!(
        "Marked {} cells of {} as {} ({} due)",
        updated,
        player,
        if paid { "paid" } else { "unpaid" },
        amount
    );
    Ok(())
}
