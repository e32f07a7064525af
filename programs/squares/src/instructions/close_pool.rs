use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::PoolConfig;

#[derive(Accounts)]
pub struct ClosePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PoolConfig::SEED],
        bump = pool_config.bump,
        has_one = authority @ SquaresError::Unauthorized,
        close = authority,
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// Board account to close - must match pool_config.board
    /// CHECK: We verify this matches pool_config.board and manually close it
    #[account(
        mut,
        constraint = board.key() == pool_config.board @ SquaresError::Unauthorized,
    )]
    pub board: AccountInfo<'info>,
}

/// Tear down a finished pool and recover rent. The board is zero_copy, so it
/// is drained and zeroed manually; PoolConfig closes via the constraint.
pub fn handler(ctx: Context<ClosePool>) -> Result<()> {
    let board = &ctx.accounts.board;
    let board_lamports = board.lamports();

    msg!("Closing board account, recovering {} lamports", board_lamports);

    **board.try_borrow_mut_lamports()? = 0;
    **ctx.accounts.authority.try_borrow_mut_lamports()? = ctx
        .accounts
        .authority
        .lamports()
        .checked_add(board_lamports)
        .ok_or(SquaresError::Overflow)?;

    let mut data = board.try_borrow_mut_data()?;
    data.fill(0);

    msg!("Pool closed. All accounts released.");
    Ok(())
}
