use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{Board, PoolConfig, GRID_SIZE};

#[derive(Accounts)]
#[instruction(row: u8, col: u8)]
pub struct ReleaseCell<'info> {
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

/// Admin force-unclaim. Unlike self-service unclaim this bypasses the paid
/// lock and the confirmation step; it exists to clean up abandoned or
/// mistaken claims on behalf of players.
pub fn handler(ctx: Context<ReleaseCell>, row: u8, col: u8) -> Result<()> {
    require!(
        (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE,
        SquaresError::OutOfBounds
    );

    let mut board = ctx.accounts.board.load_mut()?;
    let slot = board.slot_mut(row, col);
    require!(slot.is_claimed(), SquaresError::CellUnclaimed);

    let prior = slot.claimant;
    slot.clear();

    msg!("Admin released cell {}-{} previously held by {}", row, col, prior);
    Ok(())
}
