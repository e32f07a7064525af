use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{Board, PlayerProfile, PoolConfig, GRID_SIZE};

#[derive(Accounts)]
#[instruction(row: u8, col: u8)]
pub struct UnclaimCell<'info> {
    #[account(mut)]
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

    #[account(
        init_if_needed,
        payer = claimer,
        space = 8 + PlayerProfile::INIT_SPACE,
        seeds = [PlayerProfile::SEED, claimer.key().as_ref()],
        bump
    )]
    pub profile: Account<'info, PlayerProfile>,

    pub system_program: Program<'info, System>,
}

/// Releasing a cell takes two calls: the first records the cell as pending
/// and mutates nothing, the second (for the same cell) deletes the claim.
/// A single misclick can never discard a position.
pub fn handler(ctx: Context<UnclaimCell>, row: u8, col: u8) -> Result<()> {
    require!(
        (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE,
        SquaresError::OutOfBounds
    );

    let claimer = ctx.accounts.claimer.key();
    ctx.accounts
        .profile
        .initialize_if_fresh(claimer, ctx.bumps.profile);

    let mut board = ctx.accounts.board.load_mut()?;
    let slot = *board.slot(row, col);
    require!(slot.is_claimed(), SquaresError::CellUnclaimed);
    require_keys_eq!(slot.claimant, claimer, SquaresError::NotClaimant);
    require!(!slot.is_paid(), SquaresError::CellLocked);

    let cell_index = Board::cell_index(row, col) as u8;
    if ctx.accounts.profile.confirm_unclaim(cell_index) {
        board.slot_mut(row, col).clear();
        msg!("Cell {}-{} released by {}", row, col, claimer);
    } else {
        msg!(
            "Unclaim of cell {}-{} is pending; call again to confirm",
            row,
            col
        );
    }
    Ok(())
}
