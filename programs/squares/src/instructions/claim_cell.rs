use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{Board, PlayerProfile, PoolConfig, GRID_SIZE};
use crate::utils::avatar_glyph;

#[derive(Accounts)]
#[instruction(row: u8, col: u8)]
pub struct ClaimCell<'info> {
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

pub fn handler(ctx: Context<ClaimCell>, row: u8, col: u8) -> Result<()> {
    require!(
        (row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE,
        SquaresError::OutOfBounds
    );

    let claimer = ctx.accounts.claimer.key();
    ctx.accounts
        .profile
        .initialize_if_fresh(claimer, ctx.bumps.profile);

    let mut board = ctx.accounts.board.load_mut()?;

    // The occupied check and the write happen in the same transaction, so
    // two near-simultaneous claims on one cell cannot both land
    require!(!board.slot(row, col).is_claimed(), SquaresError::AlreadyClaimed);

    let avatar = board.avatar_for_claim(&claimer);

    let now = Clock::get()?.unix_timestamp;
    let slot = board.slot_mut(row, col);
    slot.claimant = claimer;
    slot.avatar = avatar;
    slot.paid = 0;
    slot.claimed_at = now;

    // This claim starts a fresh lifecycle for the cell: a confirmation armed
    // against the previous claim must not carry over
    ctx.accounts
        .profile
        .invalidate_pending(Board::cell_index(row, col) as u8);

    msg!(
        "Cell {}-{} claimed by {} as {}",
        row,
        col,
        claimer,
        avatar_glyph(avatar)
    );
    Ok(())
}
