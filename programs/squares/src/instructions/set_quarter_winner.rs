use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{Board, PoolConfig, Quarter, QuarterWinner};
use crate::utils::{avatar_glyph, resolve_cell, UNCLAIMED_AVATAR};

#[derive(Accounts)]
pub struct SetQuarterWinner<'info> {
    #[account(
        constraint = authority.key() == pool_config.authority @ SquaresError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PoolConfig::SEED],
        bump = pool_config.bump
    )]
    pub pool_config: Account<'info, PoolConfig>,

    /// Board address must match the one stored in pool_config
    #[account(
        constraint = board.key() == pool_config.board @ SquaresError::Unauthorized
    )]
    pub board: AccountLoader<'info, Board>,
}

/// Record the winning cell for one quarter from the last digit of each
/// team's score. Re-entering the same quarter overwrites the prior record;
/// quarters may be set in any order.
pub fn handler(
    ctx: Context<SetQuarterWinner>,
    quarter: Quarter,
    nfc_digit: u8,
    afc_digit: u8,
) -> Result<()> {
    let config = &mut ctx.accounts.pool_config;

    // Cannot fail while the assignments are valid permutations, but a digit
    // outside 0-9 must still be rejected without mutating anything
    let (row, col) = resolve_cell(&config.top_numbers, &config.side_numbers, nfc_digit, afc_digit)
        .ok_or(SquaresError::DigitNotFound)?;

    let board = ctx.accounts.board.load()?;
    let slot = board.slot(row, col);
    let record = QuarterWinner {
        set: true,
        nfc_digit,
        afc_digit,
        row,
        col,
        claimant: slot.claimant,
        avatar: if slot.is_claimed() {
            slot.avatar
        } else {
            UNCLAIMED_AVATAR
        },
    };
    drop(board);

    config.record_winner(quarter, record);

    if record.is_unclaimed() {
        msg!(
            "{} winner: cell {}-{} (score {}-{}) is unclaimed",
            quarter.label(),
            row,
            col,
            nfc_digit,
            afc_digit
        );
    } else {
        msg!(
            "{} winner: cell {}-{} (score {}-{}) claimed by {} {}",
            quarter.label(),
            row,
            col,
            nfc_digit,
            afc_digit,
            record.claimant,
            avatar_glyph(record.avatar)
        );
    }
    Ok(())
}
