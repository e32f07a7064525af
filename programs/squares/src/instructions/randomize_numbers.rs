use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::PoolConfig;
use crate::utils::shuffle_number_pair;

#[derive(Accounts)]
pub struct RandomizeNumbers<'info> {
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
}

/// Shuffle both axes. Meant to be run once just before kickoff, but the
/// admin may re-run it; only `reset_numbers` clears the randomized flag.
pub fn handler(ctx: Context<RandomizeNumbers>, seed: u64) -> Result<()> {
    let clock = Clock::get()?;
    // Fold in clock state so replaying the same admin seed across games
    // still produces a fresh draw
    let entropy = seed ^ (clock.unix_timestamp as u64) ^ clock.slot.rotate_left(32);

    let config = &mut ctx.accounts.pool_config;
    let (top, side) = shuffle_number_pair(entropy);
    config.top_numbers = top;
    config.side_numbers = side;
    config.numbers_randomized = true;

    msg!(
        "Numbers randomized: top {:?}, side {:?}",
        config.top_numbers,
        config.side_numbers
    );
    Ok(())
}
