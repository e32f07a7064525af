use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{PoolConfig, IDENTITY_DIGITS};

#[derive(Accounts)]
pub struct ResetNumbers<'info> {
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

pub fn handler(ctx: Context<ResetNumbers>) -> Result<()> {
    let config = &mut ctx.accounts.pool_config;
    config.top_numbers = IDENTITY_DIGITS;
    config.side_numbers = IDENTITY_DIGITS;
    config.numbers_randomized = false;

    msg!("Numbers reset to 0-9 in order");
    Ok(())
}
