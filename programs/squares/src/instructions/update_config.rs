use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{PoolConfig, MAX_TEAM_NAME_LEN};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
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

pub fn handler(
    ctx: Context<UpdateConfig>,
    top_team: Option<String>,
    side_team: Option<String>,
    unit_price: Option<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.pool_config;

    if let Some(name) = top_team {
        require!(name.len() <= MAX_TEAM_NAME_LEN, SquaresError::NameTooLong);
        config.top_team = name;
        msg!("Updated top_team to {}", config.top_team);
    }

    if let Some(name) = side_team {
        require!(name.len() <= MAX_TEAM_NAME_LEN, SquaresError::NameTooLong);
        config.side_team = name;
        msg!("Updated side_team to {}", config.side_team);
    }

    if let Some(price) = unit_price {
        config.unit_price = price;
        msg!("Updated unit_price to {}", price);
    }

    Ok(())
}
