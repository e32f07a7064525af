use anchor_lang::prelude::*;

use crate::errors::SquaresError;
use crate::state::{
    Board, PoolConfig, QuarterWinner, DEFAULT_SIDE_TEAM, DEFAULT_TOP_TEAM, DEFAULT_UNIT_PRICE,
    IDENTITY_DIGITS, MAX_TEAM_NAME_LEN, NUM_QUARTERS,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + PoolConfig::INIT_SPACE,
        seeds = [PoolConfig::SEED],
        bump
    )]
    pub pool_config: Account<'info, PoolConfig>,

    #[account(
        init,
        payer = authority,
        space = Board::SIZE,
        seeds = [Board::SEED],
        bump
    )]
    pub board: AccountLoader<'info, Board>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    top_team: String,
    side_team: String,
    unit_price: u64,
) -> Result<()> {
    require!(top_team.len() <= MAX_TEAM_NAME_LEN, SquaresError::NameTooLong);
    require!(side_team.len() <= MAX_TEAM_NAME_LEN, SquaresError::NameTooLong);

    {
        let mut board = ctx.accounts.board.load_init()?;
        board.bump = ctx.bumps.board;
        // cells array is already zeroed from account creation: every slot open
    }

    let config = &mut ctx.accounts.pool_config;
    config.authority = ctx.accounts.authority.key();
    config.board = ctx.accounts.board.key();
    config.top_team = if top_team.is_empty() {
        DEFAULT_TOP_TEAM.to_string()
    } else {
        top_team
    };
    config.side_team = if side_team.is_empty() {
        DEFAULT_SIDE_TEAM.to_string()
    } else {
        side_team
    };
    config.unit_price = if unit_price == 0 {
        DEFAULT_UNIT_PRICE
    } else {
        unit_price
    };
    config.top_numbers = IDENTITY_DIGITS;
    config.side_numbers = IDENTITY_DIGITS;
    config.numbers_randomized = false;
    config.winners = [QuarterWinner::default(); NUM_QUARTERS];
    config.bump = ctx.bumps.pool_config;
    config._reserved = [0u8; 64];

    msg!(
        "Pool initialized: {} x {}, {} per cell",
        config.top_team,
        config.side_team,
        config.unit_price
    );
    Ok(())
}
