use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::Quarter;

declare_id!("FBjqgE1Q7pHSaxhN9cKYdYci2W9dqrgmwNbFa8KxS4RT");

#[program]
pub mod squares {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        top_team: String,
        side_team: String,
        unit_price: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, top_team, side_team, unit_price)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        top_team: Option<String>,
        side_team: Option<String>,
        unit_price: Option<u64>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, top_team, side_team, unit_price)
    }

    pub fn randomize_numbers(ctx: Context<RandomizeNumbers>, seed: u64) -> Result<()> {
        instructions::randomize_numbers::handler(ctx, seed)
    }

    pub fn reset_numbers(ctx: Context<ResetNumbers>) -> Result<()> {
        instructions::reset_numbers::handler(ctx)
    }

    pub fn claim_cell(ctx: Context<ClaimCell>, row: u8, col: u8) -> Result<()> {
        instructions::claim_cell::handler(ctx, row, col)
    }

    pub fn unclaim_cell(ctx: Context<UnclaimCell>, row: u8, col: u8) -> Result<()> {
        instructions::unclaim_cell::handler(ctx, row, col)
    }

    pub fn set_avatar(ctx: Context<SetAvatar>, avatar: u8) -> Result<()> {
        instructions::set_avatar::handler(ctx, avatar)
    }

    pub fn set_quarter_winner(
        ctx: Context<SetQuarterWinner>,
        quarter: Quarter,
        nfc_digit: u8,
        afc_digit: u8,
    ) -> Result<()> {
        instructions::set_quarter_winner::handler(ctx, quarter, nfc_digit, afc_digit)
    }

    pub fn set_paid(ctx: Context<SetPaid>, player: Pubkey, paid: bool) -> Result<()> {
        instructions::set_paid::handler(ctx, player, paid)
    }

    pub fn release_cell(ctx: Context<ReleaseCell>, row: u8, col: u8) -> Result<()> {
        instructions::release_cell::handler(ctx, row, col)
    }

    pub fn close_pool(ctx: Context<ClosePool>) -> Result<()> {
        instructions::close_pool::handler(ctx)
    }

    pub fn submit_catch_time(ctx: Context<SubmitScore>, time_ms: u32) -> Result<()> {
        instructions::submit_score::catch_handler(ctx, time_ms)
    }

    pub fn submit_kicker_score(ctx: Context<SubmitScore>, score: u32) -> Result<()> {
        instructions::submit_score::kicker_handler(ctx, score)
    }
}
