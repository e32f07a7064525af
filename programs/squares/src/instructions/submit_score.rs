use anchor_lang::prelude::*;

use crate::state::PlayerProfile;

#[derive(Accounts)]
pub struct SubmitScore<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        init_if_needed,
        payer = player,
        space = 8 + PlayerProfile::INIT_SPACE,
        seeds = [PlayerProfile::SEED, player.key().as_ref()],
        bump
    )]
    pub profile: Account<'info, PlayerProfile>,

    pub system_program: Program<'info, System>,
}

/// Catch mini-game result. The stored best only moves on strict improvement;
/// a worse or equal run is accepted but changes nothing.
pub fn catch_handler(ctx: Context<SubmitScore>, time_ms: u32) -> Result<()> {
    let player = ctx.accounts.player.key();
    let profile = &mut ctx.accounts.profile;
    profile.initialize_if_fresh(player, ctx.bumps.profile);

    if profile.record_catch_time(time_ms) {
        msg!("New catch best for {}: {} ms", player, time_ms);
    } else {
        msg!(
            "Catch run of {} ms did not beat {} ms",
            time_ms,
            profile.best_catch_ms
        );
    }
    Ok(())
}

/// Kicker mini-game result, same monotonic rule with higher-is-better.
pub fn kicker_handler(ctx: Context<SubmitScore>, score: u32) -> Result<()> {
    let player = ctx.accounts.player.key();
    let profile = &mut ctx.accounts.profile;
    profile.initialize_if_fresh(player, ctx.bumps.profile);

    if profile.record_kicker_score(score) {
        msg!("New kicker high score for {}: {}", player, score);
    } else {
        msg!(
            "Kicker score {} did not beat {}",
            score,
            profile.kicker_high_score
        );
    }
    Ok(())
}
