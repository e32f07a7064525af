use anchor_lang::prelude::*;

/// Per-player state: the unclaim confirmation target and the mini-game
/// leaderboard records. Created lazily the first time a player needs it.
///
/// PDA: ["profile", player]
#[account]
#[derive(InitSpace)]
pub struct PlayerProfile {
    pub player: Pubkey,
    /// Cell index (0-99) awaiting a second unclaim call, or NO_PENDING
    pub pending_unclaim: u8,
    /// Best catch-game completion time in milliseconds, lower is better.
    /// NO_CATCH_TIME until the first run is recorded.
    pub best_catch_ms: u32,
    /// Kicker-game high score, higher is better. 0 until the first run.
    pub kicker_high_score: u32,
    pub bump: u8,
}

impl PlayerProfile {
    pub const SEED: &'static [u8] = b"profile";

    pub const NO_PENDING: u8 = u8::MAX;
    pub const NO_CATCH_TIME: u32 = u32::MAX;

    /// init_if_needed hands us a zeroed account on first use; the zero values
    /// for `pending_unclaim` and `best_catch_ms` are valid data, so the
    /// sentinels must be written before the first transition.
    pub fn initialize_if_fresh(&mut self, player: Pubkey, bump: u8) {
        if self.player == Pubkey::default() {
            self.player = player;
            self.pending_unclaim = Self::NO_PENDING;
            self.best_catch_ms = Self::NO_CATCH_TIME;
            self.kicker_high_score = 0;
            self.bump = bump;
        }
    }

    /// Two-step unclaim confirmation. The first call for a cell records it as
    /// pending and returns false; a second call for the same cell confirms
    /// and returns true. A call for a different cell re-targets the pending
    /// state without confirming the old one.
    pub fn confirm_unclaim(&mut self, cell_index: u8) -> bool {
        if self.pending_unclaim == cell_index {
            self.pending_unclaim = Self::NO_PENDING;
            true
        } else {
            self.pending_unclaim = cell_index;
            false
        }
    }

    /// Drop a pending confirmation aimed at `cell_index`. Called when the
    /// cell's claim lifecycle restarts (a fresh claim on that cell), so a
    /// confirmation armed against an earlier claim can never delete the new
    /// one on a single call.
    pub fn invalidate_pending(&mut self, cell_index: u8) {
        if self.pending_unclaim == cell_index {
            self.pending_unclaim = Self::NO_PENDING;
        }
    }

    /// Record a catch-game run; overwrites only on strict improvement.
    pub fn record_catch_time(&mut self, time_ms: u32) -> bool {
        if time_ms < self.best_catch_ms {
            self.best_catch_ms = time_ms;
            true
        } else {
            false
        }
    }

    /// Record a kicker-game run; overwrites only on strict improvement.
    pub fn record_kicker_score(&mut self, score: u32) -> bool {
        if score > self.kicker_high_score {
            self.kicker_high_score = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_profile() -> PlayerProfile {
        let mut profile = PlayerProfile {
            player: Pubkey::default(),
            pending_unclaim: 0,
            best_catch_ms: 0,
            kicker_high_score: 0,
            bump: 0,
        };
        profile.initialize_if_fresh(Pubkey::new_unique(), 254);
        profile
    }

    #[test]
    fn test_fresh_profile_has_sentinels() {
        let profile = fresh_profile();
        assert_eq!(profile.pending_unclaim, PlayerProfile::NO_PENDING);
        assert_eq!(profile.best_catch_ms, PlayerProfile::NO_CATCH_TIME);
        assert_eq!(profile.kicker_high_score, 0);
    }

    #[test]
    fn test_initialize_if_fresh_does_not_reset_existing_state() {
        let mut profile = fresh_profile();
        let player = profile.player;
        profile.pending_unclaim = 42;
        profile.initialize_if_fresh(player, 254);
        assert_eq!(profile.pending_unclaim, 42);
    }

    #[test]
    fn test_single_unclaim_call_never_confirms() {
        let mut profile = fresh_profile();
        assert!(!profile.confirm_unclaim(0));
        assert_eq!(profile.pending_unclaim, 0);
    }

    #[test]
    fn test_second_call_for_same_cell_confirms() {
        let mut profile = fresh_profile();
        assert!(!profile.confirm_unclaim(73));
        assert!(profile.confirm_unclaim(73));
        assert_eq!(profile.pending_unclaim, PlayerProfile::NO_PENDING);
        // The machine is back to idle: the next request starts over
        assert!(!profile.confirm_unclaim(73));
    }

    #[test]
    fn test_different_cell_retargets_without_confirming() {
        let mut profile = fresh_profile();
        assert!(!profile.confirm_unclaim(10)); // pending: cell A
        assert!(!profile.confirm_unclaim(20)); // switch to cell B, no delete
        assert_eq!(profile.pending_unclaim, 20);
        assert!(profile.confirm_unclaim(20));
    }

    #[test]
    fn test_reclaimed_cell_requires_fresh_confirmation() {
        let mut profile = fresh_profile();
        assert!(!profile.confirm_unclaim(73)); // armed against the old claim
        profile.invalidate_pending(73); // cell released, then claimed anew
        assert!(!profile.confirm_unclaim(73)); // first call arms, never deletes
        assert!(profile.confirm_unclaim(73));
    }

    #[test]
    fn test_invalidate_pending_ignores_other_cells() {
        let mut profile = fresh_profile();
        assert!(!profile.confirm_unclaim(10));
        profile.invalidate_pending(20);
        assert_eq!(profile.pending_unclaim, 10);
        assert!(profile.confirm_unclaim(10));
    }

    #[test]
    fn test_catch_time_improves_only_when_strictly_lower() {
        let mut profile = fresh_profile();
        assert!(profile.record_catch_time(5_000));
        assert!(!profile.record_catch_time(5_000));
        assert!(!profile.record_catch_time(6_000));
        assert!(profile.record_catch_time(4_999));
        assert_eq!(profile.best_catch_ms, 4_999);
    }

    #[test]
    fn test_kicker_score_improves_only_when_strictly_higher() {
        let mut profile = fresh_profile();
        assert!(profile.record_kicker_score(10));
        assert!(!profile.record_kicker_score(10));
        assert!(!profile.record_kicker_score(3));
        assert!(profile.record_kicker_score(11));
        assert_eq!(profile.kicker_high_score, 11);
    }
}
