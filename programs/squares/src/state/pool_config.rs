use anchor_lang::prelude::*;

pub const IDENTITY_DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
pub const NUM_QUARTERS: usize = 4;
pub const MAX_TEAM_NAME_LEN: usize = 32;

/// Price per claimed cell, in whole currency units.
pub const DEFAULT_UNIT_PRICE: u64 = 10;
pub const DEFAULT_TOP_TEAM: &str = "NFC Team";
pub const DEFAULT_SIDE_TEAM: &str = "AFC Team";

/// One scoring checkpoint at which a winning cell is determined from the
/// last digit of each team's score.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Final,
}

impl Quarter {
    pub const fn index(self) -> usize {
        match self {
            Quarter::Q1 => 0,
            Quarter::Q2 => 1,
            Quarter::Q3 => 2,
            Quarter::Final => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Final => "Final",
        }
    }
}

/// Recorded outcome for one quarter. `claimant == Pubkey::default()` means
/// the winning cell was open when the score was entered.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuarterWinner {
    pub set: bool,
    pub nfc_digit: u8,
    pub afc_digit: u8,
    pub row: u8,
    pub col: u8,
    pub claimant: Pubkey,
    pub avatar: u8,
}

impl QuarterWinner {
    pub fn is_unclaimed(&self) -> bool {
        self.claimant == Pubkey::default()
    }
}

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    /// Pool admin: the only signer allowed to rename teams, randomize
    /// numbers, enter winners, and mark payments
    pub authority: Pubkey,
    /// Address of the Board account
    pub board: Pubkey,
    #[max_len(32)]
    pub top_team: String,
    #[max_len(32)]
    pub side_team: String,
    pub unit_price: u64,
    /// Digit assigned to each column. Always a permutation of 0-9.
    pub top_numbers: [u8; 10],
    /// Digit assigned to each row. Always a permutation of 0-9.
    pub side_numbers: [u8; 10],
    pub numbers_randomized: bool,
    pub winners: [QuarterWinner; NUM_QUARTERS],
    pub bump: u8,
    pub _reserved: [u8; 64],
}

impl PoolConfig {
    pub const SEED: &'static [u8] = b"pool_config";

    pub fn record_winner(&mut self, quarter: Quarter, record: QuarterWinner) {
        self.winners[quarter.index()] = record;
    }

    pub fn winner(&self, quarter: Quarter) -> &QuarterWinner {
        &self.winners[quarter.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> PoolConfig {
        PoolConfig {
            authority: Pubkey::new_unique(),
            board: Pubkey::new_unique(),
            top_team: DEFAULT_TOP_TEAM.to_string(),
            side_team: DEFAULT_SIDE_TEAM.to_string(),
            unit_price: DEFAULT_UNIT_PRICE,
            top_numbers: IDENTITY_DIGITS,
            side_numbers: IDENTITY_DIGITS,
            numbers_randomized: false,
            winners: [QuarterWinner::default(); NUM_QUARTERS],
            bump: 255,
            _reserved: [0u8; 64],
        }
    }

    #[test]
    fn test_winners_start_unset() {
        let config = default_config();
        for quarter in [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Final] {
            assert!(!config.winner(quarter).set);
        }
    }

    #[test]
    fn test_record_winner_is_idempotent() {
        let mut config = default_config();
        let record = QuarterWinner {
            set: true,
            nfc_digit: 3,
            afc_digit: 7,
            row: 7,
            col: 3,
            claimant: Pubkey::new_unique(),
            avatar: 12,
        };

        config.record_winner(Quarter::Q1, record);
        let first = *config.winner(Quarter::Q1);
        config.record_winner(Quarter::Q1, record);
        assert_eq!(*config.winner(Quarter::Q1), first);
    }

    #[test]
    fn test_record_winner_overwrites_prior_entry() {
        let mut config = default_config();
        let first = QuarterWinner {
            set: true,
            nfc_digit: 0,
            afc_digit: 0,
            row: 0,
            col: 0,
            claimant: Pubkey::new_unique(),
            avatar: 1,
        };
        let second = QuarterWinner {
            set: true,
            nfc_digit: 4,
            afc_digit: 2,
            row: 2,
            col: 4,
            claimant: Pubkey::default(),
            avatar: u8::MAX,
        };

        config.record_winner(Quarter::Final, first);
        config.record_winner(Quarter::Final, second);
        assert_eq!(*config.winner(Quarter::Final), second);
        assert!(config.winner(Quarter::Final).is_unclaimed());
        // Other quarters untouched
        assert!(!config.winner(Quarter::Q2).set);
    }
}
