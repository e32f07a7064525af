use anchor_lang::prelude::*;

pub const GRID_SIZE: usize = 10;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// One grid position. A slot with `claimant == Pubkey::default()` is open;
/// anything else is claimed. Claims only exist as non-zero slots, so clearing
/// a slot is the unclaim.
#[zero_copy(unsafe)]
#[repr(C)]
pub struct CellSlot {
    pub claimant: Pubkey,
    /// Unix timestamp assigned from the Clock sysvar at claim time
    pub claimed_at: i64,
    /// Index into the avatar glyph table
    pub avatar: u8,
    /// 0 = unpaid, 1 = paid
    pub paid: u8,
    pub _padding: [u8; 6], // Align to 8 bytes
}

impl CellSlot {
    /// An open slot: all zeroes, same as freshly created account data
    pub const EMPTY: CellSlot = CellSlot {
        claimant: Pubkey::new_from_array([0u8; 32]),
        claimed_at: 0,
        avatar: 0,
        paid: 0,
        _padding: [0u8; 6],
    };

    pub fn is_claimed(&self) -> bool {
        self.claimant != Pubkey::default()
    }

    pub fn is_paid(&self) -> bool {
        self.paid != 0
    }

    pub fn clear(&mut self) {
        *self = CellSlot::EMPTY;
    }
}

/// The whole 10x10 grid in one account. Every mutating instruction updates it
/// in the same transaction, so a single fetch is always a consistent snapshot
/// of the pool.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct Board {
    pub cells: [CellSlot; TOTAL_CELLS],
    pub bump: u8,
    pub _padding: [u8; 7], // Align to 8 bytes
}

/// Per-claimant aggregate derived from the board: claim count, amount due at
/// the configured unit price, and payment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    pub claimant: Pubkey,
    pub cells: u32,
    pub amount_due: u64,
    /// True only when every cell of this claimant is paid. A mixed state
    /// (e.g. after a partial admin update) surfaces as unpaid.
    pub paid: bool,
}

impl Board {
    pub const SEED: &'static [u8] = b"board";

    pub const SIZE: usize = 8 + (48 * TOTAL_CELLS) + 1 + 7; // 4816 bytes

    pub fn cell_index(row: u8, col: u8) -> usize {
        (row as usize) * GRID_SIZE + (col as usize)
    }

    pub fn slot(&self, row: u8, col: u8) -> &CellSlot {
        &self.cells[Self::cell_index(row, col)]
    }

    pub fn slot_mut(&mut self, row: u8, col: u8) -> &mut CellSlot {
        &mut self.cells[Self::cell_index(row, col)]
    }

    /// The avatar a claimant already uses, if they hold any cell. An identity
    /// has exactly one avatar shared across all its cells.
    pub fn avatar_of(&self, player: &Pubkey) -> Option<u8> {
        self.cells
            .iter()
            .find(|s| s.claimant == *player)
            .map(|s| s.avatar)
    }

    /// Avatar for a new claim: reuse the avatar from the claimant's other
    /// cells so an identity keeps a single avatar; a first claim gets the
    /// stable default.
    pub fn avatar_for_claim(&self, player: &Pubkey) -> u8 {
        self.avatar_of(player)
            .unwrap_or_else(|| crate::utils::default_avatar(player))
    }

    /// Whether `avatar` is in use by any active claimant other than `player`.
    /// Self-reuse is always permitted.
    pub fn avatar_taken_by_other(&self, player: &Pubkey, avatar: u8) -> bool {
        self.cells
            .iter()
            .any(|s| s.is_claimed() && s.claimant != *player && s.avatar == avatar)
    }

    /// Apply `avatar` to every cell claimed by `player`. Returns the number
    /// of cells touched.
    pub fn assign_avatar(&mut self, player: &Pubkey, avatar: u8) -> u32 {
        let mut updated = 0u32;
        for slot in self.cells.iter_mut().filter(|s| s.claimant == *player) {
            slot.avatar = avatar;
            updated += 1;
        }
        updated
    }

    /// Flip payment status on every cell claimed by `player` in one pass.
    /// Returns the number of cells touched.
    pub fn set_paid_for(&mut self, player: &Pubkey, paid: bool) -> u32 {
        let mut updated = 0u32;
        for slot in self.cells.iter_mut().filter(|s| s.claimant == *player) {
            slot.paid = paid as u8;
            updated += 1;
        }
        updated
    }

    pub fn claimed_count(&self) -> u32 {
        self.cells.iter().filter(|s| s.is_claimed()).count() as u32
    }

    pub fn paid_count(&self) -> u32 {
        self.cells
            .iter()
            .filter(|s| s.is_claimed() && s.is_paid())
            .count() as u32
    }

    /// Total pot: paid cells times the unit price.
    pub fn pot(&self, unit_price: u64) -> u64 {
        (self.paid_count() as u64).saturating_mul(unit_price)
    }

    /// Group cells by claimant and derive the payment ledger.
    pub fn ledger(&self, unit_price: u64) -> Vec<LedgerEntry> {
        let mut entries: Vec<LedgerEntry> = Vec::new();
        for slot in self.cells.iter().filter(|s| s.is_claimed()) {
            match entries.iter_mut().find(|e| e.claimant == slot.claimant) {
                Some(entry) => {
                    entry.cells += 1;
                    entry.paid = entry.paid && slot.is_paid();
                }
                None => entries.push(LedgerEntry {
                    claimant: slot.claimant,
                    cells: 1,
                    amount_due: 0,
                    paid: slot.is_paid(),
                }),
            }
        }
        for entry in entries.iter_mut() {
            entry.amount_due = (entry.cells as u64).saturating_mul(unit_price);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> Board {
        Board {
            cells: [CellSlot::EMPTY; TOTAL_CELLS],
            bump: 0,
            _padding: [0u8; 7],
        }
    }

    fn claim(board: &mut Board, row: u8, col: u8, claimant: Pubkey, avatar: u8) {
        let slot = board.slot_mut(row, col);
        slot.claimant = claimant;
        slot.avatar = avatar;
        slot.paid = 0;
        slot.claimed_at = 1;
    }

    #[test]
    fn test_cell_index_row_major() {
        assert_eq!(Board::cell_index(0, 0), 0);
        assert_eq!(Board::cell_index(0, 9), 9);
        assert_eq!(Board::cell_index(7, 3), 73);
        assert_eq!(Board::cell_index(9, 9), 99);
    }

    #[test]
    fn test_slot_size_matches_account_size() {
        assert_eq!(std::mem::size_of::<CellSlot>(), 48);
        assert_eq!(8 + std::mem::size_of::<Board>(), Board::SIZE);
    }

    #[test]
    fn test_open_slot_is_unclaimed() {
        let board = empty_board();
        assert!(!board.slot(4, 4).is_claimed());
        assert_eq!(board.claimed_count(), 0);
        assert!(board.ledger(10).is_empty());
    }

    #[test]
    fn test_ledger_groups_by_claimant() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        claim(&mut board, 0, 0, alice, 3);
        claim(&mut board, 0, 1, alice, 3);
        claim(&mut board, 5, 5, alice, 3);
        claim(&mut board, 9, 9, bob, 7);

        let ledger = board.ledger(10);
        assert_eq!(ledger.len(), 2);

        let alice_entry = ledger.iter().find(|e| e.claimant == alice).unwrap();
        assert_eq!(alice_entry.cells, 3);
        assert_eq!(alice_entry.amount_due, 30);
        assert!(!alice_entry.paid);

        let bob_entry = ledger.iter().find(|e| e.claimant == bob).unwrap();
        assert_eq!(bob_entry.cells, 1);
        assert_eq!(bob_entry.amount_due, 10);
    }

    #[test]
    fn test_ledger_mixed_paid_state_surfaces_as_unpaid() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        claim(&mut board, 0, 0, alice, 3);
        claim(&mut board, 0, 1, alice, 3);
        board.slot_mut(0, 0).paid = 1;

        let ledger = board.ledger(10);
        assert!(!ledger[0].paid);

        board.slot_mut(0, 1).paid = 1;
        let ledger = board.ledger(10);
        assert!(ledger[0].paid);
    }

    #[test]
    fn test_set_paid_for_touches_all_cells() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        claim(&mut board, 1, 1, alice, 3);
        claim(&mut board, 2, 2, alice, 3);
        claim(&mut board, 3, 3, bob, 7);

        assert_eq!(board.set_paid_for(&alice, true), 2);
        assert!(board.slot(1, 1).is_paid());
        assert!(board.slot(2, 2).is_paid());
        assert!(!board.slot(3, 3).is_paid());
        assert_eq!(board.pot(10), 20);

        assert_eq!(board.set_paid_for(&alice, false), 2);
        assert_eq!(board.paid_count(), 0);
    }

    #[test]
    fn test_avatar_queries() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        assert_eq!(board.avatar_of(&alice), None);

        claim(&mut board, 0, 0, alice, 3);
        claim(&mut board, 0, 1, bob, 7);
        assert_eq!(board.avatar_of(&alice), Some(3));
        assert!(board.avatar_taken_by_other(&alice, 7));
        assert!(!board.avatar_taken_by_other(&alice, 3)); // self-reuse
        assert!(!board.avatar_taken_by_other(&alice, 42)); // unused glyph
    }

    #[test]
    fn test_avatar_for_claim_defaults_on_first_claim() {
        let board = empty_board();
        let alice = Pubkey::new_unique();
        assert_eq!(
            board.avatar_for_claim(&alice),
            crate::utils::default_avatar(&alice)
        );
    }

    #[test]
    fn test_avatar_for_claim_reuses_existing_avatar() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        // A manually chosen avatar, guaranteed different from the default
        let manual =
            (crate::utils::default_avatar(&alice) + 1) % crate::utils::AVATAR_COUNT;
        claim(&mut board, 0, 0, alice, manual);

        assert_eq!(board.avatar_for_claim(&alice), manual);
    }

    #[test]
    fn test_assign_avatar_propagates_to_every_cell() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        claim(&mut board, 0, 0, alice, 3);
        claim(&mut board, 4, 7, alice, 3);
        claim(&mut board, 9, 0, alice, 3);

        assert_eq!(board.assign_avatar(&alice, 55), 3);
        for slot in board.cells.iter().filter(|s| s.claimant == alice) {
            assert_eq!(slot.avatar, 55);
        }
    }

    #[test]
    fn test_clear_reopens_slot() {
        let mut board = empty_board();
        let alice = Pubkey::new_unique();
        claim(&mut board, 6, 2, alice, 3);
        assert!(board.slot(6, 2).is_claimed());

        board.slot_mut(6, 2).clear();
        assert!(!board.slot(6, 2).is_claimed());
        assert_eq!(board.slot(6, 2).claimed_at, 0);
    }
}
