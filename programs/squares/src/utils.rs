use anchor_lang::prelude::*;

use crate::state::IDENTITY_DIGITS;

/// Fixed ordered glyph table. Avatars are stored on the board as indices
/// into this table, never as strings.
pub const AVATAR_GLYPHS: [&str; 100] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦆",
    "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋",
    "🐌", "🐞", "🐜", "🦟", "🦗", "🕷", "🦂", "🐢", "🐍", "🦎",
    "🦖", "🦕", "🐙", "🦑", "🦐", "🦞", "🦀", "🐡", "🐠", "🐟",
    "🐬", "🐳", "🐋", "🦈", "🐊", "🐅", "🐆", "🦓", "🦍", "🦧",
    "🐘", "🦛", "🦏", "🐪", "🐫", "🦒", "🦘", "🦬", "🐃", "🐂",
    "🐄", "🐎", "🐖", "🐏", "🐑", "🦙", "🐐", "🦌", "🐕", "🐩",
    "🦮", "🐈", "🐓", "🦃", "🦚", "🦜", "🦢", "🦩", "🕊", "🐇",
    "🦝", "🦨", "🦡", "🦦", "🦥", "🐁", "🐀", "🐿", "🦔", "⭐",
];

pub const AVATAR_COUNT: u8 = AVATAR_GLYPHS.len() as u8;

/// Placeholder avatar stored on a winner record when the winning cell is open
pub const UNCLAIMED_AVATAR: u8 = u8::MAX;

/// Payout split across Q1/Q2/Q3/Final, in basis points of the pot.
pub const QUARTER_PAYOUT_BPS: [u64; 4] = [1_000, 1_500, 2_500, 5_000];

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic default avatar: the same identity always hashes to the same
/// glyph. Collisions between identities are tolerated here; uniqueness is
/// only enforced on manual re-selection.
pub fn default_avatar(identity: &Pubkey) -> u8 {
    let hash = blake3::hash(identity.as_ref());
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(word) % AVATAR_GLYPHS.len() as u64) as u8
}

pub fn avatar_glyph(index: u8) -> &'static str {
    AVATAR_GLYPHS.get(index as usize).copied().unwrap_or("❓")
}

/// Avalanche mixer for seed material (xor-shift + odd multiplies)
fn mix(mut x: u64) -> u64 {
    x ^= x >> 32;
    x = x.wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x7fb5_d329_728e_a185);
    x ^= x >> 27;
    x
}

/// Fisher-Yates over the ten digits, driven by the mixed seed stream
fn shuffle_digits(seed: u64) -> [u8; 10] {
    let mut digits = IDENTITY_DIGITS;
    let mut state = seed;
    for i in (1..digits.len()).rev() {
        state = mix(state.wrapping_add(GOLDEN_GAMMA));
        let j = (state % (i as u64 + 1)) as usize;
        digits.swap(i, j);
    }
    digits
}

/// Produce independent column and row permutations from one seed. Both
/// results are always permutations of 0-9.
pub fn shuffle_number_pair(seed: u64) -> ([u8; 10], [u8; 10]) {
    let top = shuffle_digits(mix(seed));
    let side = shuffle_digits(mix(seed ^ GOLDEN_GAMMA));
    (top, side)
}

/// Position of `digit` within a number assignment
pub fn digit_position(numbers: &[u8; 10], digit: u8) -> Option<u8> {
    numbers.iter().position(|&n| n == digit).map(|i| i as u8)
}

/// Map a (NFC digit, AFC digit) score pair to the winning (row, col): the
/// column carries the NFC digit, the row carries the AFC digit.
pub fn resolve_cell(
    top_numbers: &[u8; 10],
    side_numbers: &[u8; 10],
    nfc_digit: u8,
    afc_digit: u8,
) -> Option<(u8, u8)> {
    let col = digit_position(top_numbers, nfc_digit)?;
    let row = digit_position(side_numbers, afc_digit)?;
    Some((row, col))
}

/// Split the pot across the four quarters. Integer division rounds each
/// payout down, so the sum never exceeds the pot.
pub fn quarter_payouts(pot: u64) -> [u64; 4] {
    let mut payouts = [0u64; 4];
    for (payout, bps) in payouts.iter_mut().zip(QUARTER_PAYOUT_BPS.iter()) {
        *payout = pot.saturating_mul(*bps) / 10_000;
    }
    payouts
}
