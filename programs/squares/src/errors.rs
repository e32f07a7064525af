use anchor_lang::prelude::*;

#[error_code]
pub enum SquaresError {
    #[msg("Cell is already claimed")]
    AlreadyClaimed,

    #[msg("Cell coordinates out of bounds")]
    OutOfBounds,

    #[msg("Cell is not claimed")]
    CellUnclaimed,

    #[msg("Caller does not own this cell")]
    NotClaimant,

    #[msg("Paid cells are locked against self-service removal")]
    CellLocked,

    #[msg("Avatar is in use by another claimant")]
    AvatarTaken,

    #[msg("Avatar index outside the glyph table")]
    InvalidAvatar,

    #[msg("Caller has no claimed cells")]
    NothingClaimed,

    #[msg("Digit not present in the active number assignment")]
    DigitNotFound,

    #[msg("Team name too long")]
    NameTooLong,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    Overflow,
}
