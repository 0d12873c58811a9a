use anchor_lang::prelude::*;

#[error_code]
pub enum RouletteError {
    // Wire-stable engine codes (0 - 5)
    #[msg("Bet amount is outside the round's min/max limits")]
    InvalidCoinValue = 0,

    #[msg("Bet amount exceeds the round's remaining budget")]
    RoundNotAvailable = 1,

    #[msg("Pool balance is insufficient for this operation")]
    InsufficientPool = 2,

    #[msg("Round is closed for betting")]
    RoundClosed = 3,

    #[msg("Player has already placed a bet in this round")]
    AlreadyPlaced = 4,

    #[msg("Round betting window has not elapsed yet")]
    RoundNotFinished = 5,

    // Authorization & configuration (0x100 - 0x1FF)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x100,

    #[msg("Wheel size must be between 2 and 64")]
    InvalidWheelSize = 0x101,

    #[msg("Beacon public key is not a valid BLS12-381 G1 element")]
    InvalidBeaconKey = 0x102,

    #[msg("Minimum bet must be positive and not exceed the maximum")]
    InvalidBetLimits = 0x103,

    #[msg("Betting period must be greater than zero")]
    InvalidPeriod = 0x104,

    #[msg("Token mint does not match program configuration")]
    InvalidMint = 0x105,

    // Bet admission (0x200 - 0x2FF)
    #[msg("Bet values must be non-empty, distinct and within the wheel range")]
    InvalidBetValues = 0x200,

    // Settlement (0x300 - 0x3FF)
    #[msg("Round has already been settled")]
    RoundAlreadySettled = 0x300,

    #[msg("Settlement must receive every bet account exactly once")]
    MissingBetAccounts = 0x301,

    #[msg("Bet account is not owned by this program or has a wrong address")]
    InvalidBetAccount = 0x302,

    #[msg("Bet account data could not be deserialized")]
    InvalidBetAccountData = 0x303,

    #[msg("Bet accounts must be supplied in insertion order")]
    BetsOutOfOrder = 0x304,

    #[msg("Payout token account does not belong to the winning player")]
    InvalidWinnerTokenAccount = 0x305,

    // Arithmetic (0x400 - 0x4FF)
    #[msg("Arithmetic overflow")]
    Overflow = 0x400,

    #[msg("Arithmetic underflow")]
    Underflow = 0x401,
}

/// Failure kinds of the randomness pipeline, kept in their own namespace.
#[error_code]
pub enum RandomnessError {
    #[msg("Randomness buffer must be at least 16 bytes")]
    InvalidRndLength = 0,

    #[msg("BLS signature verification failed for the supplied seed")]
    InvalidProof = 1,
}
