use crate::constants::*;
use anchor_lang::prelude::*;

// Seeds carry no per-bet index, so the derivation itself caps each player at
// one bet per round.
#[account]
#[derive(InitSpace)]
pub struct Bet {
    // --- Identity ---
    pub round: Pubkey,  // The round this bet belongs to.
    pub player: Pubkey, // The wallet that placed the bet.
    pub id: u64,        // 1-based insertion index inside the round's bet book.

    // --- Bet Info ---
    pub amount: u64, // Stake escrowed in the round vault.
    #[max_len(MAX_BET_VALUES)]
    pub values: Vec<u8>, // Distinct picked pockets in [1, wheel_size].
    pub status: BetStatus, // Pending until the round settles.

    // --- Metadata ---
    pub created_at: u64, // ms timestamp of placement.
    pub bump: u8,        // A bump seed for PDA.
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
}
