use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct RouletteConfig {
    // --- Authorities ---
    pub authority: Pubkey, // The operator allowed to create, update, settle and drain rounds.

    // --- Token & Beacon ---
    pub token_mint: Pubkey,      // The mint staked and paid out by every round.
    pub beacon_pubkey: [u8; 48], // Compressed G1 public key of the randomness beacon (min-pk).

    // --- Draw Rules ---
    pub wheel_size: u8, // Modulus used to reduce the derived randomness to a pocket.

    // --- Global State ---
    pub current_round: u64, // Id assigned to the next round; incremented on each creation.

    // --- Metadata ---
    pub bump: u8, // A bump seed for PDA.
}
