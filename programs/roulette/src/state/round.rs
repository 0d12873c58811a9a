use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Round {
    // --- Identity ---
    pub id: u64,       // Unique identifier (config.current_round at creation).
    pub vault: Pubkey, // Token account escrowing stakes and seed liquidity.

    // --- Betting Rules ---
    pub min_value: u64,    // Minimum single-bet stake (inclusive).
    pub max_value: u64,    // Maximum single-bet stake (inclusive).
    pub total_amount: u64, // Remaining admissible bet budget.
    pub closing_time: u64, // ms since epoch; bets admitted while now <= closing_time.

    // --- State ---
    pub status: RoundStatus,        // Open until settled; closure is derived from closing_time.
    pub total_pool: u64,            // Stakes + seed liquidity currently escrowed.
    pub total_bets: u64,            // Number of bets placed; the bet book's insertion count.
    pub winning_number: Option<u8>, // Drawn pocket in [1, wheel_size], set at settlement.

    // --- Metadata ---
    pub created_at: u64,          // ms timestamp of creation.
    pub settled_at: Option<u64>,  // ms timestamp of settlement.
    pub bump: u8,                 // A bump seed for PDA.
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum RoundStatus {
    Open,
    Settled,
}

impl Round {
    /// A bet at now == closing_time is still admitted.
    pub fn accepts_bets(&self, now_ms: u64) -> bool {
        self.status == RoundStatus::Open && now_ms <= self.closing_time
    }

    /// The draw requires now > closing_time, so the two windows never overlap.
    pub fn ready_to_finish(&self, now_ms: u64) -> bool {
        self.status == RoundStatus::Open && now_ms > self.closing_time
    }
}
