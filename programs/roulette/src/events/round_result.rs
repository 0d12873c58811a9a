use anchor_lang::prelude::*;

/// Emitted exactly once per round, after every payout and the residual drain.
#[event]
pub struct RoundResult {
    pub round: u64,
    pub seed: [u8; 32],
    pub random: u8,
}
