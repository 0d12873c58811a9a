use anchor_lang::prelude::*;

/// Emitted after a bet has been recorded and its stake escrowed.
#[event]
pub struct NewBet {
    pub round: u64,
    pub player: Pubkey,
    pub amount: u64,
    pub values: Vec<u8>,
}
