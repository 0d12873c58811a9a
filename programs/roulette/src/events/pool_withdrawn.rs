use anchor_lang::prelude::*;

#[event]
pub struct PoolWithdrawn {
    pub round: u64,
    pub amount: u64,
    pub recipient: Pubkey,
}
