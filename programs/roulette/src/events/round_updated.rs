use anchor_lang::prelude::*;

#[event]
pub struct RoundUpdated {
    pub round: u64,
    pub min_value: u64,
    pub max_value: u64,
    pub total_amount: u64,
    pub pool: u64,
}
