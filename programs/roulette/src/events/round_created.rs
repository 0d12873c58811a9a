use anchor_lang::prelude::*;

#[event]
pub struct RoundCreated {
    pub round: u64,
    pub min_value: u64,
    pub max_value: u64,
    pub total_amount: u64,
    pub closing_time: u64,
}
