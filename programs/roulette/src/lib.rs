//! Roulette rounds settled with publicly verifiable randomness.
//!
//! Players stake SPL tokens on a subset of numbered pockets while a round is
//! open. After the betting window elapses, the operator submits a beacon's
//! BLS signature over the round seed; the program verifies it, derives the
//! winning pocket and pays every winning bet from the round's vault in a
//! single settlement pass.

#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod roulette {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        token_mint: Pubkey,
        beacon_pubkey: [u8; 48],
        wheel_size: u8,
    ) -> Result<()> {
        initialize::handler(ctx, token_mint, beacon_pubkey, wheel_size)
    }

    pub fn create_round(
        ctx: Context<CreateRound>,
        min_value: u64,
        max_value: u64,
        total_amount: u64,
        period_ms: u64,
        seed_amount: u64,
    ) -> Result<()> {
        create_round::handler(
            ctx,
            min_value,
            max_value,
            total_amount,
            period_ms,
            seed_amount,
        )
    }

    pub fn update_round(
        ctx: Context<UpdateRound>,
        min_value: u64,
        max_value: u64,
        total_amount: u64,
        extra_amount: u64,
    ) -> Result<()> {
        update_round::handler(ctx, min_value, max_value, total_amount, extra_amount)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, values: Vec<u8>, amount: u64) -> Result<()> {
        place_bet::handler(ctx, values, amount)
    }

    pub fn finish_round<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinishRound<'info>>,
        sig: Vec<u8>,
        seed: [u8; 32],
    ) -> Result<()> {
        finish_round::handler(ctx, sig, seed)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }
}
