use crate::{constants::*, error::RouletteError, events::RoundCreated, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct CreateRound<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, RouletteConfig>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Round::INIT_SPACE,
        seeds = [ROUND_SEED.as_bytes(), &config.current_round.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = round,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = signer
    )]
    pub operator_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> CreateRound<'info> {
    pub fn validate(&self, min_value: u64, max_value: u64, period_ms: u64) -> Result<()> {
        require!(
            self.signer.key() == self.config.authority,
            RouletteError::Unauthorized
        );

        require_keys_eq!(
            self.mint.key(),
            self.config.token_mint,
            RouletteError::InvalidMint
        );

        require!(
            min_value > 0 && min_value <= max_value,
            RouletteError::InvalidBetLimits
        );

        require!(period_ms > 0, RouletteError::InvalidPeriod);

        Ok(())
    }
}

pub fn handler(
    ctx: Context<CreateRound>,
    min_value: u64,
    max_value: u64,
    total_amount: u64,
    period_ms: u64,
    seed_amount: u64,
) -> Result<()> {
    // validate
    ctx.accounts.validate(min_value, max_value, period_ms)?;

    // seed the pool from the operator's account
    if seed_amount > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.operator_token_account.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.signer.to_account_info(),
        };
        let transfer_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
        );
        transfer(transfer_ctx, seed_amount)?;
    }

    let config = &mut ctx.accounts.config;
    let round = &mut ctx.accounts.round;
    let now_ms = current_time_ms()?;

    // set round fields
    round.id = config.current_round;
    round.vault = ctx.accounts.vault.key();
    round.min_value = min_value;
    round.max_value = max_value;
    round.total_amount = total_amount;
    round.closing_time = now_ms
        .checked_add(period_ms)
        .ok_or(RouletteError::Overflow)?;
    round.status = RoundStatus::Open;
    round.total_pool = seed_amount;
    round.total_bets = 0;
    round.winning_number = None;
    round.created_at = now_ms;
    round.settled_at = None;
    round.bump = ctx.bumps.round;

    // set config fields; the id hand-off and the increment commit together
    config.current_round = config
        .current_round
        .checked_add(1)
        .ok_or(RouletteError::Overflow)?;

    emit!(RoundCreated {
        round: round.id,
        min_value,
        max_value,
        total_amount,
        closing_time: round.closing_time,
    });

    Ok(())
}
