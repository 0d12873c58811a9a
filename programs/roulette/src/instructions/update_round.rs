use crate::{constants::*, error::RouletteError, events::RoundUpdated, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct UpdateRound<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, RouletteConfig>,

    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &round.id.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), round.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = config.token_mint,
        token::authority = signer
    )]
    pub operator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> UpdateRound<'info> {
    pub fn validate(&self, min_value: u64, max_value: u64, now_ms: u64) -> Result<()> {
        require!(
            self.signer.key() == self.config.authority,
            RouletteError::Unauthorized
        );

        // Limits may only change while bets are still admissible;
        // closing_time itself is immutable.
        require!(self.round.accepts_bets(now_ms), RouletteError::RoundClosed);

        require!(
            min_value > 0 && min_value <= max_value,
            RouletteError::InvalidBetLimits
        );

        Ok(())
    }
}

pub fn handler(
    ctx: Context<UpdateRound>,
    min_value: u64,
    max_value: u64,
    total_amount: u64,
    extra_amount: u64,
) -> Result<()> {
    let now_ms = current_time_ms()?;

    // validate
    ctx.accounts.validate(min_value, max_value, now_ms)?;

    // join extra liquidity into the pool
    if extra_amount > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.operator_token_account.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.signer.to_account_info(),
        };
        let transfer_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
        );
        transfer(transfer_ctx, extra_amount)?;
    }

    let round = &mut ctx.accounts.round;

    // set fields
    round.min_value = min_value;
    round.max_value = max_value;
    round.total_amount = total_amount;
    round.total_pool = round
        .total_pool
        .checked_add(extra_amount)
        .ok_or(RouletteError::Overflow)?;

    emit!(RoundUpdated {
        round: round.id,
        min_value,
        max_value,
        total_amount,
        pool: round.total_pool,
    });

    Ok(())
}
