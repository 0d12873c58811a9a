use crate::{constants::*, error::RouletteError, events::PoolWithdrawn, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
        token::mint = config.token_mint
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Withdraw<'info> {
    pub fn validate(&self, amount: u64, now_ms: u64) -> Result<()> {
        require!(
            self.signer.key() == self.config.authority,
            RouletteError::Unauthorized
        );

        // Allowed while betting is open or after settlement. The closed
        // window in between is reserved for the draw.
        let open = self.round.accepts_bets(now_ms);
        require!(
            open || self.round.status == RoundStatus::Settled,
            RouletteError::RoundClosed
        );

        require!(amount <= self.vault.amount, RouletteError::InsufficientPool);

        Ok(())
    }
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let now_ms = current_time_ms()?;

    // validate
    ctx.accounts.validate(amount, now_ms)?;

    let round_id = ctx.accounts.round.id;
    let round_bump = ctx.accounts.round.bump;
    let round_id_bytes = round_id.to_le_bytes();
    let seeds = &[ROUND_SEED.as_bytes(), round_id_bytes.as_ref(), &[round_bump]];
    let signer = &[&seeds[..]];

    let transfer_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.recipient_token_account.to_account_info(),
        authority: ctx.accounts.round.to_account_info(),
    };
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
        signer,
    );
    transfer(transfer_ctx, amount)?;

    let round = &mut ctx.accounts.round;

    // set fields; the pool never goes below zero
    round.total_pool = round.total_pool.saturating_sub(amount);

    emit!(PoolWithdrawn {
        round: round.id,
        amount,
        recipient: ctx.accounts.recipient_token_account.owner,
    });

    Ok(())
}
