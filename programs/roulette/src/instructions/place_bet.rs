use crate::{constants::*, error::RouletteError, events::NewBet, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
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

    // Derived from (round, player) alone: a second placement by the same
    // player cannot allocate a fresh account (AlreadyPlaced on the wire).
    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Bet::INIT_SPACE,
        seeds = [BET_SEED.as_bytes(), round.key().as_ref(), signer.key().as_ref()],
        bump
    )]
    pub bet: Account<'info, Bet>,

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
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PlaceBet>, values: Vec<u8>, amount: u64) -> Result<()> {
    let now_ms = current_time_ms()?;

    // validate
    validate_bet_admission(&ctx.accounts.round, amount, now_ms)?;
    values_mask(&values, ctx.accounts.config.wheel_size)?;

    // escrow the stake
    let transfer_accounts = Transfer {
        from: ctx.accounts.player_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    let round_key = ctx.accounts.round.key();
    let round = &mut ctx.accounts.round;
    let bet = &mut ctx.accounts.bet;

    // set bet fields
    bet.round = round_key;
    bet.player = ctx.accounts.signer.key();
    bet.id = round
        .total_bets
        .checked_add(1)
        .ok_or(RouletteError::Overflow)?;
    bet.amount = amount;
    bet.values = values.clone();
    bet.status = BetStatus::Pending;
    bet.created_at = now_ms;
    bet.bump = ctx.bumps.bet;

    // set round fields
    round.total_amount = round
        .total_amount
        .checked_sub(amount)
        .ok_or(RouletteError::Underflow)?;
    round.total_pool = round
        .total_pool
        .checked_add(amount)
        .ok_or(RouletteError::Overflow)?;
    round.total_bets = bet.id;

    emit!(NewBet {
        round: round.id,
        player: bet.player,
        amount,
        values,
    });

    Ok(())
}
