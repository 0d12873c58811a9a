use crate::{constants::*, error::RouletteError, events::RoundResult, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct FinishRound<'info> {
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
        token::authority = config.authority
    )]
    pub operator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    // remaining_accounts: (bet PDA, player token account) pairs in insertion order
}

impl<'info> FinishRound<'info> {
    pub fn validate(&self, now_ms: u64, sig: &[u8], seed: &[u8; 32]) -> Result<()> {
        require!(
            self.signer.key() == self.config.authority,
            RouletteError::Unauthorized
        );

        require!(
            self.round.status == RoundStatus::Open,
            RouletteError::RoundAlreadySettled
        );

        require!(
            self.round.ready_to_finish(now_ms),
            RouletteError::RoundNotFinished
        );

        verify_beacon_signature(sig, seed, &self.config.beacon_pubkey)?;

        Ok(())
    }
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, FinishRound<'info>>, sig: Vec<u8>, seed: [u8; 32]) -> Result<()> {
    let now_ms = current_time_ms()?;

    // validate
    ctx.accounts.validate(now_ms, &sig, &seed)?;

    // the draw: signature bound to the settlement moment, reduced to a pocket
    let digest = derive_randomness(&sig, now_ms);
    let winning_number = safe_selection(ctx.accounts.config.wheel_size, &digest)?
        .checked_add(1)
        .ok_or(RouletteError::Overflow)?;

    // every bet must be walked exactly once, as (bet, player token) pairs
    let expected_accounts = (ctx.accounts.round.total_bets as usize)
        .checked_mul(2)
        .ok_or(RouletteError::Overflow)?;
    require!(
        ctx.remaining_accounts.len() == expected_accounts,
        RouletteError::MissingBetAccounts
    );

    let round_key = ctx.accounts.round.key();
    let round_id = ctx.accounts.round.id;
    let round_bump = ctx.accounts.round.bump;
    let round_id_bytes = round_id.to_le_bytes();
    let seeds = &[ROUND_SEED.as_bytes(), round_id_bytes.as_ref(), &[round_bump]];
    let signer = &[&seeds[..]];

    let mut remaining_pool = ctx.accounts.vault.amount;

    for (index, pair) in ctx.remaining_accounts.chunks(2).enumerate() {
        let bet_info = &pair[0];
        let player_token_info = &pair[1];

        // 1) ownership check
        require_keys_eq!(
            *bet_info.owner,
            *ctx.program_id,
            RouletteError::InvalidBetAccount
        );

        // 2) borrow mut data
        let mut data = bet_info.try_borrow_mut_data()?;

        // 3) deserialize
        let mut bet: Bet = Bet::try_deserialize(&mut &data[..])
            .map_err(|_| RouletteError::InvalidBetAccountData)?;

        // 4) validate expected PDA
        let expected_pda = Pubkey::find_program_address(
            &[BET_SEED.as_bytes(), round_key.as_ref(), bet.player.as_ref()],
            ctx.program_id,
        )
        .0;
        require_keys_eq!(*bet_info.key, expected_pda, RouletteError::InvalidBetAccount);

        // 5) insertion order: ids were assigned 1..=total_bets at placement
        require!(
            bet.id == index as u64 + 1,
            RouletteError::BetsOutOfOrder
        );

        // 6) pay the winners as they are encountered
        let mask = values_mask(&bet.values, ctx.accounts.config.wheel_size)?;
        if is_winning(mask, winning_number) {
            let prize = winning_prize(bet.amount, bet.values.len())?;
            require!(prize <= remaining_pool, RouletteError::InsufficientPool);

            let player_token =
                TokenAccount::try_deserialize(&mut &player_token_info.try_borrow_data()?[..])
                    .map_err(|_| RouletteError::InvalidWinnerTokenAccount)?;
            require_keys_eq!(
                player_token.owner,
                bet.player,
                RouletteError::InvalidWinnerTokenAccount
            );
            require_keys_eq!(
                player_token.mint,
                ctx.accounts.config.token_mint,
                RouletteError::InvalidWinnerTokenAccount
            );

            let transfer_accounts = Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: player_token_info.clone(),
                authority: ctx.accounts.round.to_account_info(),
            };
            let transfer_ctx = CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                transfer_accounts,
                signer,
            );
            transfer(transfer_ctx, prize)?;

            remaining_pool = remaining_pool
                .checked_sub(prize)
                .ok_or(RouletteError::Underflow)?;
            bet.status = BetStatus::Won;
        } else {
            bet.status = BetStatus::Lost;
        }

        // 7) serialize back
        let serialized = bet
            .try_to_vec()
            .map_err(|_| RouletteError::InvalidBetAccountData)?;
        if serialized.len() > data[DISCRIMINATOR_SIZE..].len() {
            return Err(RouletteError::InvalidBetAccountData.into());
        }
        data[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + serialized.len()]
            .copy_from_slice(&serialized);
    }

    // residual pool to the operator, after all prize transfers
    if remaining_pool > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.operator_token_account.to_account_info(),
            authority: ctx.accounts.round.to_account_info(),
        };
        let transfer_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            transfer_accounts,
            signer,
        );
        transfer(transfer_ctx, remaining_pool)?;
    }

    // set round fields
    let round = &mut ctx.accounts.round;
    round.status = RoundStatus::Settled;
    round.total_pool = 0;
    round.winning_number = Some(winning_number);
    round.settled_at = Some(now_ms);

    emit!(RoundResult {
        round: round.id,
        seed,
        random: winning_number,
    });

    msg!("round {} settled, winning number {}", round.id, winning_number);

    Ok(())
}
