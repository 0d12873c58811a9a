use crate::{constants::*, error::RouletteError, state::*};
use anchor_lang::prelude::*;
use blst::min_pk::PublicKey;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + RouletteConfig::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, RouletteConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn validate(&self, beacon_pubkey: &[u8; 48], wheel_size: u8) -> Result<()> {
        require!(
            wheel_size >= 2 && wheel_size <= MAX_WHEEL_SIZE,
            RouletteError::InvalidWheelSize
        );

        // Reject keys that are not valid G1 group elements up front; a bad
        // key would make every finish_round fail with InvalidProof.
        let pubkey =
            PublicKey::from_bytes(beacon_pubkey).map_err(|_| RouletteError::InvalidBeaconKey)?;
        pubkey
            .validate()
            .map_err(|_| RouletteError::InvalidBeaconKey)?;

        Ok(())
    }
}

pub fn handler(
    ctx: Context<Initialize>,
    token_mint: Pubkey,
    beacon_pubkey: [u8; 48],
    wheel_size: u8,
) -> Result<()> {
    // validate
    ctx.accounts.validate(&beacon_pubkey, wheel_size)?;

    let config = &mut ctx.accounts.config;

    // set fields
    config.authority = ctx.accounts.signer.key();
    config.token_mint = token_mint;
    config.beacon_pubkey = beacon_pubkey;
    config.wheel_size = wheel_size;
    config.current_round = 0;
    config.bump = ctx.bumps.config;

    Ok(())
}
