use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const ROUND_SEED: &str = "round";
#[constant]
pub const VAULT_SEED: &str = "vault";
#[constant]
pub const BET_SEED: &str = "bet";

/// Account discriminator size in bytes.
pub const DISCRIMINATOR_SIZE: usize = 8;

/// American-style wheel: the draw lands in [1, 38].
pub const DEFAULT_WHEEL_SIZE: u8 = 38;

/// Upper bound on the wheel so a bet's picks fit a u64 membership mask.
pub const MAX_WHEEL_SIZE: u8 = 64;

/// Maximum picks a single bet may carry (one per pocket).
pub const MAX_BET_VALUES: usize = 64;

/// A winning stake on k numbers pays amount * PAYOUT_NUMERATOR / k.
pub const PAYOUT_NUMERATOR: u64 = 36;

/// Compressed point sizes for the min-pk BLS12-381 variant.
pub const BEACON_PUBKEY_LEN: usize = 48;
pub const BEACON_SIG_LEN: usize = 96;
