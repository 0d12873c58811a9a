use crate::{error::RouletteError, state::*};
use anchor_lang::prelude::*;

/// Admission checks in a fixed order: stake limits, remaining budget,
/// closing window. Each rejection carries its own error kind.
pub fn validate_bet_admission(round: &Round, amount: u64, now_ms: u64) -> Result<()> {
    require!(amount >= round.min_value, RouletteError::InvalidCoinValue);
    require!(amount <= round.max_value, RouletteError::InvalidCoinValue);
    require!(
        amount <= round.total_amount,
        RouletteError::RoundNotAvailable
    );
    require!(round.accepts_bets(now_ms), RouletteError::RoundClosed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Round {
        Round {
            id: 1,
            vault: Pubkey::default(),
            min_value: 1_000_000,
            max_value: 10_000_000,
            total_amount: 10_000_000,
            closing_time: 60_000,
            status: RoundStatus::Open,
            total_pool: 10_000_000,
            total_bets: 0,
            winning_number: None,
            created_at: 0,
            settled_at: None,
            bump: 255,
        }
    }

    #[test]
    fn stake_at_minimum_is_admitted() {
        assert!(validate_bet_admission(&round(), 1_000_000, 0).is_ok());
    }

    #[test]
    fn stake_below_minimum_is_rejected() {
        let err = validate_bet_admission(&round(), 999_999, 0).unwrap_err();
        assert_eq!(err, RouletteError::InvalidCoinValue.into());
    }

    #[test]
    fn stake_at_maximum_is_admitted() {
        assert!(validate_bet_admission(&round(), 10_000_000, 0).is_ok());
    }

    #[test]
    fn stake_above_maximum_is_rejected() {
        let err = validate_bet_admission(&round(), 10_000_001, 0).unwrap_err();
        assert_eq!(err, RouletteError::InvalidCoinValue.into());
    }

    #[test]
    fn stake_above_remaining_budget_is_rejected() {
        let mut round = round();
        round.max_value = 20_000_000;
        round.total_amount = 5_000_000;

        let err = validate_bet_admission(&round, 6_000_000, 0).unwrap_err();
        assert_eq!(err, RouletteError::RoundNotAvailable.into());
    }

    #[test]
    fn budget_is_checked_before_the_window() {
        let mut round = round();
        round.max_value = 20_000_000;
        round.total_amount = 5_000_000;

        // past closing AND over budget: budget wins the race
        let err = validate_bet_admission(&round, 6_000_000, 60_001).unwrap_err();
        assert_eq!(err, RouletteError::RoundNotAvailable.into());
    }

    #[test]
    fn bet_at_closing_instant_is_admitted() {
        assert!(validate_bet_admission(&round(), 1_000_000, 60_000).is_ok());
    }

    #[test]
    fn bet_past_closing_is_rejected() {
        let err = validate_bet_admission(&round(), 1_000_000, 60_001).unwrap_err();
        assert_eq!(err, RouletteError::RoundClosed.into());
    }

    #[test]
    fn settled_round_rejects_bets() {
        let mut round = round();
        round.status = RoundStatus::Settled;

        let err = validate_bet_admission(&round, 1_000_000, 0).unwrap_err();
        assert_eq!(err, RouletteError::RoundClosed.into());
    }
}
