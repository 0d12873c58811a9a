use crate::{constants::*, error::RouletteError};
use anchor_lang::prelude::*;

/// Builds the membership mask of a bet's picks.
///
/// Rejects empty pick lists, pockets outside [1, wheel_size] and duplicates.
/// Out-of-range picks could never win but would still consume stake, and
/// duplicates would inflate the divisor of the payout formula.
pub fn values_mask(values: &[u8], wheel_size: u8) -> Result<u64> {
    require!(!values.is_empty(), RouletteError::InvalidBetValues);
    require!(
        values.len() <= wheel_size as usize,
        RouletteError::InvalidBetValues
    );

    let mut mask = 0u64;
    for &value in values {
        require!(
            value >= 1 && value <= wheel_size,
            RouletteError::InvalidBetValues
        );

        let bit = 1u64 << (value - 1);
        require!(mask & bit == 0, RouletteError::InvalidBetValues);
        mask |= bit;
    }

    Ok(mask)
}

pub fn is_winning(mask: u64, winning_number: u8) -> bool {
    winning_number >= 1 && mask & (1u64 << (winning_number - 1)) != 0
}

/// A winning stake on k pockets pays amount * 36 / k (integer division).
///
/// On a wheel of 38 the expected return is stake * 36/38 regardless of k.
pub fn winning_prize(amount: u64, picks: usize) -> Result<u64> {
    let prize = (amount as u128)
        .checked_mul(PAYOUT_NUMERATOR as u128)
        .ok_or(RouletteError::Overflow)?
        .checked_div(picks as u128)
        .ok_or(RouletteError::Underflow)?;

    let prize = u64::try_from(prize).map_err(|_| RouletteError::Overflow)?;
    Ok(prize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_marks_each_picked_pocket() {
        let mask = values_mask(&[36, 21, 20, 19], 38).unwrap();

        assert!(is_winning(mask, 36));
        assert!(is_winning(mask, 21));
        assert!(is_winning(mask, 20));
        assert!(is_winning(mask, 19));
        assert!(!is_winning(mask, 22));
        assert!(!is_winning(mask, 1));
    }

    #[test]
    fn mask_rejects_empty_picks() {
        let err = values_mask(&[], 38).unwrap_err();
        assert_eq!(err, RouletteError::InvalidBetValues.into());
    }

    #[test]
    fn mask_rejects_out_of_range_picks() {
        assert!(values_mask(&[0], 38).is_err());
        assert!(values_mask(&[39], 38).is_err());
        assert!(values_mask(&[1, 38], 38).is_ok());
    }

    #[test]
    fn mask_rejects_duplicate_picks() {
        let err = values_mask(&[5, 12, 5], 38).unwrap_err();
        assert_eq!(err, RouletteError::InvalidBetValues.into());
    }

    #[test]
    fn full_wheel_is_the_largest_accepted_bet() {
        let all: Vec<u8> = (1..=38).collect();
        let mask = values_mask(&all, 38).unwrap();

        for pocket in 1..=38 {
            assert!(is_winning(mask, pocket));
        }
    }

    #[test]
    fn prize_is_stake_times_36_over_picks() {
        // 1e6 on four pockets pays 9e6
        assert_eq!(winning_prize(1_000_000, 4).unwrap(), 9_000_000);

        // straight-up bet pays 36x
        assert_eq!(winning_prize(1_000_000, 1).unwrap(), 36_000_000);
    }

    #[test]
    fn prize_uses_integer_division() {
        // 100 * 36 / 7 = 3600 / 7 = 514 (truncated)
        assert_eq!(winning_prize(100, 7).unwrap(), 514);
    }

    #[test]
    fn prize_survives_large_stakes() {
        // u64::MAX * 36 overflows u64 but not the u128 intermediate
        assert!(winning_prize(u64::MAX, 36).is_ok());
        assert_eq!(winning_prize(u64::MAX, 36).unwrap(), u64::MAX);

        // result itself no longer fits
        let err = winning_prize(u64::MAX, 2).unwrap_err();
        assert_eq!(err, RouletteError::Overflow.into());
    }
}
