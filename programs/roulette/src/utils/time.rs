use crate::error::RouletteError;
use anchor_lang::prelude::*;

/// Wall clock as u64 milliseconds since the unix epoch.
pub fn current_time_ms() -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let secs = u64::try_from(now).map_err(|_| RouletteError::Underflow)?;
    let millis = secs.checked_mul(1_000).ok_or(RouletteError::Overflow)?;

    Ok(millis)
}
