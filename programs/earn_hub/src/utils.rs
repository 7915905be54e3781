use anchor_lang::prelude::*;
use crate::{
    constants::SECONDS_PER_DAY,
    error::EarnHubError
};

// This function computes how many whole days have passed since a timestamp
// Params
//   now - Current unix timestamp
//   since - Earlier unix timestamp (e.g. signup time)
// Return
//   Number of whole days, 0 if `since` is in the future
pub fn days_since(now: i64, since: i64) -> u64 {
    if now <= since {
        return 0;
    }
    ((now - since) / SECONDS_PER_DAY) as u64
}

// This function credits an amount to a ledger balance
// Params
//   balance - Balance to credit
//   amount - Amount to add
// Return
//   Ok on success, MathOverflow on overflow
pub fn credit(balance: &mut u64, amount: u64) -> Result<()> {
    *balance = balance
        .checked_add(amount)
        .ok_or(EarnHubError::MathOverflow)?;
    Ok(())
}

// This function debits an amount from a ledger balance
// Params
//   balance - Balance to debit
//   amount - Amount to subtract
// Return
//   Ok on success, InsufficientBalance if the balance is too low
pub fn debit(balance: &mut u64, amount: u64) -> Result<()> {
    *balance = balance
        .checked_sub(amount)
        .ok_or(EarnHubError::InsufficientBalance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_since_whole_days_only() {
        let since = 1_700_000_000;
        assert_eq!(days_since(since, since), 0);
        assert_eq!(days_since(since + SECONDS_PER_DAY - 1, since), 0);
        assert_eq!(days_since(since + SECONDS_PER_DAY, since), 1);
        assert_eq!(days_since(since + 7 * SECONDS_PER_DAY, since), 7);
    }

    #[test]
    fn days_since_clock_behind_signup() {
        assert_eq!(days_since(100, 200), 0);
    }

    #[test]
    fn credit_and_debit_roundtrip() {
        let mut balance = 1_000u64;
        credit(&mut balance, 500).unwrap();
        assert_eq!(balance, 1_500);
        debit(&mut balance, 1_500).unwrap();
        assert_eq!(balance, 0);
    }

    #[test]
    fn debit_past_zero_fails() {
        let mut balance = 100u64;
        assert!(debit(&mut balance, 101).is_err());
        assert_eq!(balance, 100);
    }

    #[test]
    fn credit_overflow_fails() {
        let mut balance = u64::MAX;
        assert!(credit(&mut balance, 1).is_err());
    }
}
