use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    plan::Tier
};

// Why a withdrawal is (not) allowed. Structured code only; user-facing
// wording is the client's concern.
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityReason {
    Ok,
    AccountTooNew,
    BankInfoIncomplete,
    BelowPlanMinimum,
    InsufficientBalance
}

// Withdrawal eligibility verdict with the numbers behind it
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reason: EligibilityReason,
    pub account_age_days: u64,
    pub required_age_days: u64,
    pub min_withdraw: u64,          // Plan-tier minimum
    pub requested_amount: u64,
    pub balance: u64
}

impl EligibilityVerdict {
    // This function turns an ineligible verdict into the matching error
    // Return
    //   Ok when eligible, the reason's ErrorCode otherwise
    pub fn require_eligible(&self) -> Result<()> {
        match self.reason {
            EligibilityReason::Ok => Ok(()),
            EligibilityReason::AccountTooNew => err!(EarnHubError::AccountTooNew),
            EligibilityReason::BankInfoIncomplete => err!(EarnHubError::BankInfoIncomplete),
            EligibilityReason::BelowPlanMinimum => err!(EarnHubError::BelowPlanMinimum),
            EligibilityReason::InsufficientBalance => err!(EarnHubError::InsufficientBalance)
        }
    }
}

// This function evaluates withdrawal eligibility. Checks run in a fixed
// order and the first failing one wins.
// Params
//   account_age_days - Whole days since signup
//   required_age_days - Configured account age floor
//   tier - The user's current plan tier
//   balance - Spendable balance
//   requested_amount - Withdrawal amount being considered
//   bank_info_complete - Whether all payout fields are present
// Return
//   EligibilityVerdict, never an error: "not eligible" is a normal result
pub fn summarize(
    account_age_days: u64,
    required_age_days: u64,
    tier: &Tier,
    balance: u64,
    requested_amount: u64,
    bank_info_complete: bool
) -> EligibilityVerdict {
    let reason = if account_age_days < required_age_days {
        EligibilityReason::AccountTooNew
    } else if !bank_info_complete {
        EligibilityReason::BankInfoIncomplete
    } else if requested_amount < tier.min_withdraw {
        EligibilityReason::BelowPlanMinimum
    } else if requested_amount > balance {
        EligibilityReason::InsufficientBalance
    } else {
        EligibilityReason::Ok
    };

    EligibilityVerdict {
        eligible: reason == EligibilityReason::Ok,
        reason,
        account_age_days,
        required_age_days,
        min_withdraw: tier.min_withdraw,
        requested_amount,
        balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::TIERS;

    const STARTER: &Tier = &TIERS[0];

    #[test]
    fn eligible_when_all_checks_pass() {
        let verdict = summarize(10, 7, STARTER, 1_500, 1_200, true);
        assert!(verdict.eligible);
        assert_eq!(verdict.reason, EligibilityReason::Ok);
        assert!(verdict.require_eligible().is_ok());
    }

    #[test]
    fn first_failing_check_wins() {
        // Both the age and the bank info fail; the age check runs first
        let verdict = summarize(3, 7, STARTER, 1_500, 1_200, false);
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, EligibilityReason::AccountTooNew);
    }

    #[test]
    fn bank_info_checked_after_age() {
        let verdict = summarize(10, 7, STARTER, 1_500, 1_200, false);
        assert_eq!(verdict.reason, EligibilityReason::BankInfoIncomplete);
    }

    #[test]
    fn below_plan_minimum() {
        let verdict = summarize(10, 7, STARTER, 1_500, 900, true);
        assert!(!verdict.eligible);
        assert_eq!(verdict.reason, EligibilityReason::BelowPlanMinimum);
        assert!(verdict.require_eligible().is_err());
    }

    #[test]
    fn insufficient_balance_checked_last() {
        let verdict = summarize(10, 7, STARTER, 1_100, 1_200, true);
        assert_eq!(verdict.reason, EligibilityReason::InsufficientBalance);
    }

    #[test]
    fn exact_boundaries_pass() {
        // Age exactly at the floor, amount exactly at the minimum and balance
        let verdict = summarize(7, 7, STARTER, 1_000, 1_000, true);
        assert!(verdict.eligible);
    }

    #[test]
    fn higher_tier_raises_the_minimum() {
        let pro = &TIERS[1];
        let verdict = summarize(10, 7, pro, 10_000, 1_200, true);
        assert_eq!(verdict.reason, EligibilityReason::BelowPlanMinimum);
        assert_eq!(verdict.min_withdraw, 5_000);
    }
}
