use anchor_lang::prelude::*;
use std::collections::BTreeSet;
use crate::{
    main_state::Milestone,
    referral::ReferralRecord
};

// Aggregated view of a referrer's ledger
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferralStats {
    pub total_referrals: u64,   // Number of referral records
    pub total_earned: u64,      // Bonus already paid (bonus_given records)
    pub total_pending: u64      // Bonus waiting on the referee's first approved top-up
}

// Progress of one milestone against the referrer's total count
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneProgress {
    pub milestone: Milestone,
    pub completed: bool,
    pub progress_percent: u8    // min(100, 100 * total_referrals / referrals_required)
}

// This function collapses repeated records of the same referred user.
// Records are keyed by the referred wallet, so a caller-supplied ledger with
// the same record listed twice must not count twice.
// Params
//   records - Referral records in any order, possibly with repeats
// Return
//   Records with one entry per referred user, first occurrence kept
pub fn dedupe_by_referred(records: Vec<ReferralRecord>) -> Vec<ReferralRecord> {
    let mut seen = BTreeSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.referred))
        .collect()
}

// This function aggregates a referrer's records into totals
// Params
//   records - Referral records of a single referrer, any order
//   per_referral_bonus - Bonus paid per rewarded referral
// Return
//   ReferralStats totals; all zeros for an empty ledger
pub fn aggregate(records: &[ReferralRecord], per_referral_bonus: u64) -> ReferralStats {
    let rewarded = records.iter().filter(|r| r.bonus_given).count() as u64;
    let pending = records.len() as u64 - rewarded;
    ReferralStats {
        total_referrals: records.len() as u64,
        total_earned: rewarded.saturating_mul(per_referral_bonus),
        total_pending: pending.saturating_mul(per_referral_bonus)
    }
}

// This function evaluates every milestone against the same referral count.
// Milestones are independent, not cumulative: each threshold is compared to
// the total on its own.
// Params
//   milestones - Configured milestone ladder
//   total_referrals - Referral count to evaluate against
// Return
//   Per-milestone completion flag and capped progress percentage
pub fn milestone_progress(
    milestones: &[Milestone],
    total_referrals: u64
) -> Vec<MilestoneProgress> {
    milestones
        .iter()
        .map(|&milestone| {
            let required = milestone.referrals_required as u64;
            let completed = total_referrals >= required;
            let progress_percent = if completed {
                100
            } else {
                // required > 0 here, since completed covers required == 0
                (total_referrals * 100 / required) as u8
            };
            MilestoneProgress { milestone, completed, progress_percent }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(bonus_given: bool) -> ReferralRecord {
        ReferralRecord {
            referrer: Pubkey::new_unique(),
            referred: Pubkey::new_unique(),
            created_time: 0,
            bonus_given,
            bump: 0
        }
    }

    fn ladder(entries: &[(u16, u64)]) -> Vec<Milestone> {
        entries
            .iter()
            .map(|&(referrals_required, reward_amount)| Milestone { referrals_required, reward_amount })
            .collect()
    }

    #[test]
    fn empty_ledger_is_all_zeros() {
        assert_eq!(aggregate(&[], 80), ReferralStats::default());
    }

    #[test]
    fn totals_split_by_bonus_given() {
        let records = vec![record(true), record(true), record(false), record(true)];
        let stats = aggregate(&records, 80);
        assert_eq!(stats.total_referrals, 4);
        assert_eq!(stats.total_earned, 240);
        assert_eq!(stats.total_pending, 80);
    }

    #[test]
    fn duplicate_records_count_once() {
        let paid = record(true);
        let pending = record(false);
        let repeat = paid.clone();

        let records = dedupe_by_referred(vec![paid, pending, repeat]);
        let stats = aggregate(&records, 80);
        assert_eq!(stats.total_referrals, 2);
        assert_eq!(stats.total_earned, 80);
        assert_eq!(stats.total_pending, 80);
    }

    #[test]
    fn milestone_progress_caps_at_100() {
        let milestones = ladder(&[(5, 250), (10, 600)]);
        let progress = milestone_progress(&milestones, 7);

        assert!(progress[0].completed);
        assert_eq!(progress[0].progress_percent, 100);

        assert!(!progress[1].completed);
        assert_eq!(progress[1].progress_percent, 70);
    }

    #[test]
    fn milestones_are_evaluated_independently() {
        // A count past a later threshold completes it even if an earlier
        // milestone were missing from the ladder
        let milestones = ladder(&[(25, 2_000)]);
        let progress = milestone_progress(&milestones, 30);
        assert!(progress[0].completed);
    }

    #[test]
    fn milestone_progress_is_pure() {
        let milestones = ladder(&[(5, 250), (10, 600), (25, 2_000)]);
        assert_eq!(
            milestone_progress(&milestones, 8),
            milestone_progress(&milestones, 8)
        );
    }

    proptest! {
        #[test]
        fn totals_match_record_split(flags in proptest::collection::vec(any::<bool>(), 0..64)) {
            let records: Vec<ReferralRecord> = flags.iter().map(|&f| record(f)).collect();
            let rewarded = flags.iter().filter(|&&f| f).count() as u64;
            let stats = aggregate(&records, 80);

            prop_assert_eq!(stats.total_referrals, flags.len() as u64);
            prop_assert_eq!(stats.total_earned, 80 * rewarded);
            prop_assert_eq!(stats.total_pending, 80 * (flags.len() as u64 - rewarded));
        }

        #[test]
        fn progress_stays_within_bounds(total in 0u64..10_000) {
            let milestones = ladder(&[(1, 10), (5, 250), (10, 600), (25, 2_000), (50, 5_000)]);
            for p in milestone_progress(&milestones, total) {
                prop_assert!(p.progress_percent <= 100);
                prop_assert_eq!(p.completed, total >= p.milestone.referrals_required as u64);
                if p.completed {
                    prop_assert_eq!(p.progress_percent, 100);
                }
            }
        }
    }
}
