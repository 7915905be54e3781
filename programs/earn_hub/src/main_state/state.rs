use anchor_lang::prelude::*;
use crate::{
    constants::MAX_MILESTONES,
    error::EarnHubError
};

// A referral-count threshold unlocking a lump-sum reward
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Milestone {
    pub referrals_required: u16,    // Referral count needed to complete this milestone
    pub reward_amount: u64          // Lump-sum reward paid on claim
}

// Main state of Program
#[account]
pub struct MainState {
    pub owner: Pubkey,                  // Address of the Program owner (The initializer becomes the initial program owner)

    pub per_referral_bonus: u64,        // Bonus paid to a referrer per rewarded referral (default: 80)
    pub signup_bonus: u64,              // Bonus paid to a referred user on signup (default: 40)
    pub min_account_age_days: u64,      // Account age floor for withdrawals (default: 7 days)

    pub milestone_count: u8,            // Number of configured milestones
    pub milestones: [Milestone; MAX_MILESTONES] // Milestone ladder, ascending by referrals_required
}

impl MainState {
    pub const MAX_SIZE: usize = std::mem::size_of::<Self>();    // Size of MainState
    pub const PREFIX_SEED: &'static [u8] = b"main";             // Seed of MainState

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones[..self.milestone_count as usize]
    }
}

// This function validates a milestone ladder
// Params
//   milestones - Proposed milestone ladder
// Return
//   Ok if thresholds are non-zero and strictly ascending with non-zero rewards
pub fn validate_milestones(milestones: &[Milestone]) -> Result<()> {
    require!(milestones.len() <= MAX_MILESTONES, EarnHubError::InvalidMilestoneConfig);
    let mut prev = 0u16;
    for milestone in milestones {
        require!(milestone.referrals_required > prev, EarnHubError::InvalidMilestoneConfig);
        require!(milestone.reward_amount > 0, EarnHubError::InvalidMilestoneConfig);
        prev = milestone.referrals_required;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(entries: &[(u16, u64)]) -> Vec<Milestone> {
        entries
            .iter()
            .map(|&(referrals_required, reward_amount)| Milestone { referrals_required, reward_amount })
            .collect()
    }

    #[test]
    fn default_ladder_is_valid() {
        assert!(validate_milestones(&ladder(&crate::constants::DEF_MILESTONES)).is_ok());
    }

    #[test]
    fn empty_ladder_is_valid() {
        assert!(validate_milestones(&[]).is_ok());
    }

    #[test]
    fn non_ascending_ladder_is_rejected() {
        assert!(validate_milestones(&ladder(&[(5, 250), (5, 600)])).is_err());
        assert!(validate_milestones(&ladder(&[(10, 250), (5, 600)])).is_err());
    }

    #[test]
    fn zero_threshold_or_reward_is_rejected() {
        assert!(validate_milestones(&ladder(&[(0, 250)])).is_err());
        assert!(validate_milestones(&ladder(&[(5, 0)])).is_err());
    }
}
