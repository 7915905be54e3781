use anchor_lang::prelude::*;
use crate::constants::{
    CODE_LEN, MAX_ACCOUNT_HOLDER_LEN, MAX_BANK_NAME_LEN, MAX_BRANCH_LEN, MAX_IBAN_LEN,
    MAX_PHONE_LEN, MAX_USERNAME_LEN
};

// Bank details captured for withdrawal payouts
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BankInfo {
    pub bank_name: String,
    pub iban: String,
    pub account_holder: String,
    pub phone: String,
    pub branch: String
}

impl BankInfo {
    pub const MAX_SIZE: usize =
        (4 + MAX_BANK_NAME_LEN) +
        (4 + MAX_IBAN_LEN) +
        (4 + MAX_ACCOUNT_HOLDER_LEN) +
        (4 + MAX_PHONE_LEN) +
        (4 + MAX_BRANCH_LEN);

    // Presence check only; payout details are verified by the reviewer
    pub fn is_complete(&self) -> bool {
        !self.bank_name.is_empty()
            && !self.iban.is_empty()
            && !self.account_holder.is_empty()
            && !self.phone.is_empty()
            && !self.branch.is_empty()
    }
}

// Per-user platform profile
#[account]
pub struct UserProfile {
    pub user: Pubkey,                   // User wallet address
    pub username: String,               // Display name chosen at signup
    pub balance: u64,                   // Spendable platform balance
    pub total_earnings: u64,            // Lifetime bonuses and rewards credited
    pub total_top_up: u64,              // Cumulative approved top-up volume (drives the plan tier)
    pub plan_tier: u8,                  // Current tier index, re-resolved on every approved top-up
    pub signup_time: i64,               // Registration timestamp
    pub referral_code: String,          // This user's own referral code
    pub referred_by: Option<Pubkey>,    // Referrer wallet, if signed up through a code
    pub bank: Option<BankInfo>,         // Bank details, required before withdrawing
    pub referral_count: u32,            // Users referred by this profile
    pub referrals_rewarded: u32,        // Referrals whose bonus has been paid out
    pub top_up_count: u32,              // Top-up requests submitted (request PDA sequence)
    pub withdraw_count: u32,            // Withdraw requests submitted (request PDA sequence)
    pub milestones_claimed: u8,         // Bitmask of claimed milestone indices
    pub bump: u8
}

impl UserProfile {
    pub const MAX_SIZE: usize = 32
        + (4 + MAX_USERNAME_LEN)
        + 8 + 8 + 8
        + 1
        + 8
        + (4 + CODE_LEN)
        + (1 + 32)
        + (1 + BankInfo::MAX_SIZE)
        + 4 + 4 + 4 + 4
        + 1
        + 1;
    pub const PREFIX_SEED: &'static [u8] = b"profile";   // Seed of UserProfile

    pub fn bank_info_complete(&self) -> bool {
        self.bank.as_ref().map(BankInfo::is_complete).unwrap_or(false)
    }

    pub fn has_claimed_milestone(&self, index: u8) -> bool {
        self.milestones_claimed & (1 << index) != 0
    }

    pub fn mark_milestone_claimed(&mut self, index: u8) {
        self.milestones_claimed |= 1 << index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_bank() -> BankInfo {
        BankInfo {
            bank_name: "HBL".into(),
            iban: "PK36SCBL0000001123456702".into(),
            account_holder: "Ayesha Khan".into(),
            phone: "+923001234567".into(),
            branch: "Gulberg".into()
        }
    }

    #[test]
    fn complete_bank_info() {
        assert!(filled_bank().is_complete());
    }

    #[test]
    fn missing_field_is_incomplete() {
        let mut bank = filled_bank();
        bank.iban.clear();
        assert!(!bank.is_complete());
        assert!(!BankInfo::default().is_complete());
    }

    #[test]
    fn milestone_bitmask() {
        let mut profile = UserProfile {
            user: Pubkey::default(),
            username: String::new(),
            balance: 0,
            total_earnings: 0,
            total_top_up: 0,
            plan_tier: 0,
            signup_time: 0,
            referral_code: String::new(),
            referred_by: None,
            bank: None,
            referral_count: 0,
            referrals_rewarded: 0,
            top_up_count: 0,
            withdraw_count: 0,
            milestones_claimed: 0,
            bump: 0
        };
        assert!(!profile.has_claimed_milestone(2));
        profile.mark_milestone_claimed(2);
        assert!(profile.has_claimed_milestone(2));
        assert!(!profile.has_claimed_milestone(0));
        assert!(!profile.bank_info_complete());
    }
}
