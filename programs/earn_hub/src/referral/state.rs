use anchor_lang::prelude::*;
use crate::constants::CODE_LEN;

// Claimed referral code, keyed by the code string itself so that two users
// can never hold the same code
#[account]
pub struct ReferralCode {
    pub code: String,       // The code as shared with other users
    pub owner: Pubkey,      // Profile that owns this code
    pub bump: u8
}

impl ReferralCode {
    pub const MAX_SIZE: usize = (4 + CODE_LEN) + 32 + 1;
    pub const PREFIX_SEED: &'static [u8] = b"code";     // Seed of ReferralCode
}

// One record per successful referral, keyed by the referred user.
// bonus_given flips false -> true at most once, when the referred user's
// first top-up is approved.
#[account]
pub struct ReferralRecord {
    pub referrer: Pubkey,       // Referrer wallet address
    pub referred: Pubkey,       // Referred user wallet address
    pub created_time: i64,      // Signup time of the referred user
    pub bonus_given: bool,      // Whether the referrer bonus has been paid
    pub bump: u8
}

impl ReferralRecord {
    pub const MAX_SIZE: usize = std::mem::size_of::<Self>();    // Size of ReferralRecord
    pub const PREFIX_SEED: &'static [u8] = b"referral";         // Seed of ReferralRecord
}
