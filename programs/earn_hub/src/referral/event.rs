use anchor_lang::prelude::*;
use crate::referral::{MilestoneProgress, ReferralStats};

// User registered event
#[event]
pub struct UserRegisteredEvent {
    pub user: Pubkey,                   // New user wallet address
    pub username: String,               // Chosen display name
    pub referral_code: String,          // Code claimed by the new user
    pub referrer: Option<Pubkey>,       // Referrer wallet address, if any
    pub signup_bonus: u64,              // Bonus credited to the new user
    pub timestamp: i64                  // Registered time
}

// Referrer bonus paid event
#[event]
pub struct ReferralBonusEvent {
    pub referrer: Pubkey,       // Referrer wallet address
    pub referred: Pubkey,       // Referred user whose top-up triggered the bonus
    pub amount: u64,            // Bonus amount credited
    pub timestamp: i64          // Paid time
}

// Milestone reward claimed event
#[event]
pub struct MilestoneClaimedEvent {
    pub user: Pubkey,               // Claiming user wallet address
    pub milestone_index: u8,        // Index into the configured ladder
    pub referrals_required: u16,    // Threshold of the claimed milestone
    pub reward_amount: u64,         // Reward credited
    pub timestamp: i64              // Claimed time
}

// Referral ledger summary event
#[event]
pub struct ReferralSummaryEvent {
    pub user: Pubkey,                       // Referrer wallet address
    pub stats: ReferralStats,               // Aggregated totals
    pub milestones: Vec<MilestoneProgress>, // Per-milestone progress
    pub timestamp: i64                      // Computed time
}
