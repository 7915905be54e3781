use anchor_lang::prelude::*;
use crate::request::EligibilityVerdict;

// Top-up submitted event
#[event]
pub struct TopUpRequestedEvent {
    pub user: Pubkey,       // Requesting user wallet address
    pub seq: u32,           // Request sequence number
    pub amount: u64,        // Requested deposit amount
    pub timestamp: i64      // Submitted time
}

// Top-up reviewed event - audit log entry for the admin action
#[event]
pub struct TopUpReviewedEvent {
    pub reviewer: Pubkey,   // Reviewing admin wallet address
    pub user: Pubkey,       // Requesting user wallet address
    pub seq: u32,           // Request sequence number
    pub amount: u64,        // Reviewed amount
    pub approved: bool,     // Review outcome
    pub new_balance: u64,   // User balance after the review
    pub timestamp: i64      // Review time
}

// Withdrawal eligibility checked event - advisory preview of the verdict
// that will be re-evaluated at review time
#[event]
pub struct EligibilityCheckedEvent {
    pub user: Pubkey,               // User wallet address
    pub verdict: EligibilityVerdict,
    pub timestamp: i64              // Checked time
}

// Withdrawal submitted event
#[event]
pub struct WithdrawRequestedEvent {
    pub user: Pubkey,       // Requesting user wallet address
    pub seq: u32,           // Request sequence number
    pub amount: u64,        // Requested withdrawal amount
    pub timestamp: i64      // Submitted time
}

// Withdrawal reviewed event - audit log entry for the admin action
#[event]
pub struct WithdrawReviewedEvent {
    pub reviewer: Pubkey,   // Reviewing admin wallet address
    pub user: Pubkey,       // Requesting user wallet address
    pub seq: u32,           // Request sequence number
    pub amount: u64,        // Reviewed amount
    pub approved: bool,     // Review outcome
    pub new_balance: u64,   // User balance after the review
    pub timestamp: i64      // Review time
}
