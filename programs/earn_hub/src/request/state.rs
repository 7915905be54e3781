use anchor_lang::prelude::*;
use crate::{
    constants::MAX_PROOF_URI_LEN,
    profile::BankInfo
};

// Review status of a financial request. Only Pending requests can move.
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected
}

// Deposit request awaiting manual proof-of-payment review
#[account]
pub struct TopUpRequest {
    pub user: Pubkey,           // Requesting user wallet address
    pub seq: u32,               // Per-user request sequence number
    pub amount: u64,            // Requested deposit amount
    pub proof_uri: String,      // Screenshot reference (opaque to the program)
    pub status: RequestStatus,  // Review status
    pub created_time: i64,      // Submitted time
    pub reviewed_time: i64,     // Review time, 0 while pending
    pub reviewer: Pubkey,       // Reviewing admin, default while pending
    pub bump: u8
}

impl TopUpRequest {
    pub const MAX_SIZE: usize =
        32 + 4 + 8 + (4 + MAX_PROOF_URI_LEN) + 1 + 8 + 8 + 32 + 1;
    pub const PREFIX_SEED: &'static [u8] = b"topup";    // Seed of TopUpRequest
}

// Withdrawal request; carries a snapshot of the bank details taken at
// submission so a later edit cannot change where a reviewed payout goes
#[account]
pub struct WithdrawRequest {
    pub user: Pubkey,           // Requesting user wallet address
    pub seq: u32,               // Per-user request sequence number
    pub amount: u64,            // Requested withdrawal amount
    pub bank: BankInfo,         // Payout details snapshot
    pub status: RequestStatus,  // Review status
    pub created_time: i64,      // Submitted time
    pub reviewed_time: i64,     // Review time, 0 while pending
    pub reviewer: Pubkey,       // Reviewing admin, default while pending
    pub bump: u8
}

impl WithdrawRequest {
    pub const MAX_SIZE: usize =
        32 + 4 + 8 + BankInfo::MAX_SIZE + 1 + 8 + 8 + 32 + 1;
    pub const PREFIX_SEED: &'static [u8] = b"withdraw"; // Seed of WithdrawRequest
}
