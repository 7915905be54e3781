use anchor_lang::prelude::*;

// MainState initialization event
#[event]
pub struct MainStateInitialized {
    pub owner: Pubkey,
    pub per_referral_bonus: u64,
    pub signup_bonus: u64,
    pub min_account_age_days: u64
}

// Ownership transferred event
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,     // Outgoing owner wallet address
    pub new_owner: Pubkey,          // Incoming owner wallet address
    pub timestamp: i64              // Transferred time
}

// MainState updated event
#[event]
pub struct MainStateUpdated {
    pub per_referral_bonus: u64,
    pub signup_bonus: u64,
    pub min_account_age_days: u64,
    pub milestone_count: u8
}
