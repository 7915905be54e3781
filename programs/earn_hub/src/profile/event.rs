use anchor_lang::prelude::*;

// Bank details updated event
#[event]
pub struct BankInfoUpdatedEvent {
    pub user: Pubkey,       // User wallet address
    pub complete: bool,     // Whether all payout fields are now present
    pub timestamp: i64      // Updated time
}

// Plan tier changed event
#[event]
pub struct PlanTierChangedEvent {
    pub user: Pubkey,           // User wallet address
    pub previous_tier: u8,      // Tier index before the change
    pub new_tier: u8,           // Tier index after the change
    pub total_top_up: u64,      // Cumulative top-up that resolved the new tier
    pub timestamp: i64          // Changed time
}
