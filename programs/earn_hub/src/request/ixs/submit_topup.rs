use anchor_lang::prelude::*;
use crate::{
    constants::MAX_PROOF_URI_LEN,
    error::EarnHubError,
    profile::UserProfile,
    request::{RequestStatus, TopUpRequest, TopUpRequestedEvent}
};

// This function submits a deposit request with a proof-of-payment reference.
// Nothing is credited here; the balance moves when an admin approves.
// Params
//   ctx - Top-up submission context
//   amount - Requested deposit amount
//   proof_uri - Reference to the uploaded payment screenshot
// Return
//   Ok on success, ErrorCode on failure
pub fn submit_top_up(
    ctx: Context<ASubmitTopUp>,
    amount: u64,
    proof_uri: String
) -> Result<()> {
    require!(amount.gt(&0), EarnHubError::InvalidAmount);
    require!(
        !proof_uri.is_empty() && proof_uri.len() <= MAX_PROOF_URI_LEN,
        EarnHubError::InvalidProofUri
    );

    let now = Clock::get()?.unix_timestamp;
    let profile = &mut ctx.accounts.profile;
    let request = &mut ctx.accounts.request;

    request.user = profile.user;
    request.seq = profile.top_up_count;
    request.amount = amount;
    request.proof_uri = proof_uri;
    request.status = RequestStatus::Pending;
    request.created_time = now;
    request.bump = ctx.bumps.request;

    profile.top_up_count = profile.top_up_count.saturating_add(1);

    emit!(TopUpRequestedEvent {
        user: request.user,
        seq: request.seq,
        amount,
        timestamp: now
    });

    Ok(())
}

// Top-up submission context - passed with accounts
#[derive(Accounts)]
pub struct ASubmitTopUp<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [UserProfile::PREFIX_SEED, user.key().as_ref()],
        bump = profile.bump,
        has_one = user
    )]
    pub profile: Box<Account<'info, UserProfile>>, // Requesting profile

    #[account(
        init,
        payer = user,
        seeds = [
            TopUpRequest::PREFIX_SEED,
            user.key().as_ref(),
            &profile.top_up_count.to_le_bytes()
        ],
        bump,
        space = 8 + TopUpRequest::MAX_SIZE
    )]
    pub request: Box<Account<'info, TopUpRequest>>, // New pending request

    pub system_program: Program<'info, System>
}
