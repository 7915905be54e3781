use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    main_state::MainState,
    plan::tier_at,
    profile::UserProfile,
    request::{summarize, RequestStatus, WithdrawRequest, WithdrawReviewedEvent},
    utils::{days_since, debit}
};

// This function is called by the owner to approve or reject a pending
// withdrawal. Approval re-runs the eligibility summarizer against the
// current profile state - this is the authoritative verdict; the submit-time
// check was only a preview - and then debits the balance.
// Params
//   ctx - Withdrawal review context
//   approve - Review outcome
// Return
//   Ok on success, ErrorCode on failure
pub fn review_withdraw(ctx: Context<AReviewWithdraw>, approve: bool) -> Result<()> {
    let request = &mut ctx.accounts.request;
    require!(
        request.status.eq(&RequestStatus::Pending),
        EarnHubError::RequestNotPending
    );

    let now = Clock::get()?.unix_timestamp;
    let main_state = &ctx.accounts.main_state;
    let profile = &mut ctx.accounts.profile;

    request.reviewed_time = now;
    request.reviewer = ctx.accounts.owner.key();

    if approve {
        let verdict = summarize(
            days_since(now, profile.signup_time),
            main_state.min_account_age_days,
            tier_at(profile.plan_tier),
            profile.balance,
            request.amount,
            profile.bank_info_complete()
        );
        verdict.require_eligible()?;

        debit(&mut profile.balance, request.amount)?;
        request.status = RequestStatus::Approved;
    } else {
        request.status = RequestStatus::Rejected;
    }

    emit!(WithdrawReviewedEvent {
        reviewer: request.reviewer,
        user: request.user,
        seq: request.seq,
        amount: request.amount,
        approved: approve,
        new_balance: profile.balance,
        timestamp: now
    });

    Ok(())
}

// Withdrawal review context - passed with accounts
#[derive(Accounts)]
pub struct AReviewWithdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>, // Program owner acting as reviewer

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump,
        has_one = owner
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    #[account(
        mut,
        seeds = [
            WithdrawRequest::PREFIX_SEED,
            request.user.as_ref(),
            &request.seq.to_le_bytes()
        ],
        bump = request.bump
    )]
    pub request: Box<Account<'info, WithdrawRequest>>, // Request under review

    #[account(
        mut,
        seeds = [UserProfile::PREFIX_SEED, request.user.as_ref()],
        bump = profile.bump
    )]
    pub profile: Box<Account<'info, UserProfile>> // Requesting user's profile
}
