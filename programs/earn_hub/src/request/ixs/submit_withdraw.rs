use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    main_state::MainState,
    plan::tier_at,
    profile::UserProfile,
    request::{summarize, RequestStatus, WithdrawRequest, WithdrawRequestedEvent},
    utils::days_since
};

// This function submits a withdrawal request. The eligibility summarizer
// gates submission as an early check; the balance is only debited when the
// request is approved, after the authoritative re-check.
// Params
//   ctx - Withdrawal submission context
//   amount - Requested withdrawal amount
// Return
//   Ok on success, ErrorCode on failure
pub fn submit_withdraw(ctx: Context<ASubmitWithdraw>, amount: u64) -> Result<()> {
    require!(amount.gt(&0), EarnHubError::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    let main_state = &ctx.accounts.main_state;
    let profile = &mut ctx.accounts.profile;

    let verdict = summarize(
        days_since(now, profile.signup_time),
        main_state.min_account_age_days,
        tier_at(profile.plan_tier),
        profile.balance,
        amount,
        profile.bank_info_complete()
    );
    verdict.require_eligible()?;

    // Snapshot the payout details; a later bank-info edit must not affect
    // an already submitted request
    let bank = profile.bank.clone().ok_or(EarnHubError::BankInfoIncomplete)?;

    let request = &mut ctx.accounts.request;
    request.user = profile.user;
    request.seq = profile.withdraw_count;
    request.amount = amount;
    request.bank = bank;
    request.status = RequestStatus::Pending;
    request.created_time = now;
    request.bump = ctx.bumps.request;

    profile.withdraw_count = profile.withdraw_count.saturating_add(1);

    emit!(WithdrawRequestedEvent {
        user: request.user,
        seq: request.seq,
        amount,
        timestamp: now
    });

    Ok(())
}

// Withdrawal submission context - passed with accounts
#[derive(Accounts)]
pub struct ASubmitWithdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

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
            WithdrawRequest::PREFIX_SEED,
            user.key().as_ref(),
            &profile.withdraw_count.to_le_bytes()
        ],
        bump,
        space = 8 + WithdrawRequest::MAX_SIZE
    )]
    pub request: Box<Account<'info, WithdrawRequest>>, // New pending request

    pub system_program: Program<'info, System>
}
