use anchor_lang::prelude::*;
use crate::{
    main_state::MainState,
    plan::tier_at,
    profile::UserProfile,
    request::{summarize, EligibilityCheckedEvent},
    utils::days_since
};

// This function previews withdrawal eligibility for an amount and emits the
// verdict. Advisory only: it never fails on an ineligible verdict, and the
// binding decision is re-evaluated when the request is reviewed.
// Params
//   ctx - Eligibility check context
//   amount - Withdrawal amount to evaluate
// Return
//   Ok with the verdict emitted as an event
pub fn check_withdrawal_eligibility(
    ctx: Context<ACheckEligibility>,
    amount: u64
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let profile = &ctx.accounts.profile;
    let main_state = &ctx.accounts.main_state;

    let verdict = summarize(
        days_since(now, profile.signup_time),
        main_state.min_account_age_days,
        tier_at(profile.plan_tier),
        profile.balance,
        amount,
        profile.bank_info_complete()
    );

    emit!(EligibilityCheckedEvent {
        user: profile.user,
        verdict,
        timestamp: now
    });

    Ok(())
}

// Eligibility check context - passed with accounts
#[derive(Accounts)]
pub struct ACheckEligibility<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    #[account(
        seeds = [UserProfile::PREFIX_SEED, user.key().as_ref()],
        bump = profile.bump,
        has_one = user
    )]
    pub profile: Box<Account<'info, UserProfile>> // Profile being checked
}
