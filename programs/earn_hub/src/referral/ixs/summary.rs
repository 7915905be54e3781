use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    main_state::MainState,
    profile::UserProfile,
    referral::{aggregate, dedupe_by_referred, milestone_progress, ReferralRecord, ReferralSummaryEvent}
};

// This function aggregates the caller's referral ledger and emits the totals
// and per-milestone progress. The user's ReferralRecord accounts are passed
// as remaining accounts; the handler rejects records of other referrers.
// Params
//   ctx - Summary context
// Return
//   Ok on success, ErrorCode on failure
pub fn referral_summary<'info>(
    ctx: Context<'_, '_, 'info, 'info, AReferralSummary<'info>>
) -> Result<()> {
    let profile = &ctx.accounts.profile;
    let main_state = &ctx.accounts.main_state;

    let mut records = Vec::with_capacity(ctx.remaining_accounts.len());
    for account in ctx.remaining_accounts {
        let record = Account::<ReferralRecord>::try_from(account)?;
        require!(
            record.referrer.eq(&profile.user),
            EarnHubError::InvalidReferralRecord
        );
        records.push(record.into_inner());
    }
    // The same record passed twice must not inflate the totals
    let records = dedupe_by_referred(records);

    let stats = aggregate(&records, main_state.per_referral_bonus);
    let milestones = milestone_progress(main_state.milestones(), stats.total_referrals);

    emit!(ReferralSummaryEvent {
        user: profile.user,
        stats,
        milestones,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Referral summary context - ReferralRecord accounts follow as remaining accounts
#[derive(Accounts)]
pub struct AReferralSummary<'info> {
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
    pub profile: Box<Account<'info, UserProfile>> // Referrer profile
}
