use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    main_state::MainState,
    profile::UserProfile,
    referral::MilestoneClaimedEvent,
    utils::credit
};

// This function pays out one milestone reward. Milestones are independent:
// each threshold is claimable on its own once the referral count reaches it.
// Params
//   ctx - Milestone claim context
//   milestone_index - Index into the configured milestone ladder
// Return
//   Ok on success, ErrorCode on failure
pub fn claim_milestone(ctx: Context<AClaimMilestone>, milestone_index: u8) -> Result<()> {
    let main_state = &ctx.accounts.main_state;
    let profile = &mut ctx.accounts.profile;

    require!(
        milestone_index < main_state.milestone_count,
        EarnHubError::UnknownMilestone
    );
    let milestone = main_state.milestones()[milestone_index as usize];

    require!(
        profile.referral_count as u64 >= milestone.referrals_required as u64,
        EarnHubError::MilestoneNotReached
    );
    require!(
        !profile.has_claimed_milestone(milestone_index),
        EarnHubError::MilestoneAlreadyClaimed
    );

    profile.mark_milestone_claimed(milestone_index);
    credit(&mut profile.balance, milestone.reward_amount)?;
    credit(&mut profile.total_earnings, milestone.reward_amount)?;

    emit!(MilestoneClaimedEvent {
        user: profile.user,
        milestone_index,
        referrals_required: milestone.referrals_required,
        reward_amount: milestone.reward_amount,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Milestone claim context - passed with accounts
#[derive(Accounts)]
pub struct AClaimMilestone<'info> {
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
    pub profile: Box<Account<'info, UserProfile>> // Claiming profile
}
