use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    main_state::MainState,
    plan::resolve_tier,
    profile::{PlanTierChangedEvent, UserProfile},
    referral::{ReferralBonusEvent, ReferralRecord},
    request::{RequestStatus, TopUpRequest, TopUpReviewedEvent},
    utils::credit
};

// This function is called by the owner to approve or reject a pending
// top-up. Approval credits the balance, re-resolves the plan tier from the
// new cumulative top-up, and pays the referrer bonus on the referred user's
// first approved top-up.
// Params
//   ctx - Top-up review context
//   approve - Review outcome
// Return
//   Ok on success, ErrorCode on failure
pub fn review_top_up(ctx: Context<AReviewTopUp>, approve: bool) -> Result<()> {
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
        // A referred user's approval must carry the referral record, or the
        // first-top-up bonus flip could be skipped silently
        require!(
            bonus_accounts_supplied(
                profile.referred_by.is_some(),
                ctx.accounts.referral_record.is_some()
            ),
            EarnHubError::MissingReferrerAccounts
        );

        request.status = RequestStatus::Approved;
        credit(&mut profile.balance, request.amount)?;
        credit(&mut profile.total_top_up, request.amount)?;

        // The plan tier always tracks cumulative approved top-up
        let tier_status = resolve_tier(profile.total_top_up);
        let new_tier = tier_status.current_index as u8;
        if new_tier != profile.plan_tier {
            emit!(PlanTierChangedEvent {
                user: profile.user,
                previous_tier: profile.plan_tier,
                new_tier,
                total_top_up: profile.total_top_up,
                timestamp: now
            });
            profile.plan_tier = new_tier;
        }

        // First approved top-up of a referred user pays the referrer
        if let Some(record) = ctx.accounts.referral_record.as_mut() {
            if !record.bonus_given {
                let referrer_profile = ctx
                    .accounts
                    .referrer_profile
                    .as_mut()
                    .ok_or(EarnHubError::MissingReferrerAccounts)?;
                require!(
                    referrer_profile.user.eq(&record.referrer),
                    EarnHubError::InvalidReferralRecord
                );

                record.bonus_given = true;
                let bonus = main_state.per_referral_bonus;
                credit(&mut referrer_profile.balance, bonus)?;
                credit(&mut referrer_profile.total_earnings, bonus)?;
                referrer_profile.referrals_rewarded =
                    referrer_profile.referrals_rewarded.saturating_add(1);

                emit!(ReferralBonusEvent {
                    referrer: record.referrer,
                    referred: record.referred,
                    amount: bonus,
                    timestamp: now
                });
            }
        }
    } else {
        request.status = RequestStatus::Rejected;
    }

    emit!(TopUpReviewedEvent {
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

// Top-up review context - passed with accounts
#[derive(Accounts)]
pub struct AReviewTopUp<'info> {
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
            TopUpRequest::PREFIX_SEED,
            request.user.as_ref(),
            &request.seq.to_le_bytes()
        ],
        bump = request.bump
    )]
    pub request: Box<Account<'info, TopUpRequest>>, // Request under review

    #[account(
        mut,
        seeds = [UserProfile::PREFIX_SEED, request.user.as_ref()],
        bump = profile.bump
    )]
    pub profile: Box<Account<'info, UserProfile>>, // Requesting user's profile

    #[account(
        mut,
        seeds = [ReferralRecord::PREFIX_SEED, request.user.as_ref()],
        bump
    )]
    pub referral_record: Option<Box<Account<'info, ReferralRecord>>>, // Present when the user was referred

    #[account(mut)]
    pub referrer_profile: Option<Box<Account<'info, UserProfile>>> // Referrer to credit
}

// Whether the referral record needed for the bonus flip is at hand.
// Users who signed up without a code have no record to pass.
// Params
//   was_referred - Whether the profile carries a referrer
//   has_record - Whether the referral record account was passed
// Return
//   true when the approval can settle any bonus it owes
fn bonus_accounts_supplied(was_referred: bool, has_record: bool) -> bool {
    !was_referred || has_record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referred_approval_requires_the_record() {
        // Skipping the record for a referred user would leave bonus_given
        // stuck at false on an already-approved first top-up
        assert!(!bonus_accounts_supplied(true, false));
        assert!(bonus_accounts_supplied(true, true));
    }

    #[test]
    fn unreferred_approval_needs_no_record() {
        assert!(bonus_accounts_supplied(false, false));
        assert!(bonus_accounts_supplied(false, true));
    }
}
