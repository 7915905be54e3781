use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_PER_REFERRAL_BONUS, MAX_SIGNUP_BONUS},
    error::EarnHubError,
    main_state::{validate_milestones, MainState, MainStateUpdated, Milestone}
};

// MainState update parameters
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone)]
pub struct UpdateMainStateInput {
    per_referral_bonus: u64,    // New per-referral bonus
    signup_bonus: u64,          // New signup bonus
    min_account_age_days: u64,  // New withdrawal age floor
    milestones: Vec<Milestone>  // New milestone ladder, ascending
}

// This function updates main state
// Params
//   ctx - MainState update context
//   input - MainState update parameters
// Return
//   Ok on success, ErrorCode on failure
pub fn update_main_state(
    ctx: Context<AUpdateMainState>,
    input: UpdateMainStateInput
) -> Result<()> {
    require!(
        input.per_referral_bonus.le(&MAX_PER_REFERRAL_BONUS),
        EarnHubError::InvalidBonusConfig
    );
    require!(
        input.signup_bonus.le(&MAX_SIGNUP_BONUS),
        EarnHubError::InvalidBonusConfig
    );
    validate_milestones(&input.milestones)?;

    let main_state = &mut ctx.accounts.main_state;

    // Update new members
    main_state.per_referral_bonus = input.per_referral_bonus;
    main_state.signup_bonus = input.signup_bonus;
    main_state.min_account_age_days = input.min_account_age_days;

    main_state.milestone_count = input.milestones.len() as u8;
    main_state.milestones = Default::default();
    for (slot, milestone) in main_state.milestones.iter_mut().zip(input.milestones.iter()) {
        *slot = *milestone;
    }

    emit!(MainStateUpdated {
        per_referral_bonus: main_state.per_referral_bonus,
        signup_bonus: main_state.signup_bonus,
        min_account_age_days: main_state.min_account_age_days,
        milestone_count: main_state.milestone_count
    });

    Ok(())
}

// MainState update context - passed with accounts
#[derive(Accounts)]
#[instruction(input: UpdateMainStateInput)]
pub struct AUpdateMainState<'info> {
    #[account(mut)]
    pub owner: Signer<'info>, // Current owner

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump,
        has_one = owner
    )]
    pub main_state: Box<Account<'info, MainState>> // MainState account with new values
}
