use anchor_lang::prelude::*;
use crate::{
    constants::{DEF_MILESTONES, DEF_MIN_ACCOUNT_AGE_DAYS, DEF_PER_REFERRAL_BONUS, DEF_SIGNUP_BONUS},
    main_state::{MainState, MainStateInitialized, Milestone}
};

// This function initializes main state
// Params
//   ctx - MainState initialization context
// Return
//   Ok on success, ErrorCode on failure
pub fn init_main_state(ctx: Context<AInitMainState>) -> Result<()> {
    let state = &mut ctx.accounts.main_state;

    // Initialize all members
    state.owner = ctx.accounts.owner.key();

    state.per_referral_bonus = DEF_PER_REFERRAL_BONUS;
    state.signup_bonus = DEF_SIGNUP_BONUS;
    state.min_account_age_days = DEF_MIN_ACCOUNT_AGE_DAYS;

    state.milestone_count = DEF_MILESTONES.len() as u8;
    for (slot, &(referrals_required, reward_amount)) in
        state.milestones.iter_mut().zip(DEF_MILESTONES.iter())
    {
        *slot = Milestone { referrals_required, reward_amount };
    }

    emit!(MainStateInitialized {
        owner: state.owner,
        per_referral_bonus: state.per_referral_bonus,
        signup_bonus: state.signup_bonus,
        min_account_age_days: state.min_account_age_days
    });

    Ok(())
}

// MainState initialization struct - passed with accounts
#[derive(Accounts)]
pub struct AInitMainState<'info> {
    #[account(mut)]
    pub owner: Signer<'info>, // Program owner

    #[account(
        init,
        payer = owner,
        seeds = [MainState::PREFIX_SEED],
        bump,
        space = 8 + MainState::MAX_SIZE
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    pub system_program: Program<'info, System>
}
