use anchor_lang::prelude::*;
use crate::{
    constants::{
        MAX_ACCOUNT_HOLDER_LEN, MAX_BANK_NAME_LEN, MAX_BRANCH_LEN, MAX_IBAN_LEN, MAX_PHONE_LEN
    },
    error::EarnHubError,
    profile::{BankInfo, BankInfoUpdatedEvent, UserProfile}
};

// This function stores or replaces the user's bank details
// Only presence and length are validated here; correctness of the payout
// details is checked by the reviewer at withdrawal time
// Params
//   ctx - Bank info update context
//   input - New bank details
// Return
//   Ok on success, ErrorCode on failure
pub fn set_bank_info(ctx: Context<ASetBankInfo>, input: BankInfo) -> Result<()> {
    require!(
        input.bank_name.len() <= MAX_BANK_NAME_LEN
            && input.iban.len() <= MAX_IBAN_LEN
            && input.account_holder.len() <= MAX_ACCOUNT_HOLDER_LEN
            && input.phone.len() <= MAX_PHONE_LEN
            && input.branch.len() <= MAX_BRANCH_LEN,
        EarnHubError::InvalidBankInfo
    );
    require!(input.is_complete(), EarnHubError::InvalidBankInfo);

    let profile = &mut ctx.accounts.profile;
    profile.bank = Some(input);

    emit!(BankInfoUpdatedEvent {
        user: profile.user,
        complete: profile.bank_info_complete(),
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Bank info update context - passed with accounts
#[derive(Accounts)]
pub struct ASetBankInfo<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [UserProfile::PREFIX_SEED, user.key().as_ref()],
        bump = profile.bump,
        has_one = user
    )]
    pub profile: Box<Account<'info, UserProfile>> // Profile being updated
}
