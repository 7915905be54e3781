use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_CODE_ATTEMPTS, MAX_USERNAME_LEN},
    error::EarnHubError,
    main_state::MainState,
    profile::UserProfile,
    referral::{derive_code, ReferralCode, ReferralRecord, UserRegisteredEvent},
    utils::credit
};

// This function registers a new user: creates the profile, claims a referral
// code, and links the referrer when a code was used at signup.
// The code is derived on-chain from the user's key and the attempt nonce; the
// client bumps the nonce and retries when the code account already exists.
// Params
//   ctx - Registration context
//   username - Display name
//   code - Referral code to claim, must match the derivation
//   code_attempt - Derivation nonce, bounded by MAX_CODE_ATTEMPTS
// Return
//   Ok on success, ErrorCode on failure
pub fn register_user(
    ctx: Context<ARegisterUser>,
    username: String,
    code: String,
    code_attempt: u8
) -> Result<()> {
    let username = normalize_username(&username).ok_or(EarnHubError::InvalidUsername)?;
    require!(
        referrer_accounts_aligned(
            ctx.accounts.referrer_code_account.is_some(),
            ctx.accounts.referrer_profile.is_some(),
            ctx.accounts.referral_record.is_some()
        ),
        EarnHubError::MissingReferrerAccounts
    );
    require!(code_attempt < MAX_CODE_ATTEMPTS, EarnHubError::CodeSpaceExhausted);
    require!(
        code == derive_code(&ctx.accounts.user.key(), code_attempt),
        EarnHubError::ReferralCodeMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let main_state = &ctx.accounts.main_state;
    let user_key = ctx.accounts.user.key();

    let code_account = &mut ctx.accounts.code_account;
    code_account.code = code.clone();
    code_account.owner = user_key;
    code_account.bump = ctx.bumps.code_account;

    let profile = &mut ctx.accounts.profile;
    profile.user = user_key;
    profile.username = username.clone();
    profile.plan_tier = 0;
    profile.signup_time = now;
    profile.referral_code = code.clone();
    profile.bump = ctx.bumps.profile;

    let mut referrer = None;
    let mut signup_bonus = 0;

    if let Some(referrer_code) = &ctx.accounts.referrer_code_account {
        require!(referrer_code.owner.ne(&user_key), EarnHubError::SelfReferral);

        let referrer_profile = ctx
            .accounts
            .referrer_profile
            .as_mut()
            .ok_or(EarnHubError::MissingReferrerAccounts)?;
        let record = ctx
            .accounts
            .referral_record
            .as_mut()
            .ok_or(EarnHubError::MissingReferrerAccounts)?;
        require!(
            referrer_profile.user.eq(&referrer_code.owner),
            EarnHubError::ReferralCodeMismatch
        );

        record.referrer = referrer_code.owner;
        record.referred = user_key;
        record.created_time = now;
        record.bonus_given = false;
        record.bump = ctx
            .bumps
            .referral_record
            .ok_or(EarnHubError::MissingReferrerAccounts)?;

        referrer_profile.referral_count = referrer_profile.referral_count.saturating_add(1);
        profile.referred_by = Some(referrer_code.owner);
        referrer = Some(referrer_code.owner);

        // New user signup bonus, only when a referral code was used
        signup_bonus = main_state.signup_bonus;
        credit(&mut profile.balance, signup_bonus)?;
        credit(&mut profile.total_earnings, signup_bonus)?;
    }

    emit!(UserRegisteredEvent {
        user: user_key,
        username,
        referral_code: code,
        referrer,
        signup_bonus,
        timestamp: now
    });

    Ok(())
}

// Registration context - passed with accounts
#[derive(Accounts)]
#[instruction(username: String, code: String)]
pub struct ARegisterUser<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    #[account(
        init,
        payer = user,
        seeds = [UserProfile::PREFIX_SEED, user.key().as_ref()],
        bump,
        space = 8 + UserProfile::MAX_SIZE
    )]
    pub profile: Box<Account<'info, UserProfile>>, // New profile

    #[account(
        init,
        payer = user,
        seeds = [ReferralCode::PREFIX_SEED, code.as_bytes()],
        bump,
        space = 8 + ReferralCode::MAX_SIZE
    )]
    pub code_account: Box<Account<'info, ReferralCode>>, // Claimed code; init fails on collision

    pub referrer_code_account: Option<Box<Account<'info, ReferralCode>>>, // Code used at signup

    #[account(mut)]
    pub referrer_profile: Option<Box<Account<'info, UserProfile>>>, // Profile owning that code

    #[account(
        init,
        payer = user,
        seeds = [ReferralRecord::PREFIX_SEED, user.key().as_ref()],
        bump,
        space = 8 + ReferralRecord::MAX_SIZE
    )]
    pub referral_record: Option<Box<Account<'info, ReferralRecord>>>, // Created when a referrer is linked

    pub system_program: Program<'info, System>
}

// This function normalizes the display name before it is stored
// Params
//   raw - Username as submitted
// Return
//   Trimmed name, or None when empty or too long after trimming
fn normalize_username(raw: &str) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() || name.len() > MAX_USERNAME_LEN {
        return None;
    }
    Some(name.to_string())
}

// The optional referrer accounts travel together. A referral record without
// the code that justifies it would persist a zero-filled record for a user
// who was never referred, and a code without the profile and record leaves
// nothing to credit or write.
// Params
//   has_code - Whether the signup code account was passed
//   has_profile - Whether the referrer profile was passed
//   has_record - Whether the referral record was passed
// Return
//   true when all three are present or all three are absent
fn referrer_accounts_aligned(has_code: bool, has_profile: bool, has_record: bool) -> bool {
    has_code == has_profile && has_code == has_record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_padding_is_stripped() {
        assert_eq!(normalize_username("  alice  ").as_deref(), Some("alice"));
        assert_eq!(normalize_username("bob").as_deref(), Some("bob"));
    }

    #[test]
    fn blank_or_overlong_username_is_rejected() {
        assert!(normalize_username("").is_none());
        assert!(normalize_username("   ").is_none());
        assert!(normalize_username(&"x".repeat(MAX_USERNAME_LEN + 1)).is_none());
        // Padding does not count against the limit
        let padded = format!("  {}  ", "x".repeat(MAX_USERNAME_LEN));
        assert_eq!(normalize_username(&padded).unwrap().len(), MAX_USERNAME_LEN);
    }

    #[test]
    fn referrer_accounts_are_all_or_none() {
        assert!(referrer_accounts_aligned(true, true, true));
        assert!(referrer_accounts_aligned(false, false, false));

        // A record without a code must be refused, not silently created
        assert!(!referrer_accounts_aligned(false, false, true));
        assert!(!referrer_accounts_aligned(true, true, false));
        assert!(!referrer_accounts_aligned(true, false, true));
        assert!(!referrer_accounts_aligned(false, true, false));
        assert!(!referrer_accounts_aligned(false, true, true));
        assert!(!referrer_accounts_aligned(true, false, false));
    }
}
