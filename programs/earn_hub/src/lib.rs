use anchor_lang::prelude::*;

pub mod main_state;
pub mod plan;
pub mod profile;
pub mod referral;
pub mod request;

pub mod constants;
pub mod error;
pub mod utils;

use main_state::*;
use profile::*;
use referral::*;
use request::*;

declare_id!("56au1dtei4DnXD2vm9LNYaNzfya8rWnNAPfjGd4McF1d");

#[program]
pub mod earn_hub {
    use super::*;

    pub fn init_main_state(ctx: Context<AInitMainState>) -> Result<()> {
        main_state::init_main_state(ctx)
    }

    pub fn transfer_ownership(ctx: Context<ATransferOwnership>, new_owner: Pubkey) -> Result<()> {
        main_state::transfer_ownership(ctx, new_owner)
    }

    pub fn update_main_state(ctx: Context<AUpdateMainState>, input: UpdateMainStateInput) -> Result<()> {
        main_state::update_main_state(ctx, input)
    }

    pub fn register_user(ctx: Context<ARegisterUser>, username: String, code: String, code_attempt: u8) -> Result<()> {
        referral::register_user(ctx, username, code, code_attempt)
    }

    pub fn set_bank_info(ctx: Context<ASetBankInfo>, input: BankInfo) -> Result<()> {
        profile::set_bank_info(ctx, input)
    }

    pub fn submit_top_up(ctx: Context<ASubmitTopUp>, amount: u64, proof_uri: String) -> Result<()> {
        request::submit_top_up(ctx, amount, proof_uri)
    }

    pub fn review_top_up(ctx: Context<AReviewTopUp>, approve: bool) -> Result<()> {
        request::review_top_up(ctx, approve)
    }

    pub fn check_withdrawal_eligibility(ctx: Context<ACheckEligibility>, amount: u64) -> Result<()> {
        request::check_withdrawal_eligibility(ctx, amount)
    }

    pub fn submit_withdraw(ctx: Context<ASubmitWithdraw>, amount: u64) -> Result<()> {
        request::submit_withdraw(ctx, amount)
    }

    pub fn review_withdraw(ctx: Context<AReviewWithdraw>, approve: bool) -> Result<()> {
        request::review_withdraw(ctx, approve)
    }

    pub fn claim_milestone(ctx: Context<AClaimMilestone>, milestone_index: u8) -> Result<()> {
        referral::claim_milestone(ctx, milestone_index)
    }

    pub fn referral_summary<'info>(
        ctx: Context<'_, '_, 'info, 'info, AReferralSummary<'info>>
    ) -> Result<()> {
        referral::referral_summary(ctx)
    }
}
