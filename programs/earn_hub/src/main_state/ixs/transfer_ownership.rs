use anchor_lang::prelude::*;
use crate::{
    error::EarnHubError,
    main_state::{MainState, OwnershipTransferred}
};

// This function hands the owner role - and with it the reviewer seat for
// top-up and withdrawal requests - to another wallet
// Params
//   ctx - Ownership transfer context
//   new_owner - Wallet taking over the owner role
// Return
//   Ok on success, ErrorCode on failure
pub fn transfer_ownership(
    ctx: Context<ATransferOwnership>,
    new_owner: Pubkey
) -> Result<()> {
    let main_state = &mut ctx.accounts.main_state;
    require!(main_state.owner.ne(&new_owner), EarnHubError::AlreadyBecameOwner);

    let previous_owner = std::mem::replace(&mut main_state.owner, new_owner);

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Ownership transfer context - passed with accounts
#[derive(Accounts)]
pub struct ATransferOwnership<'info> {
    #[account()]
    pub owner: Signer<'info>, // Outgoing owner

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump,
        has_one = owner
    )]
    pub main_state: Account<'info, MainState> // MainState handing over the owner role
}
