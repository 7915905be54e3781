use anchor_lang::prelude::error_code;

#[error_code]
pub enum EarnHubError {
    #[msg("Already became an owner")]
    AlreadyBecameOwner,

    #[msg("Amount must be greater than 0")]
    InvalidAmount,
    #[msg("Invalid username")]
    InvalidUsername,
    #[msg("Invalid proof reference")]
    InvalidProofUri,
    #[msg("Invalid bonus configuration")]
    InvalidBonusConfig,
    #[msg("Invalid milestone configuration")]
    InvalidMilestoneConfig,
    #[msg("Invalid bank details")]
    InvalidBankInfo,

    #[msg("Referral code space exhausted")]
    CodeSpaceExhausted,
    #[msg("Referral code does not match its account")]
    ReferralCodeMismatch,
    #[msg("Cannot refer yourself")]
    SelfReferral,
    #[msg("Referrer accounts missing")]
    MissingReferrerAccounts,
    #[msg("Referral record does not belong to this user")]
    InvalidReferralRecord,

    #[msg("Milestone not reached yet")]
    MilestoneNotReached,
    #[msg("Milestone already claimed")]
    MilestoneAlreadyClaimed,
    #[msg("Unknown milestone")]
    UnknownMilestone,

    #[msg("Request is not pending")]
    RequestNotPending,
    #[msg("Account is too new to withdraw")]
    AccountTooNew,
    #[msg("Bank details are incomplete")]
    BankInfoIncomplete,
    #[msg("Amount is below the plan minimum")]
    BelowPlanMinimum,
    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    MathOverflow
}
