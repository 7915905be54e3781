pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

pub const DEF_PER_REFERRAL_BONUS: u64 = 80; // Paid to the referrer on the referee's first approved top-up
pub const DEF_SIGNUP_BONUS: u64 = 40; // Paid to a new user who signs up through a referral code
pub const DEF_MIN_ACCOUNT_AGE_DAYS: u64 = 7; // Withdrawals are blocked before this age

pub const MAX_PER_REFERRAL_BONUS: u64 = 10_000;
pub const MAX_SIGNUP_BONUS: u64 = 10_000;

// Referral codes: 8 chars over an unambiguous alphabet (no 0/O/1/I)
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const CODE_LEN: usize = 8;
pub const MAX_CODE_ATTEMPTS: u8 = 16;

pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_PROOF_URI_LEN: usize = 128;

pub const MAX_BANK_NAME_LEN: usize = 48;
pub const MAX_IBAN_LEN: usize = 34;
pub const MAX_ACCOUNT_HOLDER_LEN: usize = 48;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_BRANCH_LEN: usize = 48;

pub const MAX_MILESTONES: usize = 8;

// Default milestone ladder: (referrals required, reward amount)
pub const DEF_MILESTONES: [(u16, u64); 4] = [(5, 250), (10, 600), (25, 2_000), (50, 5_000)];
