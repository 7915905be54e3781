pub mod submit_topup;
pub use submit_topup::*;

pub mod review_topup;
pub use review_topup::*;

pub mod check_eligibility;
pub use check_eligibility::*;

pub mod submit_withdraw;
pub use submit_withdraw::*;

pub mod review_withdraw;
pub use review_withdraw::*;
