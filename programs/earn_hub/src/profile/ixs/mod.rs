pub mod set_bank_info;
pub use set_bank_info::*;
