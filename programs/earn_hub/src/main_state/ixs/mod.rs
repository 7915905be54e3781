pub mod init_main_state;
pub use init_main_state::*;

pub mod update_main_state;
pub use update_main_state::*;

pub mod transfer_ownership;
pub use transfer_ownership::*;
