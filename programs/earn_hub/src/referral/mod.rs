pub mod ixs;
pub use ixs::*;

pub mod state;
pub use state::*;

pub mod event;
pub use event::*;

pub mod code;
pub use code::*;

pub mod ledger;
pub use ledger::*;
