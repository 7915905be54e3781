pub mod ixs;
pub use ixs::*;

pub mod state;
pub use state::*;

pub mod event;
pub use event::*;
