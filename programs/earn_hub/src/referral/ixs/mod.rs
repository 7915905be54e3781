pub mod register;
pub use register::*;

pub mod claim_milestone;
pub use claim_milestone::*;

pub mod summary;
pub use summary::*;
