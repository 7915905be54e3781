pub mod tiers;
pub use tiers::*;
