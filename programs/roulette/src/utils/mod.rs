pub mod bet;
pub mod payout;
pub mod randomness;
pub mod time;

pub use bet::*;
pub use payout::*;
pub use randomness::*;
pub use time::*;
