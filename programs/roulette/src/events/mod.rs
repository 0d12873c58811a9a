pub mod new_bet;
pub mod pool_withdrawn;
pub mod round_created;
pub mod round_result;
pub mod round_updated;

pub use new_bet::*;
pub use pool_withdrawn::*;
pub use round_created::*;
pub use round_result::*;
pub use round_updated::*;
