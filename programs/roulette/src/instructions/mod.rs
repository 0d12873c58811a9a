#![allow(ambiguous_glob_reexports)]

pub mod create_round;
pub mod finish_round;
pub mod initialize;
pub mod place_bet;
pub mod update_round;
pub mod withdraw;

pub use create_round::*;
pub use finish_round::*;
pub use initialize::*;
pub use place_bet::*;
pub use update_round::*;
pub use withdraw::*;
