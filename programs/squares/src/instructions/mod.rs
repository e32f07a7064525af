#![allow(ambiguous_glob_reexports)]

pub mod claim_cell;
pub mod close_pool;
pub mod initialize;
pub mod randomize_numbers;
pub mod release_cell;
pub mod reset_numbers;
pub mod set_avatar;
pub mod set_paid;
pub mod set_quarter_winner;
pub mod submit_score;
pub mod unclaim_cell;
pub mod update_config;

pub use claim_cell::*;
pub use close_pool::*;
pub use initialize::*;
pub use randomize_numbers::*;
pub use release_cell::*;
pub use reset_numbers::*;
pub use set_avatar::*;
pub use set_paid::*;
pub use set_quarter_winner::*;
pub use submit_score::*;
pub use unclaim_cell::*;
pub use update_config::*;
