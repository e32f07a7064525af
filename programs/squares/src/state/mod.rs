pub mod board;
pub mod player_profile;
pub mod pool_config;

pub use board::*;
pub use player_profile::*;
pub use pool_config::*;
