pub mod config;
pub mod constants;

pub use config::SwarmConfig;
pub use constants::*;
