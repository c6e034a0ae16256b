//! Command implementations

mod config;
mod split;

pub use config::config;
pub use split::{SplitArgs, split};
