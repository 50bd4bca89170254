pub mod cli;
pub mod logging;

pub use cli::{Cli, Commands, NodeCommands};
